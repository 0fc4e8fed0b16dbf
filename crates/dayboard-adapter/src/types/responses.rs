/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response wrappers with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::models::{Task, TaskList};

/// A panel payload that may legitimately be empty
///
/// The backend answers some panels with `[]` (or `null`) when the account has
/// nothing to report. Anything else must match `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot<T> {
    Data(T),
    NoData,
}

impl<T> Snapshot<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Snapshot::Data(data) => Some(data),
            Snapshot::NoData => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Snapshot::Data(data) => Some(data),
            Snapshot::NoData => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Snapshot::NoData)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Snapshot<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Null => Ok(Snapshot::NoData),
            Value::Array(items) if items.is_empty() => Ok(Snapshot::NoData),
            _ => serde_json::from_value(value)
                .map(Snapshot::Data)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// `GET /tasklists` payload: every list plus its tasks keyed by list id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskListsResponse {
    #[serde(default, alias = "taskLists")]
    pub tasklists: Vec<TaskList>,
    #[serde(default)]
    pub tasks: BTreeMap<String, Vec<Task>>,
}
