/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notes: None,
            due: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_due(mut self, due: DateTime<Utc>) -> Self {
        self.due = Some(due);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_task_skips_empty_fields() {
        let body = serde_json::to_value(NewTask::new("Read mail")).expect("serialize");
        assert_eq!(body, serde_json::json!({ "title": "Read mail" }));
    }

    #[test]
    fn test_new_task_due_is_rfc3339() {
        let due = Utc.with_ymd_and_hms(2020, 7, 20, 0, 0, 0).unwrap();
        let body = serde_json::to_value(NewTask::new("Pay rent").with_notes("by noon").with_due(due))
            .expect("serialize");
        assert_eq!(body["notes"], "by noon");
        assert_eq!(body["due"], "2020-07-20T00:00:00Z");
    }
}
