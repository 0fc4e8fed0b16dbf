/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
[UPDATE]: Accept org.json map/myArrayList wrappers on directions payloads
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// `GET /gmail` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GmailSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m_hours: Option<u32>,
    pub unread_emails_days: u32,
    pub unread_emails_hours: u32,
    pub unread_important_emails: u32,
    #[serde(default)]
    pub sender: String,
}

/// `GET /tasks` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    #[serde(default)]
    pub task_list_titles: Vec<String>,
    pub tasks_to_complete: u32,
    pub tasks_due_today: u32,
    pub tasks_completed_today: u32,
    pub tasks_overdue: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// `GET /calendar` payload; hour fields are durations in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    pub start_day: u8,
    #[serde(default, alias = "workHours")]
    pub work_hours_per_day: Vec<u64>,
    #[serde(default, alias = "personalHours")]
    pub personal_hours_per_day: Vec<u64>,
}

/// One entry of `GET /gmail-actionable-emails`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionableMessage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<MessagePayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub headers: Vec<MessageHeader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageHeader {
    pub name: String,
    pub value: String,
}

impl ActionableMessage {
    /// Subject line, falling back to the `Subject` header, the snippet, then the id
    pub fn headline(&self) -> &str {
        if let Some(subject) = self.subject.as_deref().filter(|s| !s.is_empty()) {
            return subject;
        }
        let header = self.payload.as_ref().and_then(|payload| {
            payload
                .headers
                .iter()
                .find(|header| header.name.eq_ignore_ascii_case("subject"))
        });
        if let Some(header) = header {
            return &header.value;
        }
        self.snippet
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.id)
    }
}

/// `GET /plan-mail` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMail {
    pub word_count: u32,
    pub average_reading_speed: u32,
    pub minutes_to_read: u32,
    #[serde(default)]
    pub potential_meeting_times: Vec<MeetingTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingTime {
    pub key: String,
    pub value: String,
}

/// `GET /directions` payload, normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "json_wrappers::Wrapped<json_wrappers::DirectionsWire>")]
pub struct DirectionsResult {
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub duration: String,
    pub distance: String,
    pub start_address: String,
    pub end_address: String,
}

impl DirectionsResult {
    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.routes.iter().flat_map(|route| route.legs.iter())
    }
}

// The backend serializes directions through org.json, which wraps every
// object in `{"map": ...}` and every array in `{"myArrayList": [...]}`.
mod json_wrappers {
    use serde::Deserialize;

    use super::{DirectionsResult, Leg, Route};

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub enum Wrapped<T> {
        Object { map: T },
        Plain(T),
    }

    impl<T> Wrapped<T> {
        fn into_inner(self) -> T {
            match self {
                Wrapped::Object { map } => map,
                Wrapped::Plain(inner) => inner,
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub enum WrappedList<T> {
        Object {
            #[serde(rename = "myArrayList")]
            items: Vec<T>,
        },
        Plain(Vec<T>),
    }

    impl<T> WrappedList<T> {
        fn into_vec(self) -> Vec<T> {
            match self {
                WrappedList::Object { items } => items,
                WrappedList::Plain(items) => items,
            }
        }
    }

    #[derive(Deserialize)]
    pub struct DirectionsWire {
        #[serde(default = "empty_list")]
        routes: WrappedList<Wrapped<RouteWire>>,
    }

    #[derive(Deserialize)]
    struct RouteWire {
        #[serde(default = "empty_list")]
        legs: WrappedList<Wrapped<LegWire>>,
    }

    #[derive(Deserialize)]
    struct LegWire {
        duration: Wrapped<TextValue>,
        distance: Wrapped<TextValue>,
        #[serde(default)]
        start_address: String,
        #[serde(default)]
        end_address: String,
    }

    #[derive(Deserialize)]
    struct TextValue {
        text: String,
    }

    fn empty_list<T>() -> WrappedList<T> {
        WrappedList::Plain(Vec::new())
    }

    impl From<Wrapped<DirectionsWire>> for DirectionsResult {
        fn from(wire: Wrapped<DirectionsWire>) -> Self {
            let routes = wire
                .into_inner()
                .routes
                .into_vec()
                .into_iter()
                .map(|route| Route {
                    legs: route
                        .into_inner()
                        .legs
                        .into_vec()
                        .into_iter()
                        .map(|leg| {
                            let leg = leg.into_inner();
                            Leg {
                                duration: leg.duration.into_inner().text,
                                distance: leg.distance.into_inner().text,
                                start_address: leg.start_address,
                                end_address: leg.end_address,
                            }
                        })
                        .collect(),
                })
                .collect();
            DirectionsResult { routes }
        }
    }
}
