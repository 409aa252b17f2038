use chrono::{DateTime, Local};
use serde::Serialize;

/// Run payload sent to the collector. Creation and completion each populate their own half.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: String,
    pub machine_name: String,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub files_count: u64,
}

impl Run {
    /// Payload for `POST /run`
    pub fn started(id: &str, machine_name: &str, start: DateTime<Local>) -> Self {
        Self {
            id: id.to_string(),
            machine_name: machine_name.to_string(),
            start: Some(start),
            ..Default::default()
        }
    }

    /// Payload for `PUT /run`
    pub fn ended(id: &str, end: DateTime<Local>, files_count: u64) -> Self {
        Self {
            id: id.to_string(),
            end: Some(end),
            files_count,
            ..Default::default()
        }
    }
}
