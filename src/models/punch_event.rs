use super::event_kind::EventKind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Storage format of `timesheet.time` (local civil time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PunchEvent {
    pub id: i64,                   // ⇔ timesheet.id (insertion order)
    pub timestamp: NaiveDateTime,  // ⇔ timesheet.time (TEXT "YYYY-MM-DD HH:MM:SS")
    pub kind: EventKind,           // ⇔ timesheet.kind (0 = in, 1 = out)
    pub description: String,       // ⇔ timesheet.description (may be empty)
}

impl PunchEvent {
    /// Build an event that has not been stored yet (`id = 0`).
    pub fn new(timestamp: NaiveDateTime, kind: EventKind, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            timestamp,
            kind,
            description: description.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
