use crate::models::punch_event::PunchEvent;
use crate::models::status::ClockStatus;

/// Derive the clocked-in state from the latest event across all history.
pub fn current_status(most_recent: Option<&PunchEvent>) -> ClockStatus {
    match most_recent {
        Some(ev) if ev.kind.is_in() => ClockStatus {
            is_clocked_in: true,
            since: Some(ev.timestamp),
        },
        _ => ClockStatus::default(),
    }
}
