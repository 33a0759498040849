use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockStatus {
    pub is_clocked_in: bool,
    /// Timestamp of the open clock-in, only set while clocked in.
    pub since: Option<NaiveDateTime>,
}
