pub mod daily_statistic;
pub mod event_kind;
pub mod punch_event;
pub mod status;
