use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// Current local civil time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn today() -> NaiveDate {
    now().date()
}
