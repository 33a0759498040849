//! Trailing seven-day reporting window.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

pub const WINDOW_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    /// Midnight of `first_day`.
    pub start: NaiveDateTime,
    /// Inclusive upper bound (the moment the report is requested).
    pub end: NaiveDateTime,
}

impl ReportWindow {
    /// Window of the 7 calendar days ending on `as_of`'s day, inclusive.
    ///
    /// Within the first 6 days of chrono's calendar the window is pinned to
    /// `NaiveDate::MIN ..= MIN + 6 days`, so it still holds 7 days.
    pub fn ending_at(as_of: NaiveDateTime) -> Self {
        let span = Days::new(WINDOW_DAYS as u64 - 1);
        let (first_day, last_day) = match as_of.date().checked_sub_days(span) {
            Some(first) => (first, as_of.date()),
            None => {
                let first = NaiveDate::MIN;
                (first, first.checked_add_days(span).unwrap_or(first))
            }
        };

        Self {
            first_day,
            last_day,
            start: first_day.and_time(NaiveTime::MIN),
            end: as_of,
        }
    }

    /// The window's days, oldest first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.first_day
            .iter_days()
            .take_while(|d| *d <= self.last_day)
            .collect()
    }

    /// Bucket index of `date`, or None when it falls outside the window.
    pub fn day_offset(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.first_day).num_days();
        if (0..WINDOW_DAYS as i64).contains(&offset) {
            Some(offset as usize)
        } else {
            None
        }
    }
}
