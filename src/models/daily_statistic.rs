use chrono::NaiveDate;
use serde::Serialize;

/// Per-day figures of the weekly sheet. Recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStatistic {
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub clock_in_sessions: u32,
    pub break_hours: f64,
}

impl DailyStatistic {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            hours_worked: 0.0,
            clock_in_sessions: 0,
            break_hours: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReport {
    /// Exactly one entry per day of the window, oldest first.
    pub days: Vec<DailyStatistic>,
    pub weekly_total: f64,
}

impl WeeklyReport {
    pub fn day(&self, date: NaiveDate) -> Option<&DailyStatistic> {
        self.days.iter().find(|d| d.date == date)
    }
}
