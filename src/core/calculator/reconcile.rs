//! Weekly reconciliation of punch events.
//!
//! Pairs every clock-out with the clock-in that precedes it and buckets the
//! resulting durations by calendar day:
//! - a session is credited to the day of its clock-out, even across midnight
//! - a break (clock-out → next clock-in) is credited to the day of the clock-in
//! - a clock-out with no open clock-in is ignored
//! - a clock-in still open at the end of the scan is not counted

use crate::core::calculator::window::{ReportWindow, WINDOW_DAYS};
use crate::errors::{AppError, AppResult};
use crate::models::daily_statistic::{DailyStatistic, WeeklyReport};
use crate::models::event_kind::EventKind;
use crate::models::punch_event::PunchEvent;
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// What to do with a clock-in that arrives while another one is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateClockInPolicy {
    /// The newer clock-in replaces the open one.
    #[default]
    LastWriteWins,
    /// Abort the report with `AppError::DuplicateClockIn`.
    Reject,
}

/// Scan state, local to one `compute_report` call.
#[derive(Debug, Default)]
struct ReconciliationState {
    open_clock_in: Option<NaiveDateTime>,
    open_break_start: Option<NaiveDateTime>,
}

fn hours(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 / 3600.0
}

/// Build the 7-day report for the window ending at `as_of`.
///
/// `events` must already be restricted to the window and sorted by
/// timestamp (then insertion order); no re-sorting happens here.
pub fn compute_report(
    events: &[PunchEvent],
    as_of: NaiveDateTime,
    policy: DuplicateClockInPolicy,
) -> AppResult<WeeklyReport> {
    let window = ReportWindow::ending_at(as_of);

    let mut days: Vec<DailyStatistic> = window
        .dates()
        .into_iter()
        .map(DailyStatistic::empty)
        .collect();
    debug_assert_eq!(days.len(), WINDOW_DAYS);

    let mut state = ReconciliationState::default();
    let mut weekly_total = 0.0;

    for ev in events {
        let Some(idx) = window.day_offset(ev.date()) else {
            continue;
        };
        let stats = &mut days[idx];

        match ev.kind {
            EventKind::ClockIn => {
                if let Some(open) = state.open_clock_in
                    && policy == DuplicateClockInPolicy::Reject
                {
                    return Err(AppError::DuplicateClockIn {
                        open,
                        next: ev.timestamp,
                    });
                }

                stats.clock_in_sessions += 1;

                if let Some(break_start) = state.open_break_start.take() {
                    stats.break_hours += hours(ev.timestamp - break_start);
                }

                state.open_clock_in = Some(ev.timestamp);
            }
            EventKind::ClockOut => {
                // Dangling clock-out: nothing to close.
                let Some(clock_in) = state.open_clock_in.take() else {
                    continue;
                };

                let duration = hours(ev.timestamp - clock_in);
                stats.hours_worked += duration;
                weekly_total += duration;

                state.open_break_start = Some(ev.timestamp);
            }
        }
    }

    Ok(WeeklyReport { days, weekly_total })
}
