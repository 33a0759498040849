use crate::core::calculator::reconcile::DuplicateClockInPolicy;
use crate::core::calculator::status::current_status;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{append_event, most_recent_event};
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::models::punch_event::PunchEvent;
use crate::ui::messages::warning;
use chrono::NaiveDateTime;

pub struct PunchLogic;

impl PunchLogic {
    /// Record a clock-in or clock-out at `at`.
    ///
    /// Repeating the current state only produces a warning, except a second
    /// clock-in under `DuplicateClockInPolicy::Reject`, which is refused.
    pub fn punch(
        pool: &DbPool,
        kind: EventKind,
        description: &str,
        at: NaiveDateTime,
        policy: DuplicateClockInPolicy,
    ) -> AppResult<PunchEvent> {
        let status = current_status(most_recent_event(&pool.conn)?.as_ref());

        match (kind, status.since) {
            (EventKind::ClockIn, Some(open)) => {
                if policy == DuplicateClockInPolicy::Reject {
                    return Err(AppError::DuplicateClockIn { open, next: at });
                }
                warning(format!(
                    "Already clocked in since {}; only the latest clock-in will be measured.",
                    open
                ));
            }
            (EventKind::ClockOut, None) => {
                warning("Not clocked in; this clock-out will not add any worked time.")
            }
            _ => {}
        }

        let ev = append_event(&pool.conn, kind, description, at)?;

        let message = if description.is_empty() {
            format!("Punched {}", kind.as_str())
        } else {
            format!("Punched {}: {}", kind.as_str(), description)
        };
        ttlog_quiet(&pool.conn, kind.as_str(), &ev.timestamp_str(), &message);

        Ok(ev)
    }
}
