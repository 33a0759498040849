use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;
use crate::utils::date;

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (kind, description) = match cmd {
        Commands::In { description } => (EventKind::ClockIn, description),
        Commands::Out { description } => (EventKind::ClockOut, description),
        _ => return Ok(()),
    };

    let pool = DbPool::open_initialized(&cfg.database)?;
    let ev = PunchLogic::punch(
        &pool,
        kind,
        description.as_deref().unwrap_or(""),
        date::now(),
        cfg.duplicate_clock_in,
    )?;

    success(format!(
        "punched {} at {}",
        ev.kind.as_str(),
        ev.timestamp.format(&cfg.time_format)
    ));
    Ok(())
}
