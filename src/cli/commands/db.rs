use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

/// Maintenance actions on the timesheet database, run in a fixed order:
/// migrate → info → check → vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Running migrations…");
        init_db(&pool.conn)?;
        success("Migrations completed.");
    }

    if *show_info {
        stats::print_db_info(&pool)?;
    }

    if *check {
        info("Running integrity check…");
        match stats::integrity_check(&pool)? {
            None => success("Integrity check passed."),
            Some(report) => error(format!("Integrity check failed: {}", report)),
        }
    }

    if *vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
