use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheet { events } = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;
        ReportLogic::print_sheet(&pool, cfg, date::now(), *events)?;
    }
    Ok(())
}
