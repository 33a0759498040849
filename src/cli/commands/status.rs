use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_initialized(&cfg.database)?;
    StatusLogic::print(&pool, cfg)?;
    Ok(())
}
