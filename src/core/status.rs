use crate::config::Config;
use crate::core::calculator::status::current_status;
use crate::db::pool::DbPool;
use crate::db::queries::most_recent_event;
use crate::errors::AppResult;
use crate::models::status::ClockStatus;
use crate::ui::messages::badge;
use ansi_term::Colour;

pub struct StatusLogic;

impl StatusLogic {
    pub fn load(pool: &DbPool) -> AppResult<ClockStatus> {
        let latest = most_recent_event(&pool.conn)?;
        Ok(current_status(latest.as_ref()))
    }

    pub fn print(pool: &DbPool, cfg: &Config) -> AppResult<ClockStatus> {
        let status = Self::load(pool)?;

        match status.since {
            Some(since) if status.is_clocked_in => println!(
                "{} Working since: {}",
                badge("In", Colour::Black, Colour::RGB(0xEE, 0xF5, 0x72)),
                since.format(&cfg.time_format)
            ),
            _ => println!(
                "{} Currently off the clock",
                badge("Out", Colour::White, Colour::RGB(0xDB, 0x45, 0xBE))
            ),
        }

        Ok(status)
    }
}
