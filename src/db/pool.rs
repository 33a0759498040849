//! SQLite connection wrapper (one connection per CLI invocation).

use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;

pub struct DbPool {
    pub conn: Connection,
    pub path: String,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let resolved = expand_tilde(path);
        let conn = Connection::open(&resolved)?;
        Ok(Self {
            conn,
            path: resolved.to_string_lossy().to_string(),
        })
    }

    /// Open the database and bring its schema up to date.
    pub fn open_initialized(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(pool)
    }
}
