use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

const LEGACY_TIMESHEET_MIGRATION: &str = "20241103_0001_timesheet_add_id";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `timesheet` table exists.
fn timesheet_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='timesheet'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `timesheet` table has an `id` column.
fn timesheet_has_id_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('timesheet')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "id" {
            return Ok(true);
        }
    }
    Ok(false)
}

fn ensure_timesheet_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_timesheet_time ON timesheet(time, id);",
    )
}

/// Create the `timesheet` table with the modern schema.
fn create_timesheet_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS timesheet (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            time         TEXT NOT NULL,
            kind         INTEGER NOT NULL CHECK(kind IN (0, 1)),
            description  TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    ensure_timesheet_index(conn)
}

/// Rebuild a legacy `timesheet (time, kind, description)` table so that every
/// row gets an `id`. Rows are copied in rowid order, which keeps the original
/// insertion order for same-second punches.
fn migrate_legacy_timesheet(conn: &Connection) -> Result<()> {
    warning("Legacy timesheet table detected — adding row ids...");

    conn.execute_batch(
        r#"
        BEGIN;

        ALTER TABLE timesheet RENAME TO timesheet_old;

        CREATE TABLE timesheet (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            time         TEXT NOT NULL,
            kind         INTEGER NOT NULL CHECK(kind IN (0, 1)),
            description  TEXT NOT NULL DEFAULT ''
        );

        INSERT INTO timesheet (time, kind, description)
        SELECT time, kind, COALESCE(description, '')
        FROM timesheet_old
        WHERE time IS NOT NULL AND kind IN (0, 1)
        ORDER BY rowid ASC;

        DROP TABLE timesheet_old;

        COMMIT;
        "#,
    )?;

    ensure_timesheet_index(conn)?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added id column to timesheet')",
        [LEGACY_TIMESHEET_MIGRATION],
    )?;

    success(format!(
        "Migration applied: {} → timesheet rebuilt with row ids",
        LEGACY_TIMESHEET_MIGRATION
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create or upgrade the timesheet table
    if !timesheet_table_exists(conn)? {
        create_timesheet_table(conn)?;
        success("Created timesheet table.");
    } else if !timesheet_has_id_column(conn)? {
        migrate_legacy_timesheet(conn)?;
    } else {
        ensure_timesheet_index(conn)?;
    }

    Ok(())
}
