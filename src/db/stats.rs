use crate::db::pool::DbPool;
use crate::models::punch_event::TIMESTAMP_FORMAT;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDateTime;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(&pool.path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, pool.path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL PUNCHES
    //
    let (total, clock_ins): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(kind = 0), 0) FROM timesheet",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Total punches:{} {}{}{} ({} in / {} out)",
        CYAN,
        RESET,
        GREEN,
        total,
        RESET,
        clock_ins,
        total - clock_ins
    );

    //
    // 3) TIME RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT time FROM timesheet ORDER BY time ASC, id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT time FROM timesheet ORDER BY time DESC, id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Time range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE PUNCHES/DAY
    //
    if let (Some(f), Some(l)) = (first, last) {
        let t1 = parse_timestamp(&f)?;
        let t2 = parse_timestamp(&l)?;
        let days = (t2.date() - t1.date()).num_days().max(1);

        let avg = total as f64 / days as f64;
        println!("{}• Average punches/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}

fn parse_timestamp(s: &str) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// `PRAGMA integrity_check`; None when SQLite answers "ok".
pub fn integrity_check(pool: &DbPool) -> rusqlite::Result<Option<String>> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok((result != "ok").then_some(result))
}
