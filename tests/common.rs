#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;
use timecard::db::initialize::init_db;
use timecard::models::event_kind::EventKind;
use timecard::models::punch_event::PunchEvent;

pub fn tc() -> Command {
    cargo_bin_cmd!("timecard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timecard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// In-memory database with the current schema.
pub fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init db");
    conn
}

/// "2025-03-10 09:00" → NaiveDateTime
pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{s}:00"), "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| panic!("bad test timestamp {s}"))
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("bad test date")
}

pub fn clock_in(s: &str) -> PunchEvent {
    PunchEvent::new(at(s), EventKind::ClockIn, "")
}

pub fn clock_out(s: &str) -> PunchEvent {
    PunchEvent::new(at(s), EventKind::ClockOut, "")
}

pub fn assert_hours(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected} hours, got {actual}"
    );
}
