use crate::errors::AppError;
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::models::punch_event::{PunchEvent, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<PunchEvent> {
    let time_str: String = row.get("time")?;
    let timestamp = NaiveDateTime::parse_from_str(&time_str, TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(time_str.clone())),
        )
    })?;

    let kind_raw: i64 = row.get("kind")?;
    let kind = EventKind::from_db(kind_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Integer,
            Box::new(AppError::InvalidEventKind(kind_raw.to_string())),
        )
    })?;

    Ok(PunchEvent {
        id: row.get("id")?,
        timestamp,
        kind,
        description: row.get("description")?,
    })
}

/// Append one punch. Returns the stored event with its row id.
pub fn append_event(
    conn: &Connection,
    kind: EventKind,
    description: &str,
    timestamp: NaiveDateTime,
) -> AppResult<PunchEvent> {
    let mut ev = PunchEvent::new(timestamp, kind, description);

    conn.execute(
        "INSERT INTO timesheet (time, kind, description) VALUES (?1, ?2, ?3)",
        params![ev.timestamp_str(), ev.kind.to_db(), ev.description],
    )?;

    ev.id = conn.last_insert_rowid();
    Ok(ev)
}

/// All events with `start <= time <= end`, oldest first.
/// Same-second events keep their insertion order.
pub fn query_events_in_range(
    conn: &Connection,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<Vec<PunchEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, time, kind, description FROM timesheet
         WHERE time >= ?1 AND time <= ?2
         ORDER BY time ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            start.format(TIMESTAMP_FORMAT).to_string(),
            end.format(TIMESTAMP_FORMAT).to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Latest event across the whole history, if any.
pub fn most_recent_event(conn: &Connection) -> AppResult<Option<PunchEvent>> {
    let ev = conn
        .query_row(
            "SELECT id, time, kind, description FROM timesheet
             ORDER BY time DESC, id DESC
             LIMIT 1",
            [],
            map_row,
        )
        .optional()?;

    Ok(ev)
}
