use crate::config::Config;
use crate::core::calculator::reconcile::{DuplicateClockInPolicy, compute_report};
use crate::core::calculator::status::current_status;
use crate::core::calculator::window::ReportWindow;
use crate::db::pool::DbPool;
use crate::db::queries::{most_recent_event, query_events_in_range};
use crate::errors::AppResult;
use crate::models::daily_statistic::WeeklyReport;
use crate::models::punch_event::PunchEvent;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_in_out, colorize_optional};
use crate::utils::formatting::{bold, hours2readable, hours_decimal};
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;
use rusqlite::Connection;

pub struct ReportLogic;

impl ReportLogic {
    /// Fetch the window's punches and reconcile them.
    pub fn build(
        conn: &Connection,
        as_of: NaiveDateTime,
        policy: DuplicateClockInPolicy,
    ) -> AppResult<(WeeklyReport, Vec<PunchEvent>)> {
        let window = ReportWindow::ending_at(as_of);
        let events = query_events_in_range(conn, window.start, window.end)?;
        let report = compute_report(&events, as_of, policy)?;
        Ok((report, events))
    }

    /// Print the weekly sheet (the `sheet` command).
    pub fn print_sheet(
        pool: &DbPool,
        cfg: &Config,
        as_of: NaiveDateTime,
        show_events: bool,
    ) -> AppResult<WeeklyReport> {
        let (report, events) = Self::build(&pool.conn, as_of, cfg.duplicate_clock_in)?;

        println!(
            "This Week's Hours: {} ({}h)",
            bold(&hours2readable(report.weekly_total, false)),
            hours_decimal(report.weekly_total)
        );

        let mut table = Table::new(vec![
            Column::left("DAY"),
            Column::right("HOURS"),
            Column::right("PUNCHES"),
            Column::right("BREAKS"),
        ]);

        for day in &report.days {
            let label = day.date.format(&cfg.date_format).to_string();
            let label = if day.date == as_of.date() { bold(&label) } else { label };

            table.add_row(vec![
                label,
                colorize_optional(&hours2readable(day.hours_worked, false)),
                colorize_optional(&day.clock_in_sessions.to_string()),
                colorize_optional(&hours2readable(day.break_hours, false)),
            ]);
        }

        print!("{}", table.render());

        let status = current_status(most_recent_event(&pool.conn)?.as_ref());
        if let Some(since) = status.since {
            info(format!(
                "Clocked in since {}; the running session is not counted yet.",
                since.format(&cfg.time_format)
            ));
        }

        if show_events {
            print_events(&events);
        }

        Ok(report)
    }
}

fn print_events(events: &[PunchEvent]) {
    println!();
    header("Punches");

    if events.is_empty() {
        println!("No punches in the last 7 days.");
        return;
    }

    for ev in events {
        println!(
            "{:>5}  {}  {}  {}",
            ev.id,
            ev.timestamp_str(),
            colorize_in_out(&format!("{:<3}", ev.kind.as_str()), ev.kind.is_in()),
            ev.description
        );
    }
}
