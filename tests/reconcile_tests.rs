use timecard::core::calculator::window::ReportWindow;
use timecard::errors::AppError;
use timecard::models::event_kind::EventKind;
use timecard::models::punch_event::PunchEvent;
use timecard::{DuplicateClockInPolicy, compute_report};

mod common;
use common::{assert_hours, at, clock_in, clock_out, day};

const LWW: DuplicateClockInPolicy = DuplicateClockInPolicy::LastWriteWins;

// Window for these tests: Mon 2025-03-10 .. Sun 2025-03-16.
const AS_OF: &str = "2025-03-16 18:00";

#[test]
fn test_empty_log_gives_seven_zeroed_days() {
    let report = compute_report(&[], at(AS_OF), LWW).unwrap();

    assert_eq!(report.days.len(), 7);
    assert_eq!(report.days[0].date, day("2025-03-10"));
    assert_eq!(report.days[6].date, day("2025-03-16"));

    for (i, d) in report.days.iter().enumerate() {
        assert_eq!(d.date, day("2025-03-10") + chrono::Days::new(i as u64));
        assert_hours(d.hours_worked, 0.0);
        assert_hours(d.break_hours, 0.0);
        assert_eq!(d.clock_in_sessions, 0);
    }
    assert_hours(report.weekly_total, 0.0);
}

#[test]
fn test_window_covers_month_boundary() {
    let report = compute_report(&[], at("2025-03-02 08:00"), LWW).unwrap();
    let dates: Vec<_> = report.days.iter().map(|d| d.date).collect();

    assert_eq!(dates.first(), Some(&day("2025-02-24")));
    assert_eq!(dates.last(), Some(&day("2025-03-02")));
    assert!(dates.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
}

#[test]
fn test_single_session() {
    let events = [clock_in("2025-03-10 09:00"), clock_out("2025-03-10 17:00")];
    let report = compute_report(&events, at(AS_OF), LWW).unwrap();

    let monday = report.day(day("2025-03-10")).unwrap();
    assert_hours(monday.hours_worked, 8.0);
    assert_eq!(monday.clock_in_sessions, 1);
    assert_hours(monday.break_hours, 0.0);
    assert_hours(report.weekly_total, 8.0);

    for d in report.days.iter().filter(|d| d.date != day("2025-03-10")) {
        assert_hours(d.hours_worked, 0.0);
        assert_eq!(d.clock_in_sessions, 0);
    }
}

#[test]
fn test_two_sessions_with_lunch_break() {
    let events = [
        clock_in("2025-03-10 09:00"),
        clock_out("2025-03-10 12:00"),
        clock_in("2025-03-10 13:00"),
        clock_out("2025-03-10 17:00"),
    ];
    let report = compute_report(&events, at(AS_OF), LWW).unwrap();

    let monday = report.day(day("2025-03-10")).unwrap();
    assert_hours(monday.hours_worked, 7.0);
    assert_eq!(monday.clock_in_sessions, 2);
    assert_hours(monday.break_hours, 1.0);
    assert_hours(report.weekly_total, 7.0);
}

#[test]
fn test_overnight_session_credited_to_clock_out_day() {
    // Window: Thu 2025-03-13 .. Wed 2025-03-19
    let events = [clock_in("2025-03-16 23:00"), clock_out("2025-03-17 01:00")];
    let report = compute_report(&events, at("2025-03-19 12:00"), LWW).unwrap();

    let sunday = report.day(day("2025-03-16")).unwrap();
    let monday = report.day(day("2025-03-17")).unwrap();

    assert_hours(sunday.hours_worked, 0.0);
    assert_eq!(sunday.clock_in_sessions, 1);
    assert_hours(monday.hours_worked, 2.0);
    assert_eq!(monday.clock_in_sessions, 0);
    assert_hours(report.weekly_total, 2.0);
}

#[test]
fn test_session_ending_exactly_at_midnight() {
    let events = [clock_in("2025-03-11 20:00"), clock_out("2025-03-12 00:00")];
    let report = compute_report(&events, at(AS_OF), LWW).unwrap();

    assert_hours(report.day(day("2025-03-11")).unwrap().hours_worked, 0.0);
    assert_hours(report.day(day("2025-03-12")).unwrap().hours_worked, 4.0);
}

#[test]
fn test_break_credited_to_day_of_next_clock_in() {
    let events = [
        clock_in("2025-03-11 14:00"),
        clock_out("2025-03-11 22:00"),
        clock_in("2025-03-12 08:00"),
        clock_out("2025-03-12 09:30"),
    ];
    let report = compute_report(&events, at(AS_OF), LWW).unwrap();

    assert_hours(report.day(day("2025-03-11")).unwrap().break_hours, 0.0);
    assert_hours(report.day(day("2025-03-12")).unwrap().break_hours, 10.0);
    assert_hours(report.day(day("2025-03-12")).unwrap().hours_worked, 1.5);
    assert_hours(report.weekly_total, 9.5);
}

#[test]
fn test_open_session_is_not_counted() {
    let events = [clock_in("2025-03-16 09:00")];
    let report = compute_report(&events, at("2025-03-16 11:00"), LWW).unwrap();

    let today = report.day(day("2025-03-16")).unwrap();
    assert_hours(today.hours_worked, 0.0);
    assert_eq!(today.clock_in_sessions, 1);
    assert_hours(report.weekly_total, 0.0);
}

#[test]
fn test_dangling_clock_out_is_ignored() {
    let events = [
        clock_out("2025-03-12 08:00"),
        clock_in("2025-03-12 09:00"),
        clock_out("2025-03-12 12:00"),
        clock_out("2025-03-12 13:00"),
    ];
    let report = compute_report(&events, at(AS_OF), LWW).unwrap();

    let wed = report.day(day("2025-03-12")).unwrap();
    assert_hours(wed.hours_worked, 3.0);
    assert_eq!(wed.clock_in_sessions, 1);
    assert_hours(wed.break_hours, 0.0);
    assert_hours(report.weekly_total, 3.0);
}

#[test]
fn test_repeated_clock_in_last_write_wins() {
    let events = [
        clock_in("2025-03-13 08:00"),
        clock_in("2025-03-13 10:00"),
        clock_out("2025-03-13 12:00"),
    ];
    let report = compute_report(&events, at(AS_OF), LWW).unwrap();

    let thu = report.day(day("2025-03-13")).unwrap();
    assert_eq!(thu.clock_in_sessions, 2);
    assert_hours(thu.hours_worked, 2.0);
}

#[test]
fn test_repeated_clock_in_rejected_by_policy() {
    let events = [
        clock_in("2025-03-13 08:00"),
        clock_in("2025-03-13 10:00"),
        clock_out("2025-03-13 12:00"),
    ];
    let err = compute_report(&events, at(AS_OF), DuplicateClockInPolicy::Reject).unwrap_err();

    match err {
        AppError::DuplicateClockIn { open, next } => {
            assert_eq!(open, at("2025-03-13 08:00"));
            assert_eq!(next, at("2025-03-13 10:00"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_reject_policy_accepts_alternating_log() {
    let events = [
        clock_in("2025-03-13 08:00"),
        clock_out("2025-03-13 12:00"),
        clock_in("2025-03-13 12:30"),
        clock_out("2025-03-13 16:30"),
    ];
    let report = compute_report(&events, at(AS_OF), DuplicateClockInPolicy::Reject).unwrap();
    assert_hours(report.weekly_total, 8.0);
}

#[test]
fn test_zero_duration_session() {
    let events = [clock_in("2025-03-14 09:00"), clock_out("2025-03-14 09:00")];
    let report = compute_report(&events, at(AS_OF), LWW).unwrap();

    let fri = report.day(day("2025-03-14")).unwrap();
    assert_hours(fri.hours_worked, 0.0);
    assert_eq!(fri.clock_in_sessions, 1);
}

#[test]
fn test_events_outside_window_are_skipped() {
    let events = [
        clock_in("2025-03-01 09:00"),
        clock_out("2025-03-01 17:00"),
        clock_in("2025-03-15 09:00"),
        clock_out("2025-03-15 10:00"),
    ];
    let report = compute_report(&events, at(AS_OF), LWW).unwrap();

    assert_hours(report.weekly_total, 1.0);
    assert_eq!(report.days.iter().map(|d| d.clock_in_sessions).sum::<u32>(), 1);
}

#[test]
fn test_second_precision() {
    let events = [
        PunchEvent::new(
            chrono::NaiveDateTime::parse_from_str("2025-03-10 09:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            EventKind::ClockIn,
            "",
        ),
        PunchEvent::new(
            chrono::NaiveDateTime::parse_from_str("2025-03-10 09:00:36", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            EventKind::ClockOut,
            "",
        ),
    ];
    let report = compute_report(&events, at(AS_OF), LWW).unwrap();
    assert_hours(report.weekly_total, 0.01);
}

#[test]
fn test_weekly_total_equals_sum_of_days() {
    // Alternating logs with varied shapes across the whole window.
    let window = ReportWindow::ending_at(at(AS_OF));
    for shift in 0..6u32 {
        let mut events = Vec::new();
        for (i, date) in window.dates().into_iter().enumerate() {
            if (i as u32 + shift) % 3 == 0 {
                continue;
            }
            let start = 7 + (i as u32 + shift) % 4;
            let d = date.format("%Y-%m-%d").to_string();
            events.push(clock_in(&format!("{d} {:02}:00", start)));
            events.push(clock_out(&format!("{d} {:02}:15", start + 2)));
            events.push(clock_in(&format!("{d} {:02}:45", start + 3)));
            events.push(clock_out(&format!("{d} {:02}:30", start + 6)));
        }

        let report = compute_report(&events, at(AS_OF), LWW).unwrap();
        let sum: f64 = report.days.iter().map(|d| d.hours_worked).sum();
        assert_hours(report.weekly_total, sum);
        assert!(report.days.iter().all(|d| d.hours_worked >= 0.0 && d.break_hours >= 0.0));
    }
}

#[test]
fn test_report_is_idempotent() {
    let events = [
        clock_in("2025-03-10 09:00"),
        clock_out("2025-03-10 12:00"),
        clock_in("2025-03-11 09:00"),
    ];
    let first = compute_report(&events, at(AS_OF), LWW).unwrap();
    let second = compute_report(&events, at(AS_OF), LWW).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_window_day_offsets() {
    let window = ReportWindow::ending_at(at(AS_OF));

    assert_eq!(window.start, at("2025-03-10 00:00"));
    assert_eq!(window.end, at(AS_OF));
    assert_eq!(window.day_offset(day("2025-03-10")), Some(0));
    assert_eq!(window.day_offset(day("2025-03-16")), Some(6));
    assert_eq!(window.day_offset(day("2025-03-09")), None);
    assert_eq!(window.day_offset(day("2025-03-17")), None);
}

#[test]
fn test_window_at_calendar_start_keeps_seven_days() {
    let as_of = chrono::NaiveDate::MIN.and_hms_opt(12, 0, 0).unwrap();
    let window = ReportWindow::ending_at(as_of);

    assert_eq!(window.dates().len(), 7);
    assert_eq!(window.first_day, chrono::NaiveDate::MIN);

    let report = compute_report(&[], as_of, LWW).unwrap();
    assert_eq!(report.days.len(), 7);
}
