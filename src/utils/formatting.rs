//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Fractional hours → "08h 30m" (or "08:30" when `short`).
/// Rounded to the nearest minute.
pub fn hours2readable(hours: f64, short: bool) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let abs_m = total_minutes.abs();
    let h = abs_m / 60;
    let m = abs_m % 60;

    if short {
        format!("{}{:02}:{:02}", sign, h, m)
    } else {
        format!("{}{:02}h {:02}m", sign, h, m)
    }
}

/// Hours as a decimal number, two digits, trailing zeros trimmed ("8", "7.5").
pub fn hours_decimal(hours: f64) -> String {
    let s = format!("{:.2}", hours);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
