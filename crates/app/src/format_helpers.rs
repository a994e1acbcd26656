/// Shared formatting utilities for the UI layer.
///
/// All functions accept ISO-8601 date strings (e.g. "2026-01-20T21:35:00Z")
/// and fall back to the input when it does not look like one.
use chrono::{DateTime, Utc};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2026".
pub fn format_date_human(date_str: &str) -> String {
    let parts = (date_str.get(..4), date_str.get(5..7), date_str.get(8..10));
    let (Some(year), Some(month), Some(day)) = parts else {
        return date_str.to_string();
    };

    match (parse_month(month), day.parse::<u32>()) {
        (Some(m), Ok(day_num)) => format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year),
        _ => date_str.get(..10).unwrap_or(date_str).to_string(),
    }
}

/// Format an ISO datetime string as "Jan 20, 2026 9:35 PM".
///
/// Falls back to date-only if the time portion is missing.
pub fn format_datetime_human(date_str: &str) -> String {
    let date_part = format_date_human(date_str);

    let (Some(hour_str), Some(min_str)) = (date_str.get(11..13), date_str.get(14..16)) else {
        return date_part;
    };

    let Some(hour) = hour_str
        .parse::<u32>()
        .ok()
        .filter(|h| (0..24).contains(h))
    else {
        return date_part;
    };

    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };

    format!("{} {}:{} {}", date_part, display_hour, min_str, ampm)
}

/// Points without a trailing ".0" for whole numbers.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{:.0}", points)
    } else {
        format!("{:.1}", points)
    }
}

/// "3 days" / "1 day" style relative due text, for dates in the future.
pub fn format_due_in(due: DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let days = (due - now).num_days();
    match days {
        d if d < 0 => None,
        0 => Some("Due today".to_string()),
        1 => Some("Due in 1 day".to_string()),
        d => Some(format!("Due in {} days", d)),
    }
}
