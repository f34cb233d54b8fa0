//! Display formatting for the dashboard. Pure functions, applied at render
//! time only; nothing formatted here is ever persisted or sent back over the
//! wire.

use chrono::{DateTime, Utc};

/// Comma-grouped integer rendering of the absolute value.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Absolute value with grouping, zero decimals, `VND` suffix. When `signed`,
/// a `+` leads positive non-zero values and a `-` leads negative ones.
pub fn format_currency(value: f64, signed: bool) -> String {
    let magnitude = group_thousands(value.abs().round() as u64);
    let sign = match signed {
        true if value > 0.0 => "+",
        true if value < 0.0 => "-",
        _ => "",
    };
    format!("{}{} VND", sign, magnitude)
}

/// Magnitude-scaled rendering: billions/millions/thousands with one decimal,
/// raw value below a thousand. Always `VND` suffixed.
pub fn format_compact_currency(value: f64) -> String {
    let magnitude = value.abs();
    let body = if magnitude >= 1_000_000_000.0 {
        format!("{:.1}B", magnitude / 1_000_000_000.0)
    } else if magnitude >= 1_000_000.0 {
        format!("{:.1}M", magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}K", magnitude / 1_000.0)
    } else {
        format!("{:.0}", magnitude)
    };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{} VND", sign, body)
}

/// Two decimals with a `%` suffix and a leading `+` for positive values.
pub fn format_percent(value: f64) -> String {
    format_percent_opts(value, true)
}

pub fn format_percent_opts(value: f64, signed: bool) -> String {
    if signed && value > 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %d, %Y").to_string()
}

pub fn format_datetime(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%b %d, %Y %H:%M").to_string()
}

/// Bucketed elapsed time against `now`, floor-based: under a minute is
/// "Just now", then minutes, hours, days, and past a week the absolute date.
/// Future timestamps bucket as "Just now".
pub fn format_relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    if elapsed.num_minutes() < 1 {
        "Just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        format!("{}m ago", elapsed.num_minutes())
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_days() < 7 {
        format!("{}d ago", elapsed.num_days())
    } else {
        format_date(timestamp)
    }
}

/// Comma-grouped integer, no currency suffix.
pub fn format_price(value: f64) -> String {
    let body = group_thousands(value.abs().round() as u64);
    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}
