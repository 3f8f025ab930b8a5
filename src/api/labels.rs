use chrono::{DateTime, Utc};

/// Time-axis tick label, e.g. `2024-01-01 06:30 AM`.
#[must_use]
pub fn format_time_tick(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %I:%M %p").to_string()
}

/// Shared cursor date label, e.g. `January 01, 14:30 PM`.
#[must_use]
pub fn format_cursor_date(date: DateTime<Utc>) -> String {
    date.format("%B %d, %H:%M %p").to_string()
}

/// Cursor and value-axis numeric label with two decimals.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}
