//! Best-effort parsing for the date-ish strings in the customers table.
//!
//! Stored values are whatever data entry produced: RFC 3339 timestamps
//! written by this tool, plain ISO dates from the web date picker, or free
//! text from imports. Callers decide the fallback for unparseable input
//! (the raw string in terminal output, "N/A" in the workbook).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an RFC 3339 timestamp, `YYYY-MM-DD HH:MM:SS`, or plain `YYYY-MM-DD`.
pub fn parse_date_value(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// `Mar 05, 2024`, or `None` when the value is absent or unparseable.
pub fn format_short_date(value: &str) -> Option<String> {
    parse_date_value(value).map(|dt| dt.format("%b %d, %Y").to_string())
}

/// `Mar 05, 2024 14:30`; creation timestamps keep the time of day.
pub fn format_date_time(value: &str) -> Option<String> {
    parse_date_value(value).map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
}
