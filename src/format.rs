//! Date and Time Formatting
//!
//! Timestamps are formatted in the offset they carry, so the same feed renders
//! the same way on every host. Timestamps without an offset are wall-clock
//! times and are shown as-is.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::borrow::Cow;

/// Shown in place of a date or time that could not be parsed
pub const PLACEHOLDER: &str = "—";

/// Zoned forms RFC 3339 rejects: `Z` without seconds, `+0530`, `+05`, basic format
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parse an ISO-8601 timestamp into its wall-clock time
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // `2024-03-15 14:30:00` is read like `2024-03-15T14:30:00`
    let raw: Cow<str> = match raw.as_bytes().get(10) {
        Some(b' ') => Cow::Owned(format!("{}T{}", &raw[..10], raw[11..].trim_start())),
        _ => Cow::Borrowed(raw),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Some(dt.naive_local());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&raw, format) {
            return Some(dt.naive_local());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&raw, format).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `March 15, 2024`
pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format("%B %-d, %Y").to_string()
}

/// `2:30 PM`
pub fn format_time(dt: &NaiveDateTime) -> String {
    dt.format("%-I:%M %p").to_string()
}

/// Date of a raw timestamp, or the placeholder
pub fn display_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| format_date(&dt))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Time of a raw timestamp, or the placeholder
pub fn display_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| format_time(&dt))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `2:30 PM - 3:00 PM`; each side degrades to the placeholder on its own
pub fn display_time_range(start: &str, end: &str) -> String {
    format!("{} - {}", display_time(start), display_time(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_timestamp() {
        assert_eq!(display_date("2024-03-15T14:30:00Z"), "March 15, 2024");
        assert_eq!(display_time("2024-03-15T14:30:00Z"), "2:30 PM");
    }

    #[test]
    fn test_offset_is_kept() {
        // 23:15 in UTC-05:00 is already the 16th in UTC
        assert_eq!(display_date("2024-03-15T23:15:00-05:00"), "March 15, 2024");
        assert_eq!(display_time("2024-03-15T23:15:00-05:00"), "11:15 PM");

        assert_eq!(display_time("2024-03-15T14:30Z"), "2:30 PM");
        assert_eq!(display_time("2024-03-15T14:30:00.000Z"), "2:30 PM");
        assert_eq!(display_time("2024-03-15T14:30:00+0530"), "2:30 PM");
        assert_eq!(display_time("2024-03-15T14:30:00+05"), "2:30 PM");
        assert_eq!(display_time("20240315T143000Z"), "2:30 PM");
        assert_eq!(display_date("2024-03-15T23:30+0100"), "March 15, 2024");
    }

    #[test]
    fn test_naive_timestamps() {
        assert_eq!(display_time("2024-03-15T09:05:00"), "9:05 AM");
        assert_eq!(display_time("2024-03-15T09:05:00.123"), "9:05 AM");
        assert_eq!(display_time("2024-03-15T12:00"), "12:00 PM");
        assert_eq!(display_time("2024-03-15"), "12:00 AM");
        assert_eq!(display_date("2024-01-02"), "January 2, 2024");

        assert_eq!(display_time("2024-03-15 14:30:00"), "2:30 PM");
        assert_eq!(display_time("2024-03-15 14:30"), "2:30 PM");
        assert_eq!(display_time("20240315T143000"), "2:30 PM");
        assert_eq!(display_date("20240315T143000"), "March 15, 2024");
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(display_time("2024-03-15T00:00:00Z"), "12:00 AM");
        assert_eq!(display_time("2024-03-15T12:45:00Z"), "12:45 PM");
    }

    #[test]
    fn test_invalid_is_placeholder() {
        for raw in ["", "   ", "tomorrow", "2024-13-45T99:00:00Z", "15/03/2024"] {
            assert_eq!(display_date(raw), PLACEHOLDER);
            assert_eq!(display_time(raw), PLACEHOLDER);
        }
    }

    #[test]
    fn test_time_range() {
        assert_eq!(
            display_time_range("2024-03-15T14:30:00Z", "2024-03-15T15:00:00Z"),
            "2:30 PM - 3:00 PM"
        );
        assert_eq!(
            display_time_range("2024-03-15T14:30:00Z", "later"),
            format!("2:30 PM - {}", PLACEHOLDER)
        );
    }

    #[test]
    fn test_end_before_start_is_not_validated() {
        assert_eq!(
            display_time_range("2024-03-15T15:00:00Z", "2024-03-15T14:00:00Z"),
            "3:00 PM - 2:00 PM"
        );
    }
}
