//! Time utilities
//!
//! All date bucketing in the engine uses the UTC calendar day. Bucketing by
//! server-local time would make streaks depend on where the server runs.

use chrono::{DateTime, NaiveDate, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Get the current UTC calendar date
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Map an instant to its UTC calendar date
pub fn utc_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Parse a datetime string in ISO 8601 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_day() {
        let dt = parse_datetime("2024-01-15T23:59:59Z").unwrap();
        assert_eq!(utc_day(dt), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        // An instant that is already the next day in UTC stays on the UTC day
        let dt = parse_datetime("2024-01-15T22:00:00-05:00").unwrap();
        assert_eq!(utc_day(dt), NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
    }

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2024-01-15T12:00:00Z");
        assert!(dt.is_some());

        let invalid = parse_datetime("not a date");
        assert!(invalid.is_none());
    }
}
