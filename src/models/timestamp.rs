//! ISO 8601 timestamp parsing
//!
//! The host writes RFC 3339 instants for transactions and bare dates for plan
//! `next_date` values. Everything is compared in UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a host timestamp; `None` when it is not a recognisable date.
///
/// Naive date-times and bare dates are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    parse_date(raw).map(start_of_day)
}

/// Parse a `YYYY-MM-DD` filter date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// 00:00:00.000 UTC on `date`
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// 00:00:00.000 UTC on the day after `date`; `None` past the last
/// representable date
pub fn start_of_next_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.succ_opt().map(start_of_day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339() {
        let at = parse_timestamp("2024-01-05T10:30:00.123456+00:00").unwrap();
        assert_eq!(at.to_rfc3339(), "2024-01-05T10:30:00.123456+00:00");

        let shifted = parse_timestamp("2024-01-05T08:00:00+08:00").unwrap();
        assert_eq!(shifted.hour(), 0);
    }

    #[test]
    fn test_parse_naive_and_date() {
        let naive = parse_timestamp("2024-01-05T10:30:00").unwrap();
        assert_eq!(naive.hour(), 10);

        let date = parse_timestamp("2024-01-01").unwrap();
        assert_eq!(date, start_of_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_date("2024-13-01").is_none());
    }

    #[test]
    fn test_day_bounds() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let next = start_of_next_day(day).unwrap();
        assert_eq!(next, start_of_day(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(start_of_day(day) < next);
        assert!(start_of_next_day(NaiveDate::MAX).is_none());
    }
}
