//! Date-range and free-text filters shared by the record views

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::timestamp::{start_of_day, start_of_next_day};

/// Inclusive calendar-date window, compared in UTC.
///
/// The start bound begins at 00:00:00 and the end bound covers the whole
/// end date, sub-millisecond instants included. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// An unbounded range
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether a record at `at` passes the range.
    ///
    /// A record without a readable timestamp only passes an unbounded range.
    pub fn contains(&self, at: Option<DateTime<Utc>>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(at) = at else {
            return false;
        };

        if let Some(start) = self.start {
            if at < start_of_day(start) {
                return false;
            }
        }
        if let Some(end) = self.end {
            if start_of_next_day(end).is_some_and(|next| at >= next) {
                return false;
            }
        }
        true
    }
}

/// Trimmed, lowercased search text; `None` when there is nothing to match.
pub fn normalize_query(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_is_inclusive_through_last_millisecond() {
        let range = DateRange::new().until(date(2024, 1, 10));

        assert!(range.contains(parse_timestamp("2024-01-10T23:59:59.999Z")));
        assert!(!range.contains(parse_timestamp("2024-01-11T00:00:00Z")));
    }

    #[test]
    fn test_end_keeps_microsecond_timestamps() {
        let range = DateRange::new().until(date(2024, 1, 10));

        assert!(range.contains(parse_timestamp("2024-01-10T23:59:59.999500+00:00")));
        assert!(range.contains(parse_timestamp("2024-01-10T23:59:59.999999Z")));
        assert!(!range.contains(parse_timestamp("2024-01-11T00:00:00.000001Z")));
    }

    #[test]
    fn test_start_is_inclusive_from_midnight() {
        let range = DateRange::new().from(date(2024, 1, 5));

        assert!(range.contains(parse_timestamp("2024-01-05")));
        assert!(!range.contains(parse_timestamp("2024-01-04T23:59:59Z")));
    }

    #[test]
    fn test_unreadable_timestamps() {
        assert!(DateRange::new().contains(None));
        assert!(!DateRange::new().from(date(2024, 1, 1)).contains(None));
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Coffee "), Some("coffee".to_string()));
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(""), None);
    }
}
