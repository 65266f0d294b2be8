//! Date format and range rules
//!
//! Pure date predicates. Each rule has a `*_from` variant taking an explicit
//! reference date so behavior is testable without clock control; the plain
//! variants use today's UTC date.

use chrono::{Duration, NaiveDate, Utc};

/// Display date format used across form journeys
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` display date
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_DATE_FORMAT).ok()
}

/// True when `a` is the same day as or earlier than `b`
pub fn validate_date_is_same_or_before(a: NaiveDate, b: NaiveDate) -> bool {
    a <= b
}

/// True when the date is at most one day in the future
pub fn validate_maximum_future_date(date: NaiveDate) -> bool {
    validate_maximum_future_date_from(date, today())
}

/// [`validate_maximum_future_date`] against an explicit reference date
pub fn validate_maximum_future_date_from(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today + Duration::days(1)
}

/// True when the date is today or in the past
pub fn validate_today_or_in_the_past(date: NaiveDate) -> bool {
    validate_today_or_in_the_past_from(date, today())
}

/// [`validate_today_or_in_the_past`] against an explicit reference date
pub fn validate_today_or_in_the_past_from(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_display_date() {
        assert_eq!(parse_display_date("2024-03-01"), Some(date(2024, 3, 1)));
        assert_eq!(parse_display_date(" 2024-03-01 "), Some(date(2024, 3, 1)));
        assert_eq!(parse_display_date("01/03/2024"), None);
        assert_eq!(parse_display_date("2024-13-01"), None);
        assert_eq!(parse_display_date(""), None);
    }

    #[test]
    fn test_same_or_before() {
        assert!(validate_date_is_same_or_before(
            date(2024, 3, 1),
            date(2024, 3, 1)
        ));
        assert!(validate_date_is_same_or_before(
            date(2024, 2, 29),
            date(2024, 3, 1)
        ));
        assert!(!validate_date_is_same_or_before(
            date(2024, 3, 2),
            date(2024, 3, 1)
        ));
    }

    #[test]
    fn test_maximum_future_date() {
        let today = date(2024, 3, 1);
        assert!(validate_maximum_future_date_from(date(2024, 3, 1), today));
        assert!(validate_maximum_future_date_from(date(2024, 3, 2), today));
        assert!(!validate_maximum_future_date_from(date(2024, 3, 3), today));
        assert!(validate_maximum_future_date_from(date(2020, 1, 1), today));
    }

    #[test]
    fn test_today_or_in_the_past() {
        let today = date(2024, 3, 1);
        assert!(validate_today_or_in_the_past_from(date(2024, 3, 1), today));
        assert!(validate_today_or_in_the_past_from(date(2023, 12, 31), today));
        assert!(!validate_today_or_in_the_past_from(date(2024, 3, 2), today));
    }
}
