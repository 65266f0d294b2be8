//! Numeric format rules
//!
//! Pure, stateless predicates over user-entered numeric strings. Patterns
//! are deliberately strict: signs are rejected everywhere, and decimal
//! precision is capped at two digits.

use regex::Regex;
use std::sync::OnceLock;

fn two_decimals_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+|\d+\.\d{1,2}|\.\d{1,2})$").unwrap())
}

fn digits_only_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").unwrap())
}

/// True for an unsigned number with at most two decimal digits
///
/// Accepts `\d+`, `\d+.\d{1,2}` and `.\d{1,2}`; rejects signs, trailing
/// dots and more than two decimal digits.
pub fn is_positive_number_with_two_decimals(value: &str) -> bool {
    two_decimals_re().is_match(value)
}

/// True only for unsigned digit strings
///
/// Rejects a leading `+` and any decimal point.
pub fn is_numbers_only(value: &str) -> bool {
    digits_only_re().is_match(value)
}

/// True when the code's length falls outside `[min, max]` inclusive
pub fn is_invalid_length(code: &str, min: usize, max: usize) -> bool {
    let length = code.chars().count();
    length < min || length > max
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1.11", true; "two decimals")]
    #[test_case("10", true; "integer")]
    #[test_case(".10", true; "bare fraction")]
    #[test_case("0.3", true; "one decimal")]
    #[test_case("1.13434", false; "too many decimals")]
    #[test_case("1.", false; "trailing dot")]
    #[test_case("-1.11", false; "negative")]
    #[test_case("+10", false; "explicit plus")]
    #[test_case("", false; "empty")]
    #[test_case("abc", false; "non numeric")]
    fn test_is_positive_number_with_two_decimals(value: &str, expected: bool) {
        assert_eq!(is_positive_number_with_two_decimals(value), expected);
    }

    #[test_case("12345", true; "digits")]
    #[test_case("0", true; "zero")]
    #[test_case("+123", false; "plus sign")]
    #[test_case("1.5", false; "decimal")]
    #[test_case("", false; "empty")]
    fn test_is_numbers_only(value: &str, expected: bool) {
        assert_eq!(is_numbers_only(value), expected);
    }

    #[test_case("12345", 6, 12, true; "too short")]
    #[test_case("123456789012", 6, 12, false; "max length ok")]
    #[test_case("123456", 6, 12, false; "min length ok")]
    #[test_case("1234567890123", 6, 12, true; "too long")]
    fn test_is_invalid_length(code: &str, min: usize, max: usize, expected: bool) {
        assert_eq!(is_invalid_length(code, min, max), expected);
    }
}
