//! Predicates and parsers for raw input lines.
//!
//! Everything here is pure: a string goes in, a verdict or a typed value comes out.
//! Callers are expected to trim the line first.

use crate::error::{ArticleError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

// ASCII digits only.
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// Signed integer or decimal. No exponent, no leading `+`, no separators.
pub fn is_numeric(s: &str) -> bool {
    NUMERIC.is_match(s)
}

/// Signed integer without a decimal point.
pub fn is_integer(s: &str) -> bool {
    INTEGER.is_match(s)
}

pub fn is_in_range(value: i64, range: &RangeInclusive<i64>) -> bool {
    range.contains(&value)
}

pub fn parse_price(s: &str) -> Result<f64> {
    if !is_numeric(s) {
        return Err(ArticleError::InvalidInput(format!("'{}' is not a number", s)));
    }
    s.parse::<f64>()
        .map_err(|e| ArticleError::InvalidInput(format!("'{}': {}", s, e)))
}

/// Splits a codes line on commas. Codes are kept verbatim, empty ones included.
pub fn parse_codes(s: &str) -> Vec<String> {
    s.split(',').map(str::to_string).collect()
}

/// Why a menu selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    NotAnInteger,
    OutOfRange,
}

pub fn parse_selection(
    s: &str,
    range: &RangeInclusive<i64>,
) -> std::result::Result<i64, SelectionError> {
    if !is_integer(s) {
        return Err(SelectionError::NotAnInteger);
    }
    // Digits that overflow i64 cannot be in any menu range.
    match s.parse::<i64>() {
        Ok(value) if is_in_range(value, range) => Ok(value),
        _ => Err(SelectionError::OutOfRange),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_accepts_signed_decimals() {
        assert!(is_numeric("3.14"));
        assert!(is_numeric("-5"));
        assert!(is_numeric("0"));
        assert!(is_numeric("-0.50"));
    }

    #[test]
    fn numeric_rejects_everything_else() {
        for s in ["abc", "1.2.3", "", "+1", "1e5", "1,000", ".5", "5.", " 5", "-"] {
            assert!(!is_numeric(s), "{:?} should not be numeric", s);
        }
    }

    #[test]
    fn integer_rules() {
        assert!(is_integer("42"));
        assert!(is_integer("-7"));
        assert!(!is_integer("4.2"));
        assert!(!is_integer(""));
        assert!(!is_integer("x"));
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        assert!(!is_numeric("١٢"));
        assert!(!is_numeric("1.٥"));
        assert!(!is_integer("٣"));
        assert!(!is_integer("１"));
        assert!(parse_price("١٢").is_err());
        assert_eq!(
            parse_selection("٣", &(0..=5)),
            Err(SelectionError::NotAnInteger)
        );
    }

    #[test]
    fn parse_price_values() {
        assert_eq!(parse_price("2.99").unwrap(), 2.99);
        assert_eq!(parse_price("-1").unwrap(), -1.0);
        assert!(matches!(
            parse_price("1.2.3"),
            Err(ArticleError::InvalidInput(_))
        ));
    }

    #[test]
    fn parse_codes_keeps_raw_parts() {
        assert_eq!(parse_codes("a,b"), vec!["a", "b"]);
        assert_eq!(parse_codes(""), vec![""]);
        assert_eq!(parse_codes("a, b,"), vec!["a", " b", ""]);
    }

    #[test]
    fn selection_checks_type_then_range() {
        let range = 0..=5;
        assert_eq!(parse_selection("0", &range), Ok(0));
        assert_eq!(parse_selection("5", &range), Ok(5));
        assert_eq!(
            parse_selection("6", &range),
            Err(SelectionError::OutOfRange)
        );
        assert_eq!(
            parse_selection("-1", &range),
            Err(SelectionError::OutOfRange)
        );
        assert_eq!(
            parse_selection("99999999999999999999", &range),
            Err(SelectionError::OutOfRange)
        );
        assert_eq!(
            parse_selection("1.0", &range),
            Err(SelectionError::NotAnInteger)
        );
    }
}
