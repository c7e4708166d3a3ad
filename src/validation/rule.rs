//! Validation rules and the strict date-time parser they rely on

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;
use thiserror::Error;

/// The only accepted date-time layout: 24-hour clock, zero-padded, 19 characters.
pub const DATE_TIME_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

/// `DATE_TIME_FORMAT` in chrono's strftime syntax
const CHRONO_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Exact shape check. chrono alone accepts unpadded and signed numbers.
static SHAPE: OnceLock<Regex> = OnceLock::new();

fn shape() -> &'static Regex {
    SHAPE.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$")
            .expect("date-time shape pattern is valid")
    })
}

/// Why a string is not a valid `DATE_TIME_FORMAT` timestamp
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeParseError {
    /// Wrong length, separators, or non-digit components
    #[error("'{0}' does not match pattern {}", DATE_TIME_FORMAT)]
    PatternMismatch(String),

    /// Right shape, but not a real calendar date and time
    #[error("'{value}' is not a valid date-time: {reason}")]
    OutOfRange { value: String, reason: String },
}

/// Parses `value` strictly against `DATE_TIME_FORMAT`.
///
/// Rejects month 13, February 30, hour 24, minute 61, leap second 60 and
/// year 0000 alike.
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    if !shape().is_match(value) {
        return Err(DateTimeParseError::PatternMismatch(value.to_string()));
    }

    let out_of_range = |reason: String| DateTimeParseError::OutOfRange {
        value: value.to_string(),
        reason,
    };

    let parsed = NaiveDateTime::parse_from_str(value, CHRONO_FORMAT)
        .map_err(|e| out_of_range(e.to_string()))?;

    // chrono represents second 60 as a leap second
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(out_of_range("second must be in 0..=59".to_string()));
    }
    if parsed.year() < 1 {
        return Err(out_of_range("year must be at least 0001".to_string()));
    }

    Ok(parsed)
}

/// Criterion applied to one field of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationRule {
    /// The field is a string that parses as `DATE_TIME_FORMAT`
    #[default]
    DateTime,
}

impl ValidationRule {
    /// Returns the rule name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ValidationRule::DateTime => "date_time",
        }
    }

    /// Returns the pattern the rule enforces
    pub fn pattern(&self) -> &'static str {
        match self {
            ValidationRule::DateTime => DATE_TIME_FORMAT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parses_well_formed_value() {
        let parsed = parse_date_time("2018-07-07 12:12:12").unwrap();
        let expected = NaiveDate::from_ymd_opt(2018, 7, 7)
            .unwrap()
            .and_hms_opt(12, 12, 12)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_rejects_unpadded_components() {
        assert!(matches!(
            parse_date_time("2018-7-7 12:12:12"),
            Err(DateTimeParseError::PatternMismatch(_))
        ));
        assert!(parse_date_time("2018-07-07 9:12:12").is_err());
    }

    #[test]
    fn test_rejects_wrong_separators_and_padding() {
        assert!(parse_date_time("2018/07/07 12:12:12").is_err());
        assert!(parse_date_time("2018-07-07T12:12:12").is_err());
        assert!(parse_date_time(" 2018-07-07 12:12:12").is_err());
        assert!(parse_date_time("2018-07-07 12:12:12 ").is_err());
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not part of the pattern
        assert!(parse_date_time("٢٠١٨-07-07 12:12:12").is_err());
    }

    #[test]
    fn test_rejects_impossible_calendar_values() {
        for value in [
            "2018-13-07 12:12:12",
            "2018-00-07 12:12:12",
            "2018-02-30 12:12:12",
            "2019-02-29 12:12:12",
            "2018-07-32 12:12:12",
            "2018-07-07 24:00:00",
            "2018-07-07 12:61:12",
            "2018-07-07 12:12:60",
            "0000-01-01 00:00:00",
        ] {
            assert!(
                matches!(
                    parse_date_time(value),
                    Err(DateTimeParseError::OutOfRange { .. })
                ),
                "{} should be out of range",
                value
            );
        }
    }

    #[test]
    fn test_accepts_leap_day() {
        assert!(parse_date_time("2020-02-29 23:59:59").is_ok());
    }

    #[test]
    fn test_rule_pattern() {
        assert_eq!(ValidationRule::default(), ValidationRule::DateTime);
        assert_eq!(ValidationRule::DateTime.pattern(), "yyyy-MM-dd HH:mm:ss");
    }

    #[test]
    fn test_error_display_names_pattern() {
        let err = parse_date_time("garbage").unwrap_err();
        assert!(err.to_string().contains(DATE_TIME_FORMAT));
    }
}
