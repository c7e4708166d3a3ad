//! Row validation
//!
//! A validation decides whether one row is kept. A failed check is a normal
//! negative outcome, never an error.

use std::fmt;

use chrono::NaiveDateTime;

use crate::schema::FieldType;
use crate::table::Row;

use super::rule::{parse_date_time, DateTimeParseError, ValidationRule};

/// Why a row failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The row has no column with this name
    FieldMissing(String),
    /// The column exists but does not hold text
    NotAString { field: String, actual: FieldType },
    /// The text does not satisfy the rule
    Unparseable(DateTimeParseError),
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::FieldMissing(field) => write!(f, "no field named '{}'", field),
            InvalidReason::NotAString { field, actual } => {
                write!(f, "field '{}' is {}, not string", field, actual.type_name())
            }
            InvalidReason::Unparseable(err) => write!(f, "{}", err),
        }
    }
}

/// Detailed result of validating one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(NaiveDateTime),
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    /// Returns the parsed timestamp of a valid outcome
    pub fn parsed(&self) -> Option<NaiveDateTime> {
        match self {
            ValidationOutcome::Valid(dt) => Some(*dt),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    /// Returns the failure reason of an invalid outcome
    pub fn reason(&self) -> Option<&InvalidReason> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(reason) => Some(reason),
        }
    }
}

/// Applies a validation rule to a single field of a single row.
///
/// Stateless: the result depends only on the row's own value, so rows can be
/// validated in any order.
pub struct RowValidator;

impl RowValidator {
    /// Returns true if the named field of `row` satisfies `rule`
    pub fn validate(row: &Row, field_name: &str, rule: &ValidationRule) -> bool {
        Self::check(row, field_name, rule).is_valid()
    }

    /// Same decision as `validate`, with the parsed value or failure reason
    pub fn check(row: &Row, field_name: &str, rule: &ValidationRule) -> ValidationOutcome {
        let value = match row.get(field_name) {
            Some(v) => v,
            None => {
                return ValidationOutcome::Invalid(InvalidReason::FieldMissing(
                    field_name.to_string(),
                ))
            }
        };

        let text = match value.as_str() {
            Some(s) => s,
            None => {
                return ValidationOutcome::Invalid(InvalidReason::NotAString {
                    field: field_name.to_string(),
                    actual: value.field_type(),
                })
            }
        };

        match rule {
            ValidationRule::DateTime => match parse_date_time(text) {
                Ok(dt) => ValidationOutcome::Valid(dt),
                Err(e) => ValidationOutcome::Invalid(InvalidReason::Unparseable(e)),
            },
        }
    }
}
