//! Row validation subsystem
//!
//! Decides per row whether a field satisfies a fixed rule. The only rule is
//! strict parsing against `DATE_TIME_FORMAT`.
//!
//! Validation never raises: malformed values, missing fields and
//! impossible calendar values all come back as a negative outcome.

mod rule;
mod validator;

pub use rule::{parse_date_time, DateTimeParseError, ValidationRule, DATE_TIME_FORMAT};
pub use validator::{InvalidReason, RowValidator, ValidationOutcome};
