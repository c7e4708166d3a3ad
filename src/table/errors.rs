//! Conversion error types
//!
//! Error codes:
//! - RF_CONVERSION_MISSING_FIELD (ERROR)
//! - RF_CONVERSION_TYPE_MISMATCH (ERROR)
//!
//! A conversion error fails the whole call. No partial table is produced
//! and no value is coerced to fit the schema.

use std::fmt;

use crate::schema::{FieldType, Severity};

/// Conversion-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorCode {
    /// Record has no value for a schema field
    RfConversionMissingField,
    /// Record value type differs from the schema type
    RfConversionTypeMismatch,
}

impl ConversionErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ConversionErrorCode::RfConversionMissingField => "RF_CONVERSION_MISSING_FIELD",
            ConversionErrorCode::RfConversionTypeMismatch => "RF_CONVERSION_TYPE_MISMATCH",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Error
    }
}

impl fmt::Display for ConversionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Conversion error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    code: ConversionErrorCode,
    message: String,
    /// Zero-based position of the offending record in the input
    record_index: usize,
    field: String,
}

impl ConversionError {
    /// Create a missing field error
    pub fn missing_field(record_index: usize, field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            code: ConversionErrorCode::RfConversionMissingField,
            message: format!("Record {} has no value for field '{}'", record_index, field),
            record_index,
            field,
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        record_index: usize,
        field: impl Into<String>,
        expected: FieldType,
        actual: FieldType,
    ) -> Self {
        let field = field.into();
        Self {
            code: ConversionErrorCode::RfConversionTypeMismatch,
            message: format!(
                "Record {} field '{}': expected {}, got {}",
                record_index,
                field,
                expected.type_name(),
                actual.type_name()
            ),
            record_index,
            field,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ConversionErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the index of the record that failed
    pub fn record_index(&self) -> usize {
        self.record_index
    }

    /// Returns the offending field name
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for ConversionError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
