//! Schema error types
//!
//! Error codes:
//! - RF_SCHEMA_UNSUPPORTED_TYPE (FATAL)
//! - RF_SCHEMA_DUPLICATE_FIELD (FATAL)
//!
//! A schema error stops the pipeline: nothing can be converted without a schema.

use std::fmt;

/// Severity levels shared by pipeline errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The current call failed; the caller may retry with different input
    Error,
    /// The pipeline cannot proceed
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Declared field type has no schema mapping
    RfSchemaUnsupportedType,
    /// Two declared fields share a name
    RfSchemaDuplicateField,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::RfSchemaUnsupportedType => "RF_SCHEMA_UNSUPPORTED_TYPE",
            SchemaErrorCode::RfSchemaDuplicateField => "RF_SCHEMA_DUPLICATE_FIELD",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    /// Record type being inferred
    record_type: String,
    /// Offending field
    field: String,
}

impl SchemaError {
    /// Create an unsupported type error
    pub fn unsupported_type(
        record_type: impl Into<String>,
        field: impl Into<String>,
        declared: &str,
    ) -> Self {
        let record_type = record_type.into();
        let field = field.into();
        Self {
            code: SchemaErrorCode::RfSchemaUnsupportedType,
            message: format!(
                "Field '{}' of '{}' has type '{}' with no schema mapping",
                field, record_type, declared
            ),
            record_type,
            field,
        }
    }

    /// Create a duplicate field error
    pub fn duplicate_field(record_type: impl Into<String>, field: impl Into<String>) -> Self {
        let record_type = record_type.into();
        let field = field.into();
        Self {
            code: SchemaErrorCode::RfSchemaDuplicateField,
            message: format!("Field '{}' is declared more than once in '{}'", field, record_type),
            record_type,
            field,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
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

    /// Returns the record type name
    pub fn record_type(&self) -> &str {
        &self.record_type
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

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
