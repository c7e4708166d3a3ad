//! Pipeline errors
//!
//! Only structural failures surface here. Rows that fail validation are
//! dropped, never reported as errors.

use thiserror::Error;

use crate::schema::SchemaError;
use crate::table::ConversionError;

/// Result type for pipeline runs
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Fatal pipeline failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The record type has no valid schema
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// A record does not fit the inferred schema
    #[error("{0}")]
    Conversion(#[from] ConversionError),
}

impl PipelineError {
    /// Returns the underlying error code string
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::Schema(e) => e.code().code(),
            PipelineError::Conversion(e) => e.code().code(),
        }
    }
}
