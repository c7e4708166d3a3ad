//! Schema inference subsystem
//!
//! A schema is derived once per record type from its declared field
//! metadata and is read-only afterwards.
//!
//! # Design Principles
//!
//! - Declaration order is column order
//! - Only integer, double, string and boolean columns
//! - No guessing: unmapped types and duplicate names fail inference
//! - Deterministic, side-effect free inference

mod errors;
mod inferencer;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity};
pub use inferencer::{infer, infer_for, SchemaInferencer};
pub use types::{Field, FieldType, Schema, SchemaRef};
