//! Record model
//!
//! Plain typed records with explicit field metadata. A record type lists
//! its fields as `(name, DeclaredType)` pairs; nothing is discovered from
//! accessor names.

mod records;
mod types;

pub use records::{sample_records, FullRecord, ProjectedRecord};
pub use types::{DeclaredType, FieldDecl, Record, RecordType, Value};
