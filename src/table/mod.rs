//! Tabular conversion subsystem
//!
//! Turns a finite slice of records into an immutable `Table` whose rows
//! follow input order.
//!
//! # Invariants
//!
//! - Every row holds one value per schema field, in schema order
//! - Row order equals record order
//! - No coercion: a value must already have the schema's type
//! - Tables are never mutated; filtering returns a new table

mod converter;
mod errors;
mod row;
mod table;

pub use converter::convert;
pub use errors::{ConversionError, ConversionErrorCode, ConversionResult};
pub use row::Row;
pub use table::Table;
