//! recordframe - typed records to schema-bound tables
//!
//! Converts strongly-typed records into a table with an inferred schema,
//! then keeps only the rows whose chosen field passes a validation rule.
//!
//! ```
//! use recordframe::pipeline::Pipeline;
//! use recordframe::record::sample_records;
//! use recordframe::validation::ValidationRule;
//!
//! let filtered = Pipeline::new()
//!     .run(&sample_records(), "date", &ValidationRule::DateTime)
//!     .unwrap();
//!
//! assert_eq!(filtered.len(), 4);
//! ```

pub mod cli;
pub mod observability;
pub mod pipeline;
pub mod presenter;
pub mod record;
pub mod schema;
pub mod table;
pub mod validation;
