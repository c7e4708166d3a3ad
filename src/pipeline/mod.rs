//! Pipeline driver subsystem
//!
//! records -> schema -> table -> filtered table, in one linear pass.
//!
//! Schema and conversion errors surface immediately; validation failures
//! are absorbed per row and only visible through the log channel and the
//! returned report.

mod driver;
mod errors;

pub use driver::{filter_table, run, Pipeline, PipelineReport, RowOutcome};
pub use errors::{PipelineError, PipelineResult};
