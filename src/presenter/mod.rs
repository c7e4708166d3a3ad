//! Presentation of schemas and tables
//!
//! Sits outside the pipeline: it only reads finished `Schema` and `Table`
//! values and turns them into text for humans or JSON for tools.

mod json;
mod text;

pub use json::table_to_json;
pub use text::{render_schema, render_table};
