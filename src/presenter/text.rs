//! Plain-text rendering of schemas and tables

use std::fmt::Write;

use tabled::builder::Builder;
use tabled::settings::object::Segment;
use tabled::settings::{Alignment, Modify, Style, Width};

use crate::schema::Schema;
use crate::table::Table;

/// Cells longer than this are cut and end in "..."
const MAX_CELL_WIDTH: usize = 20;

/// Renders a schema as an indented tree:
///
/// ```text
/// root
///  |-- id: integer (nullable = false)
/// ```
pub fn render_schema(schema: &Schema) -> String {
    let mut out = String::from("root\n");
    for field in schema.fields() {
        let _ = writeln!(
            out,
            " |-- {}: {} (nullable = false)",
            field.name,
            field.field_type.type_name()
        );
    }
    out
}

/// Renders at most `limit` rows of a table as an ASCII grid with a header.
///
/// Cells are right-aligned. When rows are cut, a trailing
/// `only showing top N rows` line says so.
pub fn render_table(table: &Table, limit: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.schema().field_names().map(String::from));
    for row in table.iter().take(limit) {
        builder.push_record(row.stringify());
    }

    let mut grid = builder.build();
    grid.with(Style::ascii())
        .with(Alignment::right())
        .with(Modify::new(Segment::all()).with(Width::truncate(MAX_CELL_WIDTH).suffix("...")));

    let mut out = grid.to_string();
    out.push('\n');

    if table.len() > limit {
        let noun = if limit == 1 { "row" } else { "rows" };
        let _ = writeln!(out, "only showing top {} {}", limit, noun);
    }

    out
}
