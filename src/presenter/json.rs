//! JSON rendering of tables

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::schema::Field;
use crate::table::Table;

#[derive(Serialize)]
struct TableDocument<'a> {
    schema: &'a [Field],
    rows: Vec<Map<String, JsonValue>>,
}

/// Converts a table to `{"schema": [{"name", "type"}...], "rows": [{...}...]}`
pub fn table_to_json(table: &Table) -> serde_json::Result<JsonValue> {
    let mut rows = Vec::with_capacity(table.len());
    for row in table {
        let mut object = Map::new();
        for (field, value) in table.schema().fields().iter().zip(row.values()) {
            object.insert(field.name.clone(), serde_json::to_value(value)?);
        }
        rows.push(object);
    }

    serde_json::to_value(TableDocument {
        schema: table.schema().fields(),
        rows,
    })
}
