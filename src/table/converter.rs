//! Record-to-table conversion
//!
//! Each schema field is read from each record in schema order. A record that
//! lacks a field, or whose value has a different type than the schema
//! declares, fails the whole conversion.

use std::sync::Arc;

use crate::record::Record;
use crate::schema::SchemaRef;

use super::errors::{ConversionError, ConversionResult};
use super::row::Row;
use super::table::Table;

/// Materializes `records` into a table conforming to `schema`.
///
/// Row `i` of the result is built from `records[i]`. An empty slice yields a
/// zero-row table that keeps the schema.
///
/// # Errors
///
/// - RF_CONVERSION_MISSING_FIELD if a record has no value for a schema field
/// - RF_CONVERSION_TYPE_MISMATCH if a value's type differs from the schema type
pub fn convert<R: Record>(records: &[R], schema: SchemaRef) -> ConversionResult<Table> {
    let mut rows = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let mut values = Vec::with_capacity(schema.len());

        for field in schema.fields() {
            let value = record
                .value(&field.name)
                .ok_or_else(|| ConversionError::missing_field(index, &field.name))?;

            let actual = value.field_type();
            if actual != field.field_type {
                return Err(ConversionError::type_mismatch(
                    index,
                    &field.name,
                    field.field_type,
                    actual,
                ));
            }

            values.push(value);
        }

        rows.push(Row::new(Arc::clone(&schema), values));
    }

    Ok(Table::new(schema, rows))
}
