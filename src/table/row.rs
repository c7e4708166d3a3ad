//! Rows: one materialized record bound to its table's schema

use std::sync::Arc;

use crate::record::Value;
use crate::schema::{Schema, SchemaRef};

/// One record's data, shaped to conform to a schema.
///
/// Holds exactly one value per schema field, in schema order. Rows are only
/// built by the converter, which guarantees that shape.
#[derive(Debug, Clone)]
pub struct Row {
    schema: SchemaRef,
    values: Vec<Value>,
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.schema, &other.schema) || self.schema == other.schema)
            && self.values == other.values
    }
}

impl Row {
    pub(crate) fn new(schema: SchemaRef, values: Vec<Value>) -> Self {
        debug_assert_eq!(schema.len(), values.len());
        Self { schema, values }
    }

    /// Returns the value at a zero-based column index
    pub fn get_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the value of the named column
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema.index_of(name).and_then(|idx| self.values.get(idx))
    }

    /// Returns the named column as a string, if it is a string column
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Returns the values in column order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the display form of every value, in column order
    pub fn stringify(&self) -> Vec<String> {
        self.values.iter().map(|v| v.to_string()).collect()
    }
}
