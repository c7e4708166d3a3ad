//! Schema type definitions
//!
//! Supported types:
//! - integer: 64-bit signed integer
//! - string: UTF-8 string
//! - double: 64-bit floating point
//! - boolean: Boolean

use std::sync::Arc;

use serde::Serialize;

/// Shared, immutable schema handle held by a table and each of its rows
pub type SchemaRef = Arc<Schema>;

/// Column types a schema can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    String,
    Double,
    Boolean,
}

impl FieldType {
    /// Returns the type name used in schema listings and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::String => "string",
            FieldType::Double => "double",
            FieldType::Boolean => "boolean",
        }
    }
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Ordered field list describing a tabular shape.
///
/// Field order is column order. Names are unique; the inferencer is the only
/// place that builds a schema from record metadata and it rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Record type this schema was inferred from
    record_type: String,
    fields: Vec<Field>,
}

impl Schema {
    pub(crate) fn new(record_type: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            record_type: record_type.into(),
            fields,
        }
    }

    /// Returns the source record type name
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    /// Returns the fields in column order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks a field up by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the column index of the named field
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Returns the field names in column order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
