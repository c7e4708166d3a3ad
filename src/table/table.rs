//! Schema-bound, ordered collection of rows

use std::sync::Arc;

use super::row::Row;
use crate::schema::{Schema, SchemaRef};

/// An immutable table.
///
/// Row order is input order. Filtering never mutates a table; it returns a
/// new one that shares the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: SchemaRef,
    rows: Vec<Row>,
}

impl Table {
    pub(crate) fn new(schema: SchemaRef, rows: Vec<Row>) -> Self {
        Self { schema, rows }
    }

    /// Creates a table with no rows
    pub fn empty(schema: SchemaRef) -> Self {
        Self::new(schema, Vec::new())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Returns a new table holding the rows that satisfy `predicate`, in order
    pub fn filter<F>(&self, mut predicate: F) -> Table
    where
        F: FnMut(&Row) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(*row))
            .cloned()
            .collect();
        Table::new(Arc::clone(&self.schema), rows)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
