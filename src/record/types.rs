//! Declarative record metadata and runtime values
//!
//! A record type describes itself with an ordered list of `FieldDecl`s.
//! Schema inference reads only this metadata; conversion reads values
//! through `Record::value`.

use std::fmt;

use serde::Serialize;

use crate::schema::FieldType;

/// Primitive type tag attached to a declared field.
///
/// Only the numeric, string and boolean tags have a schema mapping.
/// `Other` carries the name of any type the schema layer cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    I32,
    I64,
    F32,
    F64,
    Str,
    Bool,
    Other(&'static str),
}

impl DeclaredType {
    /// Returns the source type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            DeclaredType::I32 => "i32",
            DeclaredType::I64 => "i64",
            DeclaredType::F32 => "f32",
            DeclaredType::F64 => "f64",
            DeclaredType::Str => "String",
            DeclaredType::Bool => "bool",
            DeclaredType::Other(name) => name,
        }
    }
}

/// One declared field of a record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDecl {
    pub name: &'static str,
    pub declared: DeclaredType,
}

impl FieldDecl {
    pub const fn new(name: &'static str, declared: DeclaredType) -> Self {
        Self { name, declared }
    }
}

/// Static description of a record type: its name and fields in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordType {
    /// Type name
    pub name: &'static str,
    /// Declared fields, in order
    pub fields: &'static [FieldDecl],
}

impl RecordType {
    pub const fn new(name: &'static str, fields: &'static [FieldDecl]) -> Self {
        Self { name, fields }
    }
}

/// A runtime cell value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    String(String),
    Double(f64),
    Boolean(bool),
}

impl Value {
    /// Returns the schema type this value belongs to
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Integer(_) => FieldType::Integer,
            Value::String(_) => FieldType::String,
            Value::Double(_) => FieldType::Double,
            Value::Boolean(_) => FieldType::Boolean,
        }
    }

    /// Returns the string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::String(s) => write!(f, "{}", s),
            // Keep a fractional part so 500.0 does not render as an integer
            Value::Double(d) if d.fract() == 0.0 && d.is_finite() => write!(f, "{:.1}", d),
            Value::Double(d) => write!(f, "{}", d),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// A typed in-memory value that can be materialized as a table row.
pub trait Record {
    /// Declared field metadata for this record type
    fn record_type() -> RecordType
    where
        Self: Sized;

    /// Reads the named field, or `None` if this record has no such field
    fn value(&self, field: &str) -> Option<Value>;
}
