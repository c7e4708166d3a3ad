//! Schema inference from declared record metadata
//!
//! - Field order follows declaration order
//! - Integer and floating-point tags widen to `integer` / `double`
//! - Any other tag is rejected, never guessed
//! - Duplicate names are rejected

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::record::{DeclaredType, Record, RecordType};

use super::errors::{SchemaError, SchemaResult};
use super::types::{Field, FieldType, Schema, SchemaRef};

/// Maps a declared type tag to its schema column type
fn map_declared(declared: DeclaredType) -> Option<FieldType> {
    match declared {
        DeclaredType::I32 | DeclaredType::I64 => Some(FieldType::Integer),
        DeclaredType::F32 | DeclaredType::F64 => Some(FieldType::Double),
        DeclaredType::Str => Some(FieldType::String),
        DeclaredType::Bool => Some(FieldType::Boolean),
        DeclaredType::Other(_) => None,
    }
}

/// Derives a schema from a record type description.
///
/// Pure: the same description always yields a structurally equal schema.
///
/// # Errors
///
/// - RF_SCHEMA_UNSUPPORTED_TYPE if a field's declared type has no mapping
/// - RF_SCHEMA_DUPLICATE_FIELD if two fields share a name
pub fn infer(record_type: &RecordType) -> SchemaResult<Schema> {
    let mut seen = HashSet::with_capacity(record_type.fields.len());
    let mut fields = Vec::with_capacity(record_type.fields.len());

    for decl in record_type.fields {
        if !seen.insert(decl.name) {
            return Err(SchemaError::duplicate_field(record_type.name, decl.name));
        }

        let field_type = map_declared(decl.declared).ok_or_else(|| {
            SchemaError::unsupported_type(record_type.name, decl.name, decl.declared.type_name())
        })?;

        fields.push(Field::new(decl.name, field_type));
    }

    Ok(Schema::new(record_type.name, fields))
}

/// Infers the schema of a `Record` implementation
pub fn infer_for<R: Record>() -> SchemaResult<Schema> {
    infer(&R::record_type())
}

/// Schema inferencer that caches one schema per record type description.
///
/// The key is the whole `RecordType`, name and fields, so two types that
/// share a name never share a schema.
#[derive(Debug, Default)]
pub struct SchemaInferencer {
    schemas: HashMap<RecordType, SchemaRef>,
}

impl SchemaInferencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached schema for this record type, inferring it on first use.
    ///
    /// Failed inference is not cached.
    pub fn infer_cached(&mut self, record_type: &RecordType) -> SchemaResult<SchemaRef> {
        if let Some(schema) = self.schemas.get(record_type) {
            return Ok(Arc::clone(schema));
        }

        let schema = Arc::new(infer(record_type)?);
        self.schemas.insert(*record_type, Arc::clone(&schema));
        Ok(schema)
    }

    /// Cached inference for a `Record` implementation
    pub fn infer_for<R: Record>(&mut self) -> SchemaResult<SchemaRef> {
        self.infer_cached(&R::record_type())
    }

    /// Returns true if a schema for this exact record type is cached
    pub fn is_cached(&self, record_type: &RecordType) -> bool {
        self.schemas.contains_key(record_type)
    }

    /// Returns the number of cached schemas
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldDecl, FullRecord, ProjectedRecord};
    use crate::schema::SchemaErrorCode;

    const WIDE: &[FieldDecl] = &[
        FieldDecl::new("small", DeclaredType::I32),
        FieldDecl::new("big", DeclaredType::I64),
        FieldDecl::new("ratio", DeclaredType::F32),
        FieldDecl::new("flag", DeclaredType::Bool),
    ];

    const WITH_BLOB: &[FieldDecl] = &[
        FieldDecl::new("id", DeclaredType::I32),
        FieldDecl::new("payload", DeclaredType::Other("Vec<u8>")),
    ];

    const WITH_DUPLICATE: &[FieldDecl] = &[
        FieldDecl::new("id", DeclaredType::I32),
        FieldDecl::new("name", DeclaredType::Str),
        FieldDecl::new("id", DeclaredType::I64),
    ];

    #[test]
    fn test_full_record_schema() {
        let schema = infer_for::<FullRecord>().unwrap();
        let fields: Vec<_> = schema
            .fields()
            .iter()
            .map(|f| (f.name.as_str(), f.field_type))
            .collect();
        assert_eq!(
            fields,
            [
                ("id", FieldType::Integer),
                ("name", FieldType::String),
                ("sales", FieldType::Double),
                ("discount", FieldType::Double),
                ("state", FieldType::String),
                ("date", FieldType::String),
            ]
        );
        assert_eq!(schema.record_type(), "FullRecord");
    }

    #[test]
    fn test_projected_record_schema() {
        let schema = infer_for::<ProjectedRecord>().unwrap();
        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, ["sales", "state"]);
    }

    #[test]
    fn test_numeric_tags_widen() {
        let schema = infer(&RecordType::new("Wide", WIDE)).unwrap();
        let types: Vec<_> = schema.fields().iter().map(|f| f.field_type).collect();
        assert_eq!(
            types,
            [
                FieldType::Integer,
                FieldType::Integer,
                FieldType::Double,
                FieldType::Boolean
            ]
        );
    }

    #[test]
    fn test_unsupported_type_rejected() {
        let err = infer(&RecordType::new("Blob", WITH_BLOB)).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::RfSchemaUnsupportedType);
        assert_eq!(err.field(), "payload");
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = infer(&RecordType::new("Dup", WITH_DUPLICATE)).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::RfSchemaDuplicateField);
        assert_eq!(err.field(), "id");
    }

    #[test]
    fn test_infer_is_idempotent() {
        let a = infer_for::<FullRecord>().unwrap();
        let b = infer_for::<FullRecord>().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cache_returns_same_schema() {
        let mut inferencer = SchemaInferencer::new();
        let a = inferencer.infer_for::<FullRecord>().unwrap();
        let b = inferencer.infer_for::<FullRecord>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(inferencer.is_cached(&FullRecord::record_type()));
        assert_eq!(inferencer.len(), 1);

        inferencer.infer_for::<ProjectedRecord>().unwrap();
        assert_eq!(inferencer.len(), 2);
    }

    #[test]
    fn test_failed_inference_not_cached() {
        let mut inferencer = SchemaInferencer::new();
        assert!(inferencer
            .infer_cached(&RecordType::new("Blob", WITH_BLOB))
            .is_err());
        assert!(!inferencer.is_cached(&RecordType::new("Blob", WITH_BLOB)));
        assert!(inferencer.is_empty());
    }

    #[test]
    fn test_same_name_different_fields_cached_apart() {
        const ID_ONLY: &[FieldDecl] = &[FieldDecl::new("id", DeclaredType::I32)];
        const ID_AND_DATE: &[FieldDecl] = &[
            FieldDecl::new("id", DeclaredType::I32),
            FieldDecl::new("date", DeclaredType::Str),
        ];
        let narrow = RecordType::new("Event", ID_ONLY);
        let wide = RecordType::new("Event", ID_AND_DATE);

        let mut inferencer = SchemaInferencer::new();
        let first = inferencer.infer_cached(&narrow).unwrap();
        let second = inferencer.infer_cached(&wide).unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_eq!(*second, infer(&wide).unwrap());
        assert!(inferencer.is_cached(&narrow));
        assert!(inferencer.is_cached(&wide));
        assert_eq!(inferencer.len(), 2);
    }
}
