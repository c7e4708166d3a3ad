//! Concrete record shapes: the full customer record and the sales/state projection

use serde::{Deserialize, Serialize};

use super::types::{DeclaredType, FieldDecl, Record, RecordType, Value};

const FULL_RECORD_FIELDS: &[FieldDecl] = &[
    FieldDecl::new("id", DeclaredType::I32),
    FieldDecl::new("name", DeclaredType::Str),
    FieldDecl::new("sales", DeclaredType::F64),
    FieldDecl::new("discount", DeclaredType::F64),
    FieldDecl::new("state", DeclaredType::Str),
    FieldDecl::new("date", DeclaredType::Str),
];

const PROJECTED_RECORD_FIELDS: &[FieldDecl] = &[
    FieldDecl::new("sales", DeclaredType::F64),
    FieldDecl::new("state", DeclaredType::Str),
];

/// A customer record with all six fields.
///
/// `date` is kept as raw text; whether it is a well-formed timestamp is
/// decided later by row validation, not at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullRecord {
    pub id: i32,
    pub name: String,
    pub sales: f64,
    pub discount: f64,
    pub state: String,
    pub date: String,
}

impl FullRecord {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        sales: f64,
        discount: f64,
        state: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sales,
            discount,
            state: state.into(),
            date: date.into(),
        }
    }
}

impl Record for FullRecord {
    fn record_type() -> RecordType {
        RecordType::new("FullRecord", FULL_RECORD_FIELDS)
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::from(self.id)),
            "name" => Some(Value::from(self.name.as_str())),
            "sales" => Some(Value::from(self.sales)),
            "discount" => Some(Value::from(self.discount)),
            "state" => Some(Value::from(self.state.as_str())),
            "date" => Some(Value::from(self.date.as_str())),
            _ => None,
        }
    }
}

/// Sales and state only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedRecord {
    pub sales: f64,
    pub state: String,
}

impl ProjectedRecord {
    pub fn new(sales: f64, state: impl Into<String>) -> Self {
        Self {
            sales,
            state: state.into(),
        }
    }
}

impl From<&FullRecord> for ProjectedRecord {
    fn from(full: &FullRecord) -> Self {
        Self::new(full.sales, full.state.clone())
    }
}

impl Record for ProjectedRecord {
    fn record_type() -> RecordType {
        RecordType::new("ProjectedRecord", PROJECTED_RECORD_FIELDS)
    }

    fn value(&self, field: &str) -> Option<Value> {
        match field {
            "sales" => Some(Value::from(self.sales)),
            "state" => Some(Value::from(self.state.as_str())),
            _ => None,
        }
    }
}

/// Built-in customer dataset. The last row carries a malformed date.
pub fn sample_records() -> Vec<FullRecord> {
    vec![
        FullRecord::new(1, "Widget Co", 120000.00, 0.00, "AZ", "2018-07-07 12:12:12"),
        FullRecord::new(2, "Acme Widgets", 410500.00, 500.00, "CA", "2018-07-07 13:12:12"),
        FullRecord::new(3, "Widgetry", 410500.00, 200.00, "CA", "2018-07-07 14:12:12"),
        FullRecord::new(4, "Widgets R Us", 410500.00, 0.0, "CA", "2018-07-07 15:12:12"),
        FullRecord::new(5, "Ye Olde Widgete", 500.00, 0.0, "MA", "sfsdfsfsdf-07-07 16:12:12"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_declares_six_fields_in_order() {
        let names: Vec<_> = FullRecord::record_type()
            .fields
            .iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["id", "name", "sales", "discount", "state", "date"]);
    }

    #[test]
    fn test_every_declared_field_has_a_value() {
        let record = &sample_records()[0];
        for decl in FullRecord::record_type().fields {
            assert!(record.value(decl.name).is_some(), "missing {}", decl.name);
        }
        assert!(record.value("nope").is_none());
    }

    #[test]
    fn test_projection_keeps_sales_and_state() {
        let full = &sample_records()[1];
        let projected = ProjectedRecord::from(full);
        assert_eq!(projected, ProjectedRecord::new(410500.00, "CA"));
        assert_eq!(projected.value("state"), Some(Value::from("CA")));
        assert!(projected.value("id").is_none());
    }

    #[test]
    fn test_full_record_deserializes_from_json() {
        let json = r#"{"id":9,"name":"N","sales":1.0,"discount":0.0,"state":"NY","date":"2020-01-01 00:00:00"}"#;
        let record: FullRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 9);
        assert_eq!(record.date, "2020-01-01 00:00:00");
    }
}
