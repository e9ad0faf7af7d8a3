//! Records supplied by a record source and the values they carry

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Names an attribute of a record (e.g. "value", "dueDate", "supplier").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: &str) -> Self {
        FieldId(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        FieldId::new(value)
    }
}

/// A single value held by a record field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Number(Decimal),
    Boolean(bool),
    Date(NaiveDate),
}

impl FieldValue {
    /// Returns the type name of this value for log and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "String",
            FieldValue::Number(_) => "Number",
            FieldValue::Boolean(_) => "Boolean",
            FieldValue::Date(_) => "Date",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n.normalize()),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Date(d) => write!(f, "{}", d.format("%d/%m/%Y")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(Decimal::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(Decimal::from(value))
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

/// One contract or payment entity. The engine only ever reads records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub fields: BTreeMap<FieldId, FieldValue>,
}

impl Record {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style helper to attach a field value.
    pub fn with_field(mut self, field: impl Into<FieldId>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get_field(&self, field: &FieldId) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}
