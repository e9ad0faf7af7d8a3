//! Record sources: where candidate records come from

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::{FieldId, FieldValue, Record, SourceError};

const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

/// Supplies the ordered list of candidate records. The engine never caches
/// or mutates what a source returns.
pub trait RecordSource {
    fn list_records(&self) -> Result<Vec<Record>, SourceError>;
}

/// In-memory records.
#[derive(Debug, Clone, Default)]
pub struct StaticRecordSource {
    records: Vec<Record>,
}

impl StaticRecordSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The sample contracts shown on the dashboard.
    pub fn demo() -> Self {
        let contract = |id: &str,
                        number: &str,
                        supplier: &str,
                        flow_type: &str,
                        value: i64,
                        payment_value: i64,
                        status: &str,
                        due: (i32, u32, u32),
                        location: &str,
                        cnpj: &str,
                        cost_center: &str| {
            let mut record = Record::new(id)
                .with_field("number", number)
                .with_field("supplier", supplier)
                .with_field("type", flow_type)
                .with_field("value", value)
                .with_field("paymentValue", payment_value)
                .with_field("paymentStatus", status)
                .with_field("location", location)
                .with_field("cnpj", cnpj)
                .with_field("costCenter", cost_center);
            if let Some(due_date) = NaiveDate::from_ymd_opt(due.0, due.1, due.2) {
                record = record.with_field("dueDate", due_date);
            }
            record
        };

        Self::new(vec![
            contract(
                "1",
                "CT-2024-001",
                "TechCorp LTDA",
                "RE",
                150000,
                75000,
                "Pago",
                (2024, 3, 15),
                "sudeste",
                "12.345.678/0001-90",
                "CC-100",
            ),
            contract(
                "2",
                "CT-2024-002",
                "InnovaSoft",
                "FI",
                280000,
                140000,
                "Pendente",
                (2024, 3, 22),
                "sul",
                "23.456.789/0001-01",
                "CC-200",
            ),
            contract(
                "3",
                "CT-2024-003",
                "BuildCorp",
                "Engenharia",
                750000,
                750000,
                "Vencido",
                (2024, 3, 10),
                "nordeste",
                "34.567.890/0001-12",
                "CC-300",
            ),
            contract(
                "4",
                "CT-2024-004",
                "DataSolutions",
                "Proposta",
                420000,
                210000,
                "Pago",
                (2024, 3, 28),
                "sudeste",
                "45.678.901/0001-23",
                "CC-100",
            ),
            contract(
                "5",
                "CT-2024-005",
                "SystemsPlus",
                "RC",
                95000,
                95000,
                "Pendente",
                (2024, 4, 5),
                "centro-oeste",
                "56.789.012/0001-34",
                "CC-400",
            ),
        ])
    }
}

impl RecordSource for StaticRecordSource {
    fn list_records(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Reads records from a JSON file holding an array of flat objects.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    path: PathBuf,
}

impl JsonRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonRecordSource {
    fn list_records(&self) -> Result<Vec<Record>, SourceError> {
        debug!("Reading records from {}", self.path.display());
        let content =
            fs::read_to_string(&self.path).map_err(|e| SourceError::IoError(self.path.clone(), e))?;
        parse_records(&content)
    }
}

/// Parses a JSON array of flat objects into records.
///
/// Every object needs an `id`. Numbers become [`FieldValue::Number`], booleans
/// [`FieldValue::Boolean`], strings shaped like `dd/mm/yyyy` or `yyyy-mm-dd`
/// become [`FieldValue::Date`]; other strings stay text and nulls are skipped.
pub fn parse_records(json: &str) -> Result<Vec<Record>, SourceError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| SourceError::ParseError(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(SourceError::ParseError(
                "expected an array of records".to_string(),
            ));
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_record(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} records", records.len());
    Ok(records)
}

fn parse_record(index: usize, item: Value) -> Result<Record, SourceError> {
    let invalid = |reason: String| SourceError::InvalidRecord { index, reason };

    let object = match item {
        Value::Object(object) => object,
        other => return Err(invalid(format!("expected an object, got {}", other))),
    };

    let id = match object.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return Err(invalid("missing 'id'".to_string())),
    };

    let mut record = Record::new(&id);
    for (key, value) in object {
        if key == "id" {
            continue;
        }
        let field_value = match value {
            Value::Null => continue,
            Value::Bool(b) => FieldValue::Boolean(b),
            Value::Number(n) => FieldValue::Number(parse_number(&n.to_string()).ok_or_else(
                || invalid(format!("field '{}' has an unsupported number {}", key, n)),
            )?),
            Value::String(s) => parse_text(s),
            Value::Array(_) | Value::Object(_) => {
                return Err(invalid(format!("field '{}' must be a scalar", key)));
            }
        };
        record.fields.insert(FieldId::new(&key), field_value);
    }

    Ok(record)
}

fn parse_number(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn parse_text(text: String) -> FieldValue {
    let trimmed = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .map(FieldValue::Date)
        .unwrap_or(FieldValue::String(text))
}
