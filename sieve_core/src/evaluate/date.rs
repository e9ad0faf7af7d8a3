//! Date and date-range predicates

use chrono::NaiveDate;
use log::debug;

use crate::{DateRangeValue, FieldValue};

pub fn is_date_active(value: &Option<NaiveDate>) -> bool {
    value.is_some()
}

/// A date range constrains records only once its start is chosen.
pub fn is_range_active(value: &DateRangeValue) -> bool {
    value.from.is_some()
}

pub fn matches_date(field_value: &FieldValue, value: &Option<NaiveDate>) -> bool {
    match (field_date(field_value), value) {
        (_, None) => true,
        (Some(date), Some(expected)) => date == *expected,
        (None, Some(_)) => false,
    }
}

/// Check if the field's date lies within `[from, to]`, open-ended when `to` is unset
pub fn matches_range(field_value: &FieldValue, value: &DateRangeValue) -> bool {
    let from = match value.from {
        Some(from) => from,
        None => return true,
    };

    match field_date(field_value) {
        Some(date) => date >= from && value.to.is_none_or(|to| date <= to),
        None => false,
    }
}

fn field_date(field_value: &FieldValue) -> Option<NaiveDate> {
    match field_value {
        FieldValue::Date(date) => Some(*date),
        other => {
            debug!("Date filter cannot compare {} field", other.type_name());
            None
        }
    }
}
