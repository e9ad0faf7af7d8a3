//! Boolean predicate for tri-state checkbox filters

use log::debug;

use crate::{FieldValue, TriState};

pub fn is_active(value: &TriState) -> bool {
    *value != TriState::Unset
}

pub fn matches(field_value: &FieldValue, value: &TriState) -> bool {
    let expected = match value.as_bool() {
        Some(expected) => expected,
        None => return true,
    };

    match field_value {
        FieldValue::Boolean(b) => *b == expected,
        other => {
            debug!("Boolean filter cannot compare {} field", other.type_name());
            false
        }
    }
}
