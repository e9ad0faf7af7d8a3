//! Multi-choice and single-choice predicates over text fields

use log::debug;

use crate::criteria::same_token;
use crate::{Choice, FieldValue};

pub fn is_multi_active(selected: &[String]) -> bool {
    !selected.is_empty()
}

pub fn is_single_active(choice: &Choice) -> bool {
    !matches!(choice, Choice::All)
}

/// Check if the field equals any selected token (case-insensitive)
pub fn matches_any(field_value: &FieldValue, selected: &[String]) -> bool {
    match field_text(field_value) {
        Some(text) => selected.iter().any(|token| same_token(text, token)),
        None => false,
    }
}

/// Check if the field equals the chosen token (case-insensitive); `All` always passes
pub fn matches_single(field_value: &FieldValue, choice: &Choice) -> bool {
    match choice {
        Choice::All => true,
        Choice::Token(token) => match field_text(field_value) {
            Some(text) => same_token(text, token),
            None => false,
        },
    }
}

fn field_text(field_value: &FieldValue) -> Option<&str> {
    match field_value {
        FieldValue::String(s) => Some(s.trim()),
        other => {
            debug!("Choice filter cannot compare {} field", other.type_name());
            None
        }
    }
}
