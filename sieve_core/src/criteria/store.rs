//! Criteria state keyed by definition id

use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::Decimal;

use super::{Choice, CriteriaValue, DateRangeValue, RangeValue, same_token};
use crate::{DefinitionId, FilterConfig, FilterDefinition, FilterError};

/// Holds the current value of every filter definition.
///
/// Definitions without an explicit value read as their kind's default, so
/// resetting a filter simply forgets its entry.
#[derive(Debug, Clone, Default)]
pub struct CriteriaStore {
    values: HashMap<DefinitionId, CriteriaValue>,
}

impl CriteriaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for the definition, or its default if never set.
    pub fn get(&self, definition: &FilterDefinition) -> CriteriaValue {
        self.values
            .get(&definition.id)
            .cloned()
            .unwrap_or_else(|| definition.default_value())
    }

    /// Binds a value to the definition after checking it fits the definition's kind.
    /// Numeric range bounds outside the definition's limits are clamped.
    pub fn set(
        &mut self,
        definition: &FilterDefinition,
        value: CriteriaValue,
    ) -> Result<(), FilterError> {
        let normalized = normalize(definition, value)?;
        debug!("Setting filter '{}' to {:?}", definition.id, normalized);
        self.values.insert(definition.id.clone(), normalized);
        Ok(())
    }

    pub fn reset(&mut self, id: &DefinitionId) {
        if self.values.remove(id).is_some() {
            debug!("Reset filter '{}' to default", id);
        }
    }

    pub fn reset_all(&mut self) {
        debug!("Resetting {} filter values", self.values.len());
        self.values.clear();
    }

    /// Flips a token in a multi-choice selection.
    ///
    /// The definition's select-all token fills the selection, or empties it
    /// when every option is already selected.
    pub fn toggle_choice(
        &mut self,
        definition: &FilterDefinition,
        token: &str,
    ) -> Result<(), FilterError> {
        let (options, select_all) = match &definition.config {
            FilterConfig::MultiChoice {
                options,
                select_all,
            } => (options, select_all),
            config => {
                return Err(FilterError::type_mismatch(
                    &definition.id,
                    config.kind().to_string(),
                    "multi-choice toggle",
                ));
            }
        };

        let mut selected = match self.get(definition) {
            CriteriaValue::MultiChoice(selected) => selected,
            _ => Vec::new(),
        };

        let is_select_all = select_all
            .as_deref()
            .is_some_and(|all| same_token(all, token));

        if is_select_all {
            selected = if selected.len() == options.len() {
                Vec::new()
            } else {
                options.clone()
            };
        } else {
            let option = find_option(&definition.id, options, token)?;
            if let Some(position) = selected.iter().position(|s| s == option) {
                selected.remove(position);
            } else {
                selected.push(option.to_string());
            }
            selected = in_declaration_order(options, &selected);
        }

        debug!("Toggled '{}' on filter '{}'", token, definition.id);
        self.values
            .insert(definition.id.clone(), CriteriaValue::MultiChoice(selected));
        Ok(())
    }

    /// Switches a range filter between "match everything" and its full bounds.
    pub fn toggle_unbounded(&mut self, definition: &FilterDefinition) -> Result<(), FilterError> {
        let (min, max) = match &definition.config {
            FilterConfig::Range { min, max, .. } => (*min, *max),
            config => {
                return Err(FilterError::type_mismatch(
                    &definition.id,
                    config.kind().to_string(),
                    "range toggle",
                ));
            }
        };

        let next = match self.get(definition) {
            CriteriaValue::Range(RangeValue::Unbounded) => RangeValue::Bounded { lo: min, hi: max },
            _ => RangeValue::Unbounded,
        };
        debug!("Filter '{}' is now {:?}", definition.id, next);
        self.values
            .insert(definition.id.clone(), CriteriaValue::Range(next));
        Ok(())
    }
}

fn normalize(
    definition: &FilterDefinition,
    value: CriteriaValue,
) -> Result<CriteriaValue, FilterError> {
    let id = &definition.id;
    match (&definition.config, value) {
        (FilterConfig::Range { min, max, .. }, CriteriaValue::Range(range)) => {
            normalize_range(id, *min, *max, range).map(CriteriaValue::Range)
        }
        (
            FilterConfig::MultiChoice {
                options,
                select_all,
            },
            CriteriaValue::MultiChoice(tokens),
        ) => {
            let mut selected = Vec::new();
            for token in &tokens {
                let is_select_all = select_all
                    .as_deref()
                    .is_some_and(|all| same_token(all, token));
                if is_select_all {
                    return Ok(CriteriaValue::MultiChoice(options.clone()));
                }
                selected.push(find_option(id, options, token)?.to_string());
            }
            Ok(CriteriaValue::MultiChoice(in_declaration_order(
                options, &selected,
            )))
        }
        (FilterConfig::SingleChoice { options }, CriteriaValue::SingleChoice(choice)) => {
            match choice {
                Choice::All => Ok(CriteriaValue::SingleChoice(Choice::All)),
                Choice::Token(token) => {
                    let option = find_option(id, options, &token)?;
                    Ok(CriteriaValue::SingleChoice(Choice::Token(option.to_string())))
                }
            }
        }
        (FilterConfig::FreeText { .. }, value @ CriteriaValue::FreeText(_))
        | (FilterConfig::Boolean { .. }, value @ CriteriaValue::Boolean(_))
        | (FilterConfig::Date, value @ CriteriaValue::Date(_)) => Ok(value),
        (FilterConfig::DateRange, CriteriaValue::DateRange(range)) => {
            if let (Some(from), Some(to)) = (range.from, range.to) {
                if from > to {
                    return Err(FilterError::type_mismatch(
                        id,
                        "date range with from <= to",
                        format!("{}..{}", from, to),
                    ));
                }
            }
            Ok(CriteriaValue::DateRange(DateRangeValue::new(range.from, range.to)))
        }
        (config, value) => Err(FilterError::type_mismatch(
            id,
            config.kind().to_string(),
            value.kind().to_string(),
        )),
    }
}

fn normalize_range(
    id: &DefinitionId,
    min: Decimal,
    max: Decimal,
    range: RangeValue,
) -> Result<RangeValue, FilterError> {
    match range {
        RangeValue::Unbounded => Ok(RangeValue::Unbounded),
        RangeValue::Bounded { lo, hi } => {
            if lo > hi {
                return Err(FilterError::type_mismatch(
                    id,
                    "range with lo <= hi",
                    format!("{}..{}", lo, hi),
                ));
            }

            let clamped_lo = lo.clamp(min, max);
            let clamped_hi = hi.clamp(min, max);
            if clamped_lo != lo || clamped_hi != hi {
                warn!(
                    "Clamped range for filter '{}' from {}..{} to {}..{}",
                    id, lo, hi, clamped_lo, clamped_hi
                );
            }
            Ok(RangeValue::Bounded {
                lo: clamped_lo,
                hi: clamped_hi,
            })
        }
    }
}

/// Resolves a token to its declared option, ignoring case.
fn find_option<'a>(
    id: &DefinitionId,
    options: &'a [String],
    token: &str,
) -> Result<&'a str, FilterError> {
    let token = token.trim();
    options
        .iter()
        .find(|option| same_token(option, token))
        .map(|option| option.as_str())
        .ok_or_else(|| {
            FilterError::type_mismatch(
                id,
                format!("one of [{}]", options.join(", ")),
                format!("'{}'", token),
            )
        })
}

fn in_declaration_order(options: &[String], selected: &[String]) -> Vec<String> {
    options
        .iter()
        .filter(|option| selected.contains(option))
        .cloned()
        .collect()
}
