//! Predicate evaluation of records against the active criteria

mod boolean;
mod choice;
mod date;
mod range;
mod text;

use log::debug;

use crate::{
    CriteriaStore, CriteriaValue, DefinitionId, DefinitionRegistry, FilterConfig,
    FilterDefinition, FilterError, Record,
};

/// Evaluates records against every active filter in a registry.
///
/// Filters combine with logical AND; multi-valued filters match any of
/// their selected tokens.
pub struct Evaluator<'a> {
    registry: &'a DefinitionRegistry,
    store: &'a CriteriaStore,
}

impl<'a> Evaluator<'a> {
    pub fn new(registry: &'a DefinitionRegistry, store: &'a CriteriaStore) -> Self {
        Self { registry, store }
    }

    /// Whether the filter with the given id currently constrains results.
    pub fn is_active(&self, id: &DefinitionId) -> Result<bool, FilterError> {
        let definition = self.registry.get(id)?;
        Ok(is_value_active(definition, &self.store.get(definition)))
    }

    /// Active definitions paired with their values, in display order.
    pub fn active_criteria(&self) -> Vec<(&'a FilterDefinition, CriteriaValue)> {
        self.registry
            .list_definitions()
            .map(|definition| (definition, self.store.get(definition)))
            .filter(|(definition, value)| is_value_active(definition, value))
            .collect()
    }

    /// Number of filters currently constraining results. Each custom filter
    /// counts as one.
    pub fn count_active(&self) -> usize {
        self.active_criteria().len()
    }

    /// Check if a record passes every active filter
    pub fn matches(&self, record: &Record) -> bool {
        matches_all(&self.active_criteria(), record)
    }

    /// Records passing every active filter, in their original order.
    pub fn filter<'r>(&self, records: &'r [Record]) -> Vec<&'r Record> {
        let active = self.active_criteria();
        let matched: Vec<&Record> = records
            .iter()
            .filter(|record| matches_all(&active, record))
            .collect();

        debug!(
            "Filtered {} records down to {} with {} active filters",
            records.len(),
            matched.len(),
            active.len()
        );
        matched
    }
}

fn matches_all(active: &[(&FilterDefinition, CriteriaValue)], record: &Record) -> bool {
    active
        .iter()
        .all(|(definition, value)| matches_definition(definition, value, record))
}

/// Kind-specific defaultness check.
fn is_value_active(definition: &FilterDefinition, value: &CriteriaValue) -> bool {
    match (&definition.config, value) {
        (FilterConfig::Range { min, max, .. }, CriteriaValue::Range(range)) => {
            range::is_active(range, *min, *max)
        }
        (_, CriteriaValue::MultiChoice(selected)) => choice::is_multi_active(selected),
        (_, CriteriaValue::SingleChoice(selected)) => choice::is_single_active(selected),
        (_, CriteriaValue::FreeText(query)) => text::is_active(query),
        (_, CriteriaValue::Boolean(state)) => boolean::is_active(state),
        (_, CriteriaValue::Date(date)) => date::is_date_active(date),
        (_, CriteriaValue::DateRange(range)) => date::is_range_active(range),
        (_, CriteriaValue::Range(_)) => false,
    }
}

fn matches_definition(
    definition: &FilterDefinition,
    value: &CriteriaValue,
    record: &Record,
) -> bool {
    // Missing field: the record cannot satisfy an active filter on it
    let field_value = match record.get_field(&definition.source_field) {
        Some(field_value) => field_value,
        None => return false,
    };

    match value {
        CriteriaValue::Range(range) => range::matches(field_value, range),
        CriteriaValue::MultiChoice(selected) => choice::matches_any(field_value, selected),
        CriteriaValue::SingleChoice(selected) => choice::matches_single(field_value, selected),
        CriteriaValue::FreeText(query) => text::matches(&field_value.to_string(), query),
        CriteriaValue::Boolean(state) => boolean::matches(field_value, state),
        CriteriaValue::Date(date) => date::matches_date(field_value, date),
        CriteriaValue::DateRange(range) => date::matches_range(field_value, range),
    }
}
