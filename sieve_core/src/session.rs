//! A filtering session: one registry, its criteria and evaluation over records

use log::{debug, info};

use crate::{
    Confirmation, CriteriaStore, CriteriaValue, CustomFilterSpec, DefinitionId,
    DefinitionRegistry, Evaluator, FilterDefinition, FilterError, Record,
};

/// What clearing all filters does to custom definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// Reset every value to its default; custom definitions stay registered.
    #[default]
    ResetValues,
    /// Reset every value and remove all custom definitions.
    RemoveCustom,
}

/// Owns the definitions and criteria of a single user session and exposes
/// the operations a host UI calls.
#[derive(Debug, Clone, Default)]
pub struct FilterSession {
    registry: DefinitionRegistry,
    store: CriteriaStore,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    pub fn list_definitions(&self) -> Vec<&FilterDefinition> {
        self.registry.list_definitions().collect()
    }

    pub fn definition(&self, id: &DefinitionId) -> Result<&FilterDefinition, FilterError> {
        self.registry.get(id)
    }

    pub fn add_custom_definition(
        &mut self,
        spec: CustomFilterSpec,
    ) -> Result<&FilterDefinition, FilterError> {
        self.registry.add_custom_definition(spec)
    }

    /// Removes a custom definition together with its value.
    pub fn remove_custom_definition(
        &mut self,
        id: &DefinitionId,
    ) -> Result<FilterDefinition, FilterError> {
        let removed = self.registry.remove_custom_definition(id)?;
        self.store.reset(id);
        Ok(removed)
    }

    pub fn get(&self, id: &DefinitionId) -> Result<CriteriaValue, FilterError> {
        let definition = self.registry.get(id)?;
        Ok(self.store.get(definition))
    }

    pub fn set(&mut self, id: &DefinitionId, value: CriteriaValue) -> Result<(), FilterError> {
        let definition = self.registry.get(id)?;
        self.store.set(definition, value)
    }

    pub fn reset(&mut self, id: &DefinitionId) -> Result<(), FilterError> {
        self.registry.get(id)?;
        self.store.reset(id);
        Ok(())
    }

    /// Restores every value to its default. Custom definitions are kept.
    pub fn reset_all(&mut self) {
        self.store.reset_all();
    }

    pub fn toggle_choice(&mut self, id: &DefinitionId, token: &str) -> Result<(), FilterError> {
        let definition = self.registry.get(id)?;
        self.store.toggle_choice(definition, token)
    }

    pub fn toggle_unbounded(&mut self, id: &DefinitionId) -> Result<(), FilterError> {
        let definition = self.registry.get(id)?;
        self.store.toggle_unbounded(definition)
    }

    /// Clears all filters according to the given policy.
    pub fn clear(&mut self, policy: ClearPolicy) {
        info!("Clearing filters ({:?})", policy);
        self.store.reset_all();
        if policy == ClearPolicy::RemoveCustom {
            self.registry.remove_all_custom();
        }
    }

    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.registry, &self.store)
    }

    pub fn is_active(&self, id: &DefinitionId) -> Result<bool, FilterError> {
        self.evaluator().is_active(id)
    }

    pub fn count_active(&self) -> usize {
        self.evaluator().count_active()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.evaluator().matches(record)
    }

    pub fn filter<'r>(&self, records: &'r [Record]) -> Vec<&'r Record> {
        self.evaluator().filter(records)
    }

    /// Filters the records, asking for confirmation first when no filter is
    /// active. Returns `None` when the unfiltered pass is refused.
    pub fn apply<'r>(
        &self,
        records: &'r [Record],
        confirmation: &mut dyn Confirmation,
    ) -> Option<Vec<&'r Record>> {
        if self.count_active() == 0 && !confirmation.confirm_unfiltered(records.len()) {
            debug!("Unfiltered pass over {} records refused", records.len());
            return None;
        }
        Some(self.filter(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlwaysConfirm, FilterConfig, NeverConfirm, SUPPLIER_NAME};

    struct CountingConfirm {
        asked: usize,
        answer: bool,
    }

    impl Confirmation for CountingConfirm {
        fn confirm_unfiltered(&mut self, _total: usize) -> bool {
            self.asked += 1;
            self.answer
        }
    }

    fn dropdown() -> CustomFilterSpec {
        CustomFilterSpec::new(
            "Prioridade",
            "prioridade",
            FilterConfig::SingleChoice {
                options: vec!["alta".to_string(), "baixa".to_string()],
            },
        )
    }

    #[test]
    fn test_apply_asks_when_nothing_active() {
        let session = FilterSession::new();
        let records = vec![Record::new("1"), Record::new("2")];

        let mut confirm = CountingConfirm { asked: 0, answer: false };
        assert_eq!(session.apply(&records, &mut confirm), None);
        assert_eq!(confirm.asked, 1);

        assert_eq!(session.apply(&records, &mut AlwaysConfirm).map(|r| r.len()), Some(2));
    }

    #[test]
    fn test_apply_skips_confirmation_when_filtered() {
        let mut session = FilterSession::new();
        session
            .set(&DefinitionId::new(SUPPLIER_NAME), CriteriaValue::text("x"))
            .unwrap();
        let records = vec![Record::new("1").with_field("supplier", "x")];

        let result = session.apply(&records, &mut NeverConfirm);
        assert_eq!(result.map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_remove_custom_drops_value() {
        let mut session = FilterSession::new();
        let id = session.add_custom_definition(dropdown()).unwrap().id.clone();
        session.set(&id, CriteriaValue::choice("alta")).unwrap();
        assert_eq!(session.count_active(), 1);

        session.remove_custom_definition(&id).unwrap();
        assert_eq!(session.count_active(), 0);
        assert!(session.get(&id).is_err());
    }

    #[test]
    fn test_clear_reset_values_keeps_custom() {
        let mut session = FilterSession::new();
        let id = session.add_custom_definition(dropdown()).unwrap().id.clone();
        session.set(&id, CriteriaValue::choice("alta")).unwrap();

        session.clear(ClearPolicy::ResetValues);
        assert_eq!(session.count_active(), 0);
        assert_eq!(session.list_definitions().len(), 10);
        assert_eq!(session.is_active(&id), Ok(false));
    }

    #[test]
    fn test_clear_remove_custom() {
        let mut session = FilterSession::new();
        session.add_custom_definition(dropdown()).unwrap();

        session.clear(ClearPolicy::RemoveCustom);
        assert_eq!(session.list_definitions().len(), 9);
    }
}
