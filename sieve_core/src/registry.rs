//! Registry of built-in and user-created filter definitions

use log::{debug, info};

use crate::{
    CustomFilterSpec, DefinitionId, FilterDefinition, FilterError, Origin, builtin_definitions,
};

const CUSTOM_ID_PREFIX: &str = "custom";

/// Holds every filter definition of a session: the fixed built-ins followed
/// by custom definitions in creation order.
#[derive(Debug, Clone)]
pub struct DefinitionRegistry {
    builtins: Vec<FilterDefinition>,
    custom: Vec<FilterDefinition>,
    next_custom_id: u64,
}

impl Default for DefinitionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionRegistry {
    pub fn new() -> Self {
        Self {
            builtins: builtin_definitions(),
            custom: Vec::new(),
            next_custom_id: 1,
        }
    }

    /// Validates and stores a custom definition under a fresh id.
    pub fn add_custom_definition(
        &mut self,
        spec: CustomFilterSpec,
    ) -> Result<&FilterDefinition, FilterError> {
        let spec = spec.validate()?;
        let id = self.fresh_custom_id();

        info!(
            "Adding custom {} filter '{}' with id '{}'",
            spec.config.kind(),
            spec.name,
            id
        );
        self.custom.push(FilterDefinition {
            id,
            name: spec.name,
            source_field: spec.field,
            table: spec.table,
            origin: Origin::Custom,
            config: spec.config,
        });

        let index = self.custom.len() - 1;
        Ok(&self.custom[index])
    }

    /// Removes a custom definition. Built-ins cannot be removed.
    pub fn remove_custom_definition(
        &mut self,
        id: &DefinitionId,
    ) -> Result<FilterDefinition, FilterError> {
        if self.builtins.iter().any(|d| &d.id == id) {
            return Err(FilterError::InvalidOperation {
                id: id.clone(),
                reason: "built-in filters cannot be removed".to_string(),
            });
        }

        let position = self
            .custom
            .iter()
            .position(|d| &d.id == id)
            .ok_or_else(|| FilterError::not_found(id))?;

        info!("Removing custom filter '{}'", id);
        Ok(self.custom.remove(position))
    }

    /// Removes every custom definition, returning their ids.
    pub fn remove_all_custom(&mut self) -> Vec<DefinitionId> {
        debug!("Removing {} custom filters", self.custom.len());
        self.custom.drain(..).map(|d| d.id).collect()
    }

    pub fn get(&self, id: &DefinitionId) -> Result<&FilterDefinition, FilterError> {
        self.list_definitions()
            .find(|d| &d.id == id)
            .ok_or_else(|| FilterError::not_found(id))
    }

    /// Built-ins in declaration order, then custom definitions in creation order.
    pub fn list_definitions(&self) -> impl Iterator<Item = &FilterDefinition> {
        self.builtins.iter().chain(self.custom.iter())
    }

    pub fn custom_definitions(&self) -> &[FilterDefinition] {
        &self.custom
    }

    /// Ids are never reused, even after removal.
    fn fresh_custom_id(&mut self) -> DefinitionId {
        loop {
            let candidate =
                DefinitionId::new(&format!("{}-{}", CUSTOM_ID_PREFIX, self.next_custom_id));
            self.next_custom_id += 1;
            if self.get(&candidate).is_err() {
                return candidate;
            }
        }
    }
}
