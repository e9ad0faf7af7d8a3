use serde::Serialize;
use sieve_core::{CriteriaValue, CustomFilterSpec, FilterDefinition, FilterSession};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
struct DefinitionView<'a> {
    #[serde(flatten)]
    definition: &'a FilterDefinition,
    value: CriteriaValue,
    active: bool,
}

/// Lists every filter definition with its current value.
pub fn list_filters(custom: &[String], output_format: OutputFormat) -> Result<(), CliError> {
    ui::header("Listing filters");
    let mut session = FilterSession::new();
    add_custom_filters(&mut session, custom)?;

    let definitions: Vec<(&FilterDefinition, CriteriaValue, bool)> = session
        .list_definitions()
        .into_iter()
        .map(|definition| {
            let value = session
                .get(&definition.id)
                .unwrap_or_else(|_| definition.default_value());
            let active = session.is_active(&definition.id).unwrap_or(false);
            (definition, value, active)
        })
        .collect();

    ui::success(&format!("Found {} filters", definitions.len()));

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_definitions(&definitions),
        OutputFormat::Json => {
            let views: Vec<DefinitionView> = definitions
                .into_iter()
                .map(|(definition, value, active)| DefinitionView {
                    definition,
                    value,
                    active,
                })
                .collect();
            ui::json_output(&views);
        }
    }

    Ok(())
}

/// Parses and registers custom filters given as JSON, in argument order.
pub fn add_custom_filters(session: &mut FilterSession, custom: &[String]) -> Result<(), CliError> {
    for json in custom {
        let spec: CustomFilterSpec = serde_json::from_str(json).map_err(|e| {
            ui::error_with_details("Couldn't read custom filter", &e.to_string());
            CliError::InputError
        })?;

        let definition = session.add_custom_definition(spec).map_err(|e| {
            ui::error_with_details("Couldn't add custom filter", &e.to_string());
            CliError::FilterError
        })?;
        ui::info(&format!(
            "Added custom filter '{}' as {}",
            definition.name, definition.id
        ));
    }
    Ok(())
}
