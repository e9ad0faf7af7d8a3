//! User-defined filter requests and their validation

use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::FilterConfig;
use crate::criteria::same_token;
use crate::{ALL_TOKEN, FieldId, FilterError};

/// A request to create a custom filter, as submitted by the host UI.
///
/// Deserializes from a flat object keyed by `kind`, for example
/// `{"name": "Prioridade", "field": "prioridade", "kind": "dropdown", "options": ["alta", "baixa"]}`.
/// An optional `table` names the source table the field belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomFilterSpec {
    pub name: String,
    pub field: FieldId,
    #[serde(default)]
    pub table: Option<String>,
    #[serde(flatten)]
    pub config: FilterConfig,
}

impl CustomFilterSpec {
    pub fn new(name: &str, field: &str, config: FilterConfig) -> Self {
        Self {
            name: name.to_string(),
            field: FieldId::new(field),
            table: None,
            config,
        }
    }

    pub fn with_table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    /// Checks the request and returns it with names trimmed and
    /// options de-duplicated.
    pub fn validate(self) -> Result<CustomFilterSpec, FilterError> {
        debug!("Validating custom filter spec '{}'", self.name);

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(FilterError::validation("name", "must not be empty"));
        }

        let field = self.field.as_str().trim();
        if field.is_empty() {
            return Err(FilterError::validation("field", "must not be empty"));
        }

        let config = match self.config {
            FilterConfig::Range {
                min,
                max,
                step,
                format,
            } => {
                if min >= max {
                    return Err(FilterError::validation(
                        "max",
                        &format!("must be greater than min ({} >= {})", min, max),
                    ));
                }
                if step <= Decimal::ZERO {
                    return Err(FilterError::validation("step", "must be positive"));
                }
                FilterConfig::Range {
                    min,
                    max,
                    step,
                    format,
                }
            }
            FilterConfig::MultiChoice {
                options,
                select_all,
            } => {
                let options = normalize_options(options)?;
                let select_all = select_all
                    .map(|token| token.trim().to_string())
                    .filter(|token| !token.is_empty());
                if let Some(token) = &select_all {
                    if options.iter().any(|option| same_token(option, token)) {
                        return Err(FilterError::validation(
                            "select_all",
                            "must differ from every option",
                        ));
                    }
                }
                FilterConfig::MultiChoice {
                    options,
                    select_all,
                }
            }
            FilterConfig::SingleChoice { options } => {
                let options = normalize_options(options)?;
                if options.iter().any(|option| same_token(option, ALL_TOKEN)) {
                    return Err(FilterError::validation(
                        "options",
                        &format!("must not use the reserved '{}' token", ALL_TOKEN),
                    ));
                }
                FilterConfig::SingleChoice { options }
            }
            FilterConfig::FreeText { placeholder } => FilterConfig::FreeText {
                placeholder: placeholder.filter(|p| !p.trim().is_empty()),
            },
            FilterConfig::Boolean { label } => {
                let label = label.trim().to_string();
                if label.is_empty() {
                    return Err(FilterError::validation("label", "must not be empty"));
                }
                FilterConfig::Boolean { label }
            }
            config @ (FilterConfig::Date | FilterConfig::DateRange) => config,
        };

        let table = self
            .table
            .map(|table| table.trim().to_string())
            .filter(|table| !table.is_empty());

        Ok(CustomFilterSpec {
            name,
            field: FieldId::new(field),
            table,
            config,
        })
    }
}

/// Trims options, drops blank lines and duplicates, keeping first-seen order.
fn normalize_options(options: Vec<String>) -> Result<Vec<String>, FilterError> {
    let mut normalized: Vec<String> = Vec::new();
    for option in options {
        let option = option.trim();
        if option.is_empty() || normalized.iter().any(|o| o == option) {
            continue;
        }
        normalized.push(option.to_string());
    }

    if normalized.is_empty() {
        return Err(FilterError::validation(
            "options",
            "must contain at least one option",
        ));
    }
    Ok(normalized)
}
