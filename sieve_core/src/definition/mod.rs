//! Filter definition types: what each filterable dimension reads and how it is configured

mod builtin;
mod custom;
mod format;

pub use builtin::*;
pub use custom::CustomFilterSpec;
pub use format::ValueFormat;

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::FieldId;
use crate::criteria::{Choice, CriteriaValue, DateRangeValue, RangeValue, TriState};

/// Stable identifier of a filter definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionId(String);

impl DefinitionId {
    pub fn new(id: &str) -> Self {
        DefinitionId(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DefinitionId {
    fn from(value: &str) -> Self {
        DefinitionId::new(value)
    }
}

/// Where a definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Builtin,
    Custom,
}

/// The kinds of filters the engine can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    Range,
    MultiChoice,
    SingleChoice,
    FreeText,
    Boolean,
    Date,
    DateRange,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::Range => "range",
            FilterKind::MultiChoice => "multi-choice",
            FilterKind::SingleChoice => "single-choice",
            FilterKind::FreeText => "free-text",
            FilterKind::Boolean => "boolean",
            FilterKind::Date => "date",
            FilterKind::DateRange => "date-range",
        };
        write!(f, "{}", name)
    }
}

fn default_step() -> Decimal {
    Decimal::ONE
}

/// Kind-specific configuration of a filter definition.
///
/// Each variant carries only what its kind needs. Accepts the kind names used
/// by the dashboard's creation form ("slider", "dropdown", "input", ...) as
/// aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FilterConfig {
    #[serde(alias = "slider")]
    Range {
        min: Decimal,
        max: Decimal,
        #[serde(default = "default_step")]
        step: Decimal,
        #[serde(default)]
        format: ValueFormat,
    },
    #[serde(alias = "multi-select")]
    MultiChoice {
        options: Vec<String>,
        #[serde(default)]
        select_all: Option<String>,
    },
    #[serde(alias = "dropdown")]
    SingleChoice { options: Vec<String> },
    #[serde(alias = "input")]
    FreeText {
        #[serde(default)]
        placeholder: Option<String>,
    },
    #[serde(alias = "checkbox")]
    Boolean { label: String },
    Date,
    #[serde(alias = "interval")]
    DateRange,
}

impl FilterConfig {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterConfig::Range { .. } => FilterKind::Range,
            FilterConfig::MultiChoice { .. } => FilterKind::MultiChoice,
            FilterConfig::SingleChoice { .. } => FilterKind::SingleChoice,
            FilterConfig::FreeText { .. } => FilterKind::FreeText,
            FilterConfig::Boolean { .. } => FilterKind::Boolean,
            FilterConfig::Date => FilterKind::Date,
            FilterConfig::DateRange => FilterKind::DateRange,
        }
    }

    /// The no-op value a definition of this configuration starts with.
    pub fn default_value(&self) -> CriteriaValue {
        match self {
            FilterConfig::Range { min, max, .. } => CriteriaValue::Range(RangeValue::Bounded {
                lo: *min,
                hi: *max,
            }),
            FilterConfig::MultiChoice { .. } => CriteriaValue::MultiChoice(Vec::new()),
            FilterConfig::SingleChoice { .. } => CriteriaValue::SingleChoice(Choice::All),
            FilterConfig::FreeText { .. } => CriteriaValue::FreeText(String::new()),
            FilterConfig::Boolean { .. } => CriteriaValue::Boolean(TriState::Unset),
            FilterConfig::Date => CriteriaValue::Date(None),
            FilterConfig::DateRange => CriteriaValue::DateRange(DateRangeValue::default()),
        }
    }
}

/// Describes one filterable dimension of the record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDefinition {
    pub id: DefinitionId,
    pub name: String,
    pub source_field: FieldId,
    /// Source table the field is read from, when the host names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub origin: Origin,
    pub config: FilterConfig,
}

impl FilterDefinition {
    pub fn kind(&self) -> FilterKind {
        self.config.kind()
    }

    pub fn is_builtin(&self) -> bool {
        self.origin == Origin::Builtin
    }

    pub fn default_value(&self) -> CriteriaValue {
        self.config.default_value()
    }
}
