//! Criteria values bound to filter definitions

mod due_window;
mod store;

pub use due_window::DueWindow;
pub use store::CriteriaStore;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::FilterKind;

/// Sentinel token meaning "every option" for single-choice filters.
pub const ALL_TOKEN: &str = "todos";

/// Whether two choice tokens name the same option, ignoring surrounding
/// whitespace and letter case (including accented letters).
pub(crate) fn same_token(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Current value of a range filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeValue {
    /// Inclusive bounds within the definition's `[min, max]`
    Bounded { lo: Decimal, hi: Decimal },
    /// Ignore bounds and match everything
    Unbounded,
}

/// Current value of a single-choice filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    All,
    Token(String),
}

impl Choice {
    /// Parses a token, mapping the `todos` sentinel to [`Choice::All`].
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case(ALL_TOKEN) {
            Choice::All
        } else {
            Choice::Token(token.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    Unset,
    True,
    False,
}

impl TriState {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TriState::Unset => None,
            TriState::True => Some(true),
            TriState::False => Some(false),
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::True } else { TriState::False }
    }
}

/// An optional date window. Only a window with `from` set constrains records.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DateRangeValue {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRangeValue {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }
}

/// The live value bound to one filter definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum CriteriaValue {
    Range(RangeValue),
    MultiChoice(Vec<String>),
    SingleChoice(Choice),
    FreeText(String),
    Boolean(TriState),
    Date(Option<NaiveDate>),
    DateRange(DateRangeValue),
}

impl CriteriaValue {
    pub fn kind(&self) -> FilterKind {
        match self {
            CriteriaValue::Range(_) => FilterKind::Range,
            CriteriaValue::MultiChoice(_) => FilterKind::MultiChoice,
            CriteriaValue::SingleChoice(_) => FilterKind::SingleChoice,
            CriteriaValue::FreeText(_) => FilterKind::FreeText,
            CriteriaValue::Boolean(_) => FilterKind::Boolean,
            CriteriaValue::Date(_) => FilterKind::Date,
            CriteriaValue::DateRange(_) => FilterKind::DateRange,
        }
    }

    /// Convenience constructor for bounded ranges.
    pub fn range(lo: impl Into<Decimal>, hi: impl Into<Decimal>) -> Self {
        CriteriaValue::Range(RangeValue::Bounded {
            lo: lo.into(),
            hi: hi.into(),
        })
    }

    pub fn text(query: &str) -> Self {
        CriteriaValue::FreeText(query.to_string())
    }

    pub fn choices(tokens: &[&str]) -> Self {
        CriteriaValue::MultiChoice(tokens.iter().map(|t| t.to_string()).collect())
    }

    pub fn choice(token: &str) -> Self {
        CriteriaValue::SingleChoice(Choice::parse(token))
    }
}
