use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sieve_core::{
    Choice, CriteriaValue, DateRangeValue, DefinitionId, FilterConfig, FilterDefinition,
    RangeValue, TriState,
};

const RANGE_SEPARATOR: &str = "..";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Splits an `id=value` argument. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(DefinitionId, String), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <filter_id>=<value>, got '{}'", raw))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing filter id in '{}'", raw));
    }

    Ok((DefinitionId::new(id), value.to_string()))
}

/// Reads a command-line value in the syntax of the definition's kind.
pub fn parse_criteria_value(
    definition: &FilterDefinition,
    raw: &str,
) -> Result<CriteriaValue, String> {
    let value = match &definition.config {
        FilterConfig::Range { .. } => CriteriaValue::Range(parse_range(raw)?),
        FilterConfig::MultiChoice { .. } => CriteriaValue::MultiChoice(
            raw.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        FilterConfig::SingleChoice { .. } => CriteriaValue::SingleChoice(Choice::parse(raw)),
        FilterConfig::FreeText { .. } => CriteriaValue::FreeText(raw.to_string()),
        FilterConfig::Boolean { .. } => CriteriaValue::Boolean(parse_tri_state(raw)?),
        FilterConfig::Date => CriteriaValue::Date(parse_optional_date(raw)?),
        FilterConfig::DateRange => CriteriaValue::DateRange(parse_date_range(raw)?),
    };
    Ok(value)
}

/// Parses a `yyyy-mm-dd` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| format!("'{}' is not a date (expected yyyy-mm-dd)", raw.trim()))
}

fn parse_range(raw: &str) -> Result<RangeValue, String> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("all") {
        return Ok(RangeValue::Unbounded);
    }

    let (lo, hi) = raw
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| format!("expected <min>..<max> or 'all', got '{}'", raw))?;

    Ok(RangeValue::Bounded {
        lo: parse_decimal(lo)?,
        hi: parse_decimal(hi)?,
    })
}

fn parse_decimal(raw: &str) -> Result<Decimal, String> {
    Decimal::from_str(raw.trim()).map_err(|_| format!("'{}' is not a number", raw.trim()))
}

fn parse_tri_state(raw: &str) -> Result<TriState, String> {
    match raw.trim().to_lowercase().as_str() {
        "true" => Ok(TriState::True),
        "false" => Ok(TriState::False),
        "unset" | "" => Ok(TriState::Unset),
        other => Err(format!("expected true, false or unset, got '{}'", other)),
    }
}

fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(raw).map(Some)
}

fn parse_date_range(raw: &str) -> Result<DateRangeValue, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DateRangeValue::default());
    }

    let (from, to) = raw
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| format!("expected <from>..<to> or <from>.., got '{}'", raw))?;

    Ok(DateRangeValue::new(
        parse_optional_date(from)?,
        parse_optional_date(to)?,
    ))
}
