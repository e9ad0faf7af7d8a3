use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use console::style;
use convert_case::{Case, Casing};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use iso_currency::Currency;
use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;
use serde::Serialize;
use sieve_core::{
    Choice, CriteriaValue, FieldId, FieldValue, FilterConfig, FilterDefinition, RangeValue, Record,
    TriState,
};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(message: &str) {
    eprintln!("{}", style(message).bold().magenta());
}

pub fn info(message: &str) {
    eprintln!("{}", style(message).dim());
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

pub fn debug(message: &str) {
    log::debug!("{}", message);
}

/// Starts a spinner that shares the terminal with log output.
pub fn spinner(multi: &MultiProgress, message: &str) -> ProgressBar {
    let spinner = multi.add(ProgressBar::new_spinner());
    if let Ok(spinner_style) =
        ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}")
    {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub fn error_with_details(message: &str, details: &str) {
    error(message);
    eprintln!("  {}", style(details).dim());
}

pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Couldn't serialize output", &e.to_string()),
    }
}

/// Prints each definition with its kind, source field and current value.
pub fn pretty_output_definitions(definitions: &[(&FilterDefinition, CriteriaValue, bool)]) {
    for (definition, value, active) in definitions {
        let marker = if *active {
            style("●").green().to_string()
        } else {
            style("○").dim().to_string()
        };
        let source = match &definition.table {
            Some(table) => format!("{}.{}", table, definition.source_field),
            None => definition.source_field.to_string(),
        };
        println!(
            "{} {} {} ({}, reads '{}')",
            marker,
            style(definition.id.as_str()).bold(),
            definition.name,
            definition.kind().to_string().to_case(Case::Title),
            source
        );
        println!("    {}", style(describe_value(definition, value)).dim());
    }
}

/// Human-readable summary of a criteria value, using the definition's format.
pub fn describe_value(definition: &FilterDefinition, value: &CriteriaValue) -> String {
    match value {
        CriteriaValue::Range(RangeValue::Unbounded) => "Todos".to_string(),
        CriteriaValue::Range(RangeValue::Bounded { lo, hi }) => match &definition.config {
            FilterConfig::Range { format, .. } => {
                format!("{} - {}", format.format(*lo), format.format(*hi))
            }
            _ => format!("{} - {}", lo, hi),
        },
        CriteriaValue::MultiChoice(selected) if selected.is_empty() => "(nenhum)".to_string(),
        CriteriaValue::MultiChoice(selected) => selected.join(", "),
        CriteriaValue::SingleChoice(Choice::All) => "Todos".to_string(),
        CriteriaValue::SingleChoice(Choice::Token(token)) => token.clone(),
        CriteriaValue::FreeText(query) if query.trim().is_empty() => match &definition.config {
            FilterConfig::FreeText {
                placeholder: Some(placeholder),
            } => format!("({})", placeholder),
            _ => "(vazio)".to_string(),
        },
        CriteriaValue::FreeText(query) => format!("\"{}\"", query.trim()),
        CriteriaValue::Boolean(TriState::Unset) => "(não definido)".to_string(),
        CriteriaValue::Boolean(state) => format!("{:?}", state).to_lowercase(),
        CriteriaValue::Date(None) => "(sem data)".to_string(),
        CriteriaValue::Date(Some(date)) => date.format("%d/%m/%Y").to_string(),
        CriteriaValue::DateRange(range) => match (range.from, range.to) {
            (None, _) => "Selecionar intervalo personalizado".to_string(),
            (Some(from), None) => format!("{} -", from.format("%d/%m/%Y")),
            (Some(from), Some(to)) => {
                format!("{} - {}", from.format("%d/%m/%Y"), to.format("%d/%m/%Y"))
            }
        },
    }
}

const TABLE_COLUMNS: [(&str, &str); 6] = [
    ("number", "Número do Contrato"),
    ("supplier", "Fornecedor"),
    ("type", "Tipo"),
    ("value", "Valor"),
    ("paymentStatus", "Status"),
    ("dueDate", "Vencimento"),
];

/// Prints the contracts table.
pub fn pretty_output_records(records: &[&Record]) {
    if records.is_empty() {
        info("Nenhum contrato encontrado com os filtros selecionados.");
        return;
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            TABLE_COLUMNS
                .iter()
                .map(|(field, _)| format_cell(field, record.get_field(&FieldId::new(field))))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = TABLE_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, (_, title))| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(title.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line: Vec<String> = TABLE_COLUMNS
        .iter()
        .zip(&widths)
        .map(|((_, title), width)| pad(title, *width))
        .collect();
    println!("{}", style(header_line.join("  ")).bold());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let padded = pad(cell, *width);
                if TABLE_COLUMNS[i].0 == "paymentStatus" {
                    status_style(cell, padded)
                } else {
                    padded
                }
            })
            .collect();
        println!("{}", line.join("  "));
    }
}

fn format_cell(field: &str, value: Option<&FieldValue>) -> String {
    match (field, value) {
        (_, None) => "-".to_string(),
        ("value", Some(FieldValue::Number(amount))) => format_currency(*amount, Currency::BRL),
        (_, Some(value)) => value.to_string(),
    }
}

/// Formats an amount like "R$ 150.000,00".
pub fn format_currency(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp(2);
    // trunc() yields scale 0, so the mantissa is the integer value itself
    let integer_part = rounded
        .trunc()
        .mantissa()
        .unsigned_abs()
        .to_formatted_string(&Locale::pt);
    let cents = (rounded.fract() * Decimal::ONE_HUNDRED)
        .trunc()
        .mantissa()
        .unsigned_abs();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{} {},{:02}", sign, currency.symbol(), integer_part, cents)
}

fn status_style(status: &str, padded: String) -> String {
    match status.to_lowercase().as_str() {
        "pago" => style(padded).green().to_string(),
        "pendente" => style(padded).yellow().to_string(),
        "vencido" => style(padded).red().to_string(),
        _ => padded,
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
