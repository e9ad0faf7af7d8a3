use std::path::PathBuf;

use chrono::NaiveDate;
use indicatif::MultiProgress;
use serde::Serialize;
use sieve_core::{
    AlwaysConfirm, Confirmation, CriteriaValue, DATE_PERIOD, DefinitionId, DisplayLimit,
    DueWindow, FilterError, FilterSession, Record,
};

use super::criteria_arg::{parse_assignment, parse_criteria_value, parse_date};
use super::filters::add_custom_filters;
use super::records::load_records;
use crate::errors::CliError;
use crate::prompt::InquireConfirmation;
use crate::ui::{self, OutputFormat};

/// Criteria changes requested on the command line, applied in field order.
#[derive(Debug, Clone, Default)]
pub struct ApplyRequest {
    pub custom: Vec<String>,
    pub set: Vec<String>,
    pub toggle: Vec<String>,
    pub all: Vec<String>,
    pub due_windows: Vec<String>,
    pub today: Option<String>,
    pub limit: usize,
    pub yes: bool,
}

#[derive(Serialize)]
struct ApplyOutput<'a> {
    active_filters: usize,
    matched: usize,
    shown: usize,
    records: &'a [&'a Record],
}

/// Applies the requested criteria and prints the matching contracts.
pub fn apply_filters(
    records_path: Option<&PathBuf>,
    request: ApplyRequest,
    output_format: OutputFormat,
    multi: &MultiProgress,
) -> Result<(), CliError> {
    ui::header("Applying filters");

    let mut session = FilterSession::new();
    build_criteria(&mut session, &request)?;

    let active = session.count_active();
    ui::debug(&format!("{} active filters", active));

    let records = load_records(records_path.map(|p| p.as_path()), multi)?;

    let mut confirmation: Box<dyn Confirmation> = if request.yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(InquireConfirmation)
    };
    let matched = select_records(&session, &records, confirmation.as_mut())?;

    let shown = DisplayLimit::new(request.limit).slice(&matched);
    ui::success(&format!("{} filtros aplicados", active));

    match output_format {
        OutputFormat::Pretty => {
            println!("Contratos ({} de {})", shown.len(), matched.len());
            ui::pretty_output_records(shown);
        }
        OutputFormat::Json => ui::json_output(&ApplyOutput {
            active_filters: active,
            matched: matched.len(),
            shown: shown.len(),
            records: shown,
        }),
    }

    Ok(())
}

/// Runs the filter pass, asking `confirmation` first when nothing is active.
fn select_records<'r>(
    session: &FilterSession,
    records: &'r [Record],
    confirmation: &mut dyn Confirmation,
) -> Result<Vec<&'r Record>, CliError> {
    session.apply(records, confirmation).ok_or_else(|| {
        ui::info("Nothing to show");
        CliError::Cancelled
    })
}

/// Updates the session's criteria: custom filters first, then values, toggles,
/// unbounded switches and due-date quick picks.
fn build_criteria(session: &mut FilterSession, request: &ApplyRequest) -> Result<(), CliError> {
    add_custom_filters(session, &request.custom)?;

    for raw in &request.set {
        let (id, value) = parse_assignment(raw).map_err(input_error)?;
        let definition = session.definition(&id).map_err(filter_error)?;
        let value = parse_criteria_value(definition, &value).map_err(input_error)?;
        session.set(&id, value).map_err(filter_error)?;
    }

    for raw in &request.toggle {
        let (id, token) = parse_assignment(raw).map_err(input_error)?;
        session.toggle_choice(&id, &token).map_err(filter_error)?;
    }

    for raw in &request.all {
        session
            .toggle_unbounded(&DefinitionId::new(raw.trim()))
            .map_err(filter_error)?;
    }

    if !request.due_windows.is_empty() {
        let windows = request
            .due_windows
            .iter()
            .map(|label| {
                DueWindow::from_label(label)
                    .ok_or_else(|| input_error(format!("unknown due window '{}'", label)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let today = match &request.today {
            Some(raw) => parse_date(raw).map_err(input_error)?,
            None => today(),
        };

        if let Some(span) = DueWindow::span(&windows, today) {
            session
                .set(&DefinitionId::new(DATE_PERIOD), CriteriaValue::DateRange(span))
                .map_err(filter_error)?;
        }
    }

    Ok(())
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn input_error(reason: String) -> CliError {
    ui::error_with_details("Invalid filter argument", &reason);
    CliError::InputError
}

fn filter_error(error: FilterError) -> CliError {
    ui::error_with_details("Couldn't update filter", &error.to_string());
    CliError::FilterError
}
