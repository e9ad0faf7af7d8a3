mod cli;
mod commands;
mod errors;
mod prompt;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use log::LevelFilter;

use cli::{SieveCli, SieveCliCommand};
use commands::ApplyRequest;
use errors::CliError;

fn main() -> ExitCode {
    let cli = SieveCli::parse();
    let multi = MultiProgress::new();
    initialize_logging(cli.verbose, &multi);

    match run(cli, &multi) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Cancelled) => ExitCode::FAILURE,
        Err(e) => {
            ui::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: SieveCli, multi: &MultiProgress) -> Result<(), CliError> {
    match cli.command {
        SieveCliCommand::Filters { custom } => commands::list_filters(&custom, cli.format),
        SieveCliCommand::Apply {
            set,
            toggle,
            all,
            due_windows,
            today,
            custom,
            limit,
            yes,
        } => commands::apply_filters(
            cli.records.as_ref(),
            ApplyRequest {
                custom,
                set,
                toggle,
                all,
                due_windows,
                today,
                limit,
                yes,
            },
            cli.format,
            multi,
        ),
    }
}

fn initialize_logging(verbose: bool, multi: &MultiProgress) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let logger = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .build();
    let max_level = logger.filter();

    if LogWrapper::new(multi.clone(), logger).try_init().is_ok() {
        log::set_max_level(max_level);
    }
}
