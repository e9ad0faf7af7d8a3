use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the Sieve CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(version, about = "Sieve CLI: Filter and browse contract records.")]
pub struct SieveCli {
    /// Path to a JSON file with an array of records. Uses demo contracts if omitted.
    #[arg(short, long, global = true, env = "SIEVE_RECORDS")]
    pub records: Option<PathBuf>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: SieveCliCommand,
}

/// Defines the available subcommands of the Sieve CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum SieveCliCommand {
    /// List filter definitions: built-ins first, then custom filters.
    Filters {
        /// Custom filter as JSON (can be repeated), e.g. '{"name":"Prioridade","field":"prioridade","kind":"dropdown","options":["alta","baixa"]}'
        #[arg(long = "custom", value_name = "JSON")]
        custom: Vec<String>,
    },
    /// Apply filters to the records and show the matching contracts.
    Apply {
        /// Set a filter value (can be repeated). Format: --set <filter_id>=<value>
        #[arg(long = "set", value_name = "ID=VALUE")]
        set: Vec<String>,
        /// Toggle an option of a multi-choice filter (can be repeated). Format: --toggle <filter_id>=<option>
        #[arg(long = "toggle", value_name = "ID=OPTION")]
        toggle: Vec<String>,
        /// Switch a range filter to match every value (can be repeated).
        #[arg(long = "all", value_name = "ID")]
        all: Vec<String>,
        /// Restrict the due-date period to a quick pick (can be repeated), e.g. "Até 30 dias".
        #[arg(long = "due-window", value_name = "LABEL")]
        due_windows: Vec<String>,
        /// Reference date for due-date quick picks (yyyy-mm-dd). Defaults to today.
        #[arg(long)]
        today: Option<String>,
        /// Custom filter as JSON (can be repeated). Custom filters get ids custom-1, custom-2, ...
        #[arg(long = "custom", value_name = "JSON")]
        custom: Vec<String>,
        /// Number of contracts to display (1 to 1000).
        #[arg(short, long, env = "SIEVE_LIMIT", default_value_t = 10)]
        limit: usize,
        /// Show all records without asking when no filter is active.
        #[arg(short, long)]
        yes: bool,
    },
}
