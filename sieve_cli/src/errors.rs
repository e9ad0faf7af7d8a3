use std::fmt;

/// Defines the errors you might encounter using the Sieve CLI.
#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    InputError,
    FileError,
    FilterError,
    Cancelled,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputError => write!(f, "Invalid input"),
            CliError::FileError => write!(f, "Records could not be loaded"),
            CliError::FilterError => write!(f, "Filters could not be applied"),
            CliError::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::error::Error for CliError {}
