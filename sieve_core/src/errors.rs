//! Error types for filter definitions, criteria and record sources

use std::{fmt, io, path::PathBuf};

use crate::DefinitionId;

/// Errors that can occur while managing filters and their values
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A custom filter request is missing or has malformed fields
    Validation { field: String, reason: String },
    /// A criteria value does not fit the definition it was bound to
    TypeMismatch {
        id: DefinitionId,
        expected: String,
        actual: String,
    },
    /// No definition exists with the given id
    NotFound { id: DefinitionId },
    /// The structural change is not allowed for this definition
    InvalidOperation { id: DefinitionId, reason: String },
}

impl FilterError {
    pub fn validation(field: &str, reason: &str) -> Self {
        FilterError::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn type_mismatch(
        id: &DefinitionId,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        FilterError::TypeMismatch {
            id: id.clone(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn not_found(id: &DefinitionId) -> Self {
        FilterError::NotFound { id: id.clone() }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::Validation { field, reason } => {
                write!(f, "Invalid custom filter: '{}' {}", field, reason)
            }
            FilterError::TypeMismatch {
                id,
                expected,
                actual,
            } => write!(
                f,
                "Value for filter '{}' does not fit: expected {}, got {}",
                id, expected, actual
            ),
            FilterError::NotFound { id } => write!(f, "No filter found with id '{}'", id),
            FilterError::InvalidOperation { id, reason } => {
                write!(f, "Cannot change filter '{}': {}", id, reason)
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Errors that can occur while reading records from a source
#[derive(Debug)]
pub enum SourceError {
    IoError(PathBuf, io::Error),
    ParseError(String),
    InvalidRecord { index: usize, reason: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::IoError(path, error) => write!(
                f,
                "Records at {} could not be read: {}",
                path.display(),
                error
            ),
            SourceError::ParseError(error) => write!(f, "Records could not be parsed: {}", error),
            SourceError::InvalidRecord { index, reason } => {
                write!(f, "Record #{} is invalid: {}", index, reason)
            }
        }
    }
}

impl std::error::Error for SourceError {}
