use std::path::Path;

use indicatif::MultiProgress;
use sieve_core::{JsonRecordSource, Record, RecordSource, SourceError, StaticRecordSource};

use crate::errors::CliError;
use crate::ui;

/// Loads records from a JSON file, or the demo contracts when no path is given.
pub fn load_records(path: Option<&Path>, multi: &MultiProgress) -> Result<Vec<Record>, CliError> {
    let spinner = ui::spinner(multi, "Loading records");

    let result = match path {
        Some(path) => {
            ui::debug(&format!("Reading records from {}", path.display()));
            JsonRecordSource::new(path).list_records()
        }
        None => {
            ui::debug("No records file given, using demo contracts");
            StaticRecordSource::demo().list_records()
        }
    };
    spinner.finish_and_clear();

    result.map_err(|e| {
        match &e {
            SourceError::IoError(..) => {
                ui::error_with_details("Couldn't read records", &e.to_string())
            }
            _ => ui::error_with_details("Couldn't parse records", &e.to_string()),
        }
        CliError::FileError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_load_demo_records() {
        let records = load_records(None, &MultiProgress::new()).unwrap();
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "a", "value": 10}}, {{"id": "b", "value": 20}}]"#).unwrap();

        let records = load_records(Some(file.path()), &MultiProgress::new()).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = load_records(Some(file.path()), &MultiProgress::new());
        assert_matches!(result, Err(CliError::FileError));
    }
}
