//! Error types for selene-io.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Error type for all fallible operations in the selene-io crate.
///
/// Covers missing files, CSV-level failures, malformed rows, and tables
/// whose date sequence violates the dataset contract.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when the header row does not match the table schema.
    #[error("header mismatch: expected {expected:?}, got {got:?}")]
    HeaderMismatch {
        /// The schema's header row.
        expected: String,
        /// The header row found in the file.
        got: String,
    },

    /// Returned when a data row cannot be parsed or fails re-validation.
    #[error("row {line}: {reason}")]
    InvalidRow {
        /// 1-based line number of the offending row, counting the header.
        line: usize,
        /// Description of the parse or validation failure.
        reason: String,
    },

    /// Returned when consecutive rows do not cover consecutive dates.
    #[error("dates not consecutive: {prev} followed by {next}")]
    NonConsecutive {
        /// Date of the earlier row.
        prev: NaiveDate,
        /// Date of the following row.
        next: NaiveDate,
    },

    /// Returned when a table contains no data rows.
    #[error("table contains no records")]
    Empty,
}

impl From<csv::Error> for TableError {
    fn from(e: csv::Error) -> Self {
        TableError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::Csv {
            reason: e.to_string(),
        }
    }
}
