//! Report error types.

use chrono::NaiveDate;

/// Errors that can occur while building a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The requested start date falls outside the dataset.
    #[error("report start {start} outside dataset coverage {first} to {last}")]
    StartOutOfRange {
        start: NaiveDate,
        first: NaiveDate,
        last: NaiveDate,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
