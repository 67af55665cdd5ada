//! CSV table reader.

use std::path::Path;

use selene_events::DailyLunarRecord;
use tracing::{debug, info};

use crate::error::TableError;
use crate::schema;

/// Reads all records from the CSV table at `path`.
///
/// Every row passes back through the record constructor, so a
/// hand-edited file cannot smuggle in invariant violations. Sequence
/// validation (consecutive dates, non-empty table) happens in
/// [`crate::LunarDataset`].
///
/// # Errors
///
/// Returns [`TableError::FileNotFound`] if `path` does not exist,
/// [`TableError::HeaderMismatch`] if the header row differs from the
/// schema, and [`TableError::InvalidRow`] for rows that fail parsing or
/// re-validation.
pub fn read_table(path: &Path) -> Result<Vec<DailyLunarRecord>, TableError> {
    if !path.exists() {
        return Err(TableError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;

    let got = reader.headers()?.iter().collect::<Vec<_>>().join(",");
    let expected = schema::COLUMNS.join(",");
    if got != expected {
        return Err(TableError::HeaderMismatch { expected, got });
    }

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        // Line 1 is the header row.
        let line = i + 2;
        let record = schema::row_to_record(line, &row)?;
        debug!(date = %record.date(), line, "row parsed");
        records.push(record);
    }

    info!(path = %path.display(), n_records = records.len(), "table read");
    Ok(records)
}
