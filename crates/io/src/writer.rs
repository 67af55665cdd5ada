//! CSV table writer.

use std::path::Path;

use selene_events::DailyLunarRecord;
use tracing::info;

use crate::error::TableError;
use crate::schema;

/// Writes records to a CSV table at `path`, replacing any existing file.
///
/// One header row followed by one row per record. Regeneration is
/// wholesale: the file is truncated up front, never appended across
/// runs.
///
/// # Errors
///
/// Returns [`TableError::Csv`] if the file cannot be created or a row
/// cannot be written.
pub fn write_table(path: &Path, records: &[DailyLunarRecord]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(schema::COLUMNS)?;
    for record in records {
        writer.write_record(schema::record_to_row(record))?;
    }
    writer.flush()?;

    info!(path = %path.display(), n_records = records.len(), "table written");
    Ok(())
}
