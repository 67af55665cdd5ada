//! Load-once dataset handle.

use std::path::Path;

use chrono::NaiveDate;
use selene_events::DailyLunarRecord;

use crate::error::TableError;
use crate::reader;

/// Immutable handle over a parsed lunar table.
///
/// Loaded once per process and passed by reference thereafter. The
/// records cover strictly consecutive calendar dates with no gaps or
/// duplicates, and the table is never empty.
#[derive(Debug, Clone)]
pub struct LunarDataset {
    records: Vec<DailyLunarRecord>,
}

impl LunarDataset {
    /// Loads the table at `path`.
    ///
    /// # Errors
    ///
    /// Propagates reader errors, and returns [`TableError::Empty`] for a
    /// table without rows or [`TableError::NonConsecutive`] for a broken
    /// date sequence.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let records = reader::read_table(path)?;
        Self::from_records(records)
    }

    /// Builds a dataset from in-memory records, validating the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Empty`] if `records` is empty, or
    /// [`TableError::NonConsecutive`] naming the first gap or duplicate.
    pub fn from_records(records: Vec<DailyLunarRecord>) -> Result<Self, TableError> {
        if records.is_empty() {
            return Err(TableError::Empty);
        }
        for pair in records.windows(2) {
            let prev = pair[0].date();
            let next = pair[1].date();
            if prev.succ_opt() != Some(next) {
                return Err(TableError::NonConsecutive { prev, next });
            }
        }
        Ok(Self { records })
    }

    /// Returns all records in date order.
    pub fn records(&self) -> &[DailyLunarRecord] {
        &self.records
    }

    /// Returns the first covered date.
    pub fn first_date(&self) -> NaiveDate {
        self.records[0].date()
    }

    /// Returns the last covered date.
    pub fn last_date(&self) -> NaiveDate {
        self.records[self.records.len() - 1].date()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
