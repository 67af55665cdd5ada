//! Error types for selene-events.

use chrono::NaiveDate;

/// Error type for all fallible operations in the selene-events crate.
///
/// Covers provider failures surfaced while querying positions, deriver
/// configuration problems, and records that violate the data-model
/// invariants.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    /// Wraps an error from the ephemeris provider.
    #[error(transparent)]
    Ephemeris(#[from] selene_ephemeris::EphemerisError),

    /// Returned when a derivation span covers zero days.
    #[error("span must cover at least one day")]
    EmptySpan,

    /// Returned when the deriver configuration fails validation.
    #[error("invalid deriver config: {reason}")]
    InvalidConfig {
        /// Description of the offending setting.
        reason: String,
    },

    /// Returned when a record would violate a data-model invariant.
    #[error("invalid record for {date}: {reason}")]
    InvalidRecord {
        /// Civil date of the offending record.
        date: NaiveDate,
        /// Description of the violated invariant.
        reason: String,
    },

    /// Returned when a phase label cannot be parsed.
    #[error("unknown phase name: {name:?}")]
    UnknownPhase {
        /// The unrecognized label.
        name: String,
    },

    /// Returned when an eclipse kind label cannot be parsed.
    #[error("unknown eclipse type: {name:?}")]
    UnknownEclipseKind {
        /// The unrecognized label.
        name: String,
    },
}
