//! Error types for the selene-ephemeris crate.

use chrono::{DateTime, NaiveDate, Utc};

/// Error type for all fallible operations in the selene-ephemeris crate.
///
/// Covers queries outside the provider's validity window and span
/// validation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EphemerisError {
    /// Returned when an instant falls outside the provider's validity window.
    #[error("instant {instant} outside ephemeris validity ({first}..={last})")]
    OutOfRange {
        /// The instant that was queried.
        instant: DateTime<Utc>,
        /// First civil date covered by the provider.
        first: NaiveDate,
        /// Last civil date covered by the provider.
        last: NaiveDate,
    },

    /// Returned when a date span falls outside the provider's validity window.
    #[error("span {start} (+{n_days} days) outside ephemeris validity ({first}..={last})")]
    SpanOutOfRange {
        /// First date of the rejected span.
        start: NaiveDate,
        /// Number of days in the rejected span.
        n_days: usize,
        /// First civil date covered by the provider.
        first: NaiveDate,
        /// Last civil date covered by the provider.
        last: NaiveDate,
    },
}
