//! Ephemeris provider trait and the built-in analytic implementation.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::error::EphemerisError;
use crate::moon::{self, MoonPosition};
use crate::sun::{self, SunPosition};
use crate::time;

/// Source of solar and lunar positions over a bounded span of dates.
///
/// Implementations reject instants outside their validity window rather
/// than extrapolating. An instant on the midnight following the last
/// valid date is still accepted, so a full scan of the last day can
/// sample both of its boundaries.
pub trait Ephemeris {
    /// Apparent geocentric solar position at `instant`.
    fn sun_position(&self, instant: DateTime<Utc>) -> Result<SunPosition, EphemerisError>;

    /// Apparent geocentric lunar position at `instant`.
    fn moon_position(&self, instant: DateTime<Utc>) -> Result<MoonPosition, EphemerisError>;

    /// First and last civil date (UTC) this provider covers.
    fn validity(&self) -> (NaiveDate, NaiveDate);

    /// Checks that `n_days` consecutive dates starting at `start` all lie
    /// inside the validity window.
    fn check_span(&self, start: NaiveDate, n_days: usize) -> Result<(), EphemerisError> {
        let (first, last) = self.validity();
        let out_of_range = EphemerisError::SpanOutOfRange {
            start,
            n_days,
            first,
            last,
        };
        let end = start
            .checked_add_days(Days::new(n_days.saturating_sub(1) as u64))
            .ok_or(out_of_range.clone())?;
        if start < first || end > last {
            return Err(out_of_range);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Analytic provider
// ---------------------------------------------------------------------------

/// Self-contained provider backed by truncated analytic series.
///
/// Covers civil dates 1900-01-01 through 2052-12-31. Positions come from
/// the series in [`crate::sun`] and [`crate::moon`] after converting the
/// instant to dynamical time.
#[derive(Debug, Clone)]
pub struct AnalyticEphemeris {
    first: NaiveDate,
    last: NaiveDate,
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self {
            first: NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid calendar date"),
            last: NaiveDate::from_ymd_opt(2052, 12, 31).expect("valid calendar date"),
        }
    }

    fn check_instant(&self, instant: DateTime<Utc>) -> Result<(), EphemerisError> {
        let open = self.first.and_time(NaiveTime::MIN).and_utc();
        let close = match self.last.checked_add_days(Days::new(1)) {
            Some(next) => next.and_time(NaiveTime::MIN).and_utc(),
            None => DateTime::<Utc>::MAX_UTC,
        };
        if instant < open || instant > close {
            return Err(EphemerisError::OutOfRange {
                instant,
                first: self.first,
                last: self.last,
            });
        }
        Ok(())
    }
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn sun_position(&self, instant: DateTime<Utc>) -> Result<SunPosition, EphemerisError> {
        self.check_instant(instant)?;
        let t = time::julian_centuries(time::julian_ephemeris_day(instant));
        Ok(sun::sun_position(t))
    }

    fn moon_position(&self, instant: DateTime<Utc>) -> Result<MoonPosition, EphemerisError> {
        self.check_instant(instant)?;
        let t = time::julian_centuries(time::julian_ephemeris_day(instant));
        Ok(moon::moon_position(t))
    }

    fn validity(&self) -> (NaiveDate, NaiveDate) {
        (self.first, self.last)
    }
}
