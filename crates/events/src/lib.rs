//! Selene event derivation: one lunar record per civil day.

mod config;
mod eclipse;
mod error;
mod phase;
mod record;
mod riseset;

use chrono::{Days, NaiveDate, NaiveTime, TimeDelta};
use selene_ephemeris::Ephemeris;
use tracing::{debug, info};

pub use config::DeriverConfig;
pub use error::EventError;
pub use phase::{Phase, illumination_pct};
pub use record::{DailyLunarRecord, EclipseEvent, EclipseKind, Visibility};

/// Derives one record per calendar date over `[start, start + days)`.
///
/// Records come back in chronological order with no gaps or duplicates.
/// Phase, illumination, and the supermoon distance are evaluated at the
/// 12:00 UTC reference instant of each day; rise/set and eclipse events
/// come from full-day scans. The whole span is validated against the
/// provider before any record is derived, so a failure never leaves
/// partial output.
///
/// # Errors
///
/// Returns [`EventError::InvalidConfig`] if the configuration fails
/// validation, [`EventError::EmptySpan`] if `days` is zero, and
/// [`EventError::Ephemeris`] if the span leaves the provider's validity
/// window.
#[tracing::instrument(skip(eph, config))]
pub fn derive_span(
    eph: &dyn Ephemeris,
    config: &DeriverConfig,
    start: NaiveDate,
    days: usize,
) -> Result<Vec<DailyLunarRecord>, EventError> {
    // Step 1: Validate inputs before touching the provider.
    config.validate()?;
    if days == 0 {
        return Err(EventError::EmptySpan);
    }

    // Step 2: Reject out-of-validity spans up front.
    eph.check_span(start, days)?;

    // Step 3: Derive day by day.
    let mut records = Vec::with_capacity(days);
    for offset in 0..days {
        let date = start
            .checked_add_days(Days::new(offset as u64))
            .expect("span checked against the validity window");
        let record = derive_day(eph, config, date)?;
        debug!(%date, phase = record.phase().name(), "derived record");
        records.push(record);
    }

    info!(%start, n_records = records.len(), "span derived");
    Ok(records)
}

/// Derives the record for a single civil day.
fn derive_day(
    eph: &dyn Ephemeris,
    config: &DeriverConfig,
    date: NaiveDate,
) -> Result<DailyLunarRecord, EventError> {
    let noon = date.and_time(NaiveTime::MIN).and_utc() + TimeDelta::hours(12);
    let sun = eph.sun_position(noon)?;
    let moon = eph.moon_position(noon)?;

    let elongation = (moon.apparent_longitude_deg - sun.apparent_longitude_deg).rem_euclid(360.0);
    let phase = Phase::from_elongation(elongation);
    let illumination = illumination_pct(sun, moon);

    let visibility = riseset::classify_day(eph, config, date)?;

    let eclipse = if phase == Phase::Full {
        eclipse::detect(eph, config, date)?
    } else {
        None
    };
    let supermoon = phase == Phase::Full && moon.distance_km <= config.supermoon_km();

    DailyLunarRecord::new(date, phase, illumination, visibility, eclipse, supermoon)
}
