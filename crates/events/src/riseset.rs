//! Moonrise and moonset from a daily altitude scan.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use selene_ephemeris::{
    Ephemeris, altitude_deg, ecliptic_to_equatorial, gmst_degrees, julian_centuries, julian_day,
    julian_ephemeris_day, mean_obliquity_deg,
};

use crate::config::DeriverConfig;
use crate::error::EventError;
use crate::record::Visibility;

const DAY_SECONDS: i64 = 86_400;

/// Standard rise/set altitude: parallax lift minus 34 arcmin refraction.
fn standard_altitude_deg(parallax_deg: f64) -> f64 {
    0.7275 * parallax_deg - 34.0 / 60.0
}

/// Lunar altitude above the standard rise/set altitude at `instant`,
/// degrees. Zero crossings of this function are rise/set events.
fn altitude_above_standard(
    eph: &dyn Ephemeris,
    config: &DeriverConfig,
    instant: DateTime<Utc>,
) -> Result<f64, EventError> {
    let moon = eph.moon_position(instant)?;
    let t = julian_centuries(julian_ephemeris_day(instant));
    let equatorial = ecliptic_to_equatorial(
        moon.apparent_longitude_deg,
        moon.latitude_deg,
        mean_obliquity_deg(t),
    );
    let hour_angle =
        gmst_degrees(julian_day(instant)) + config.longitude_deg() - equatorial.right_ascension_deg;
    let altitude = altitude_deg(
        config.latitude_deg(),
        equatorial.declination_deg,
        hour_angle,
    );
    Ok(altitude - standard_altitude_deg(moon.horizontal_parallax_deg()))
}

/// Narrows a sign change to the second. `lo` and `hi` are offsets from
/// midnight with differing above-horizon state.
fn refine_crossing(
    eph: &dyn Ephemeris,
    config: &DeriverConfig,
    midnight: DateTime<Utc>,
    mut lo: i64,
    mut hi: i64,
    above_lo: bool,
) -> Result<i64, EventError> {
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let above = altitude_above_standard(eph, config, midnight + TimeDelta::seconds(mid))? >= 0.0;
        if above == above_lo {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(hi)
}

/// Classifies one civil day: rise/set crossings, or an all-day flag when
/// the Moon never crosses the horizon.
///
/// Scans the day at the configured step, refines each sign change by
/// bisection. Days without any crossing take their flag from the altitude
/// sign at 12:00 UTC.
pub(crate) fn classify_day(
    eph: &dyn Ephemeris,
    config: &DeriverConfig,
    date: NaiveDate,
) -> Result<Visibility, EventError> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let step = i64::from(config.scan_step_min()) * 60;

    let mut rise: Option<NaiveTime> = None;
    let mut set: Option<NaiveTime> = None;

    let mut prev_offset = 0_i64;
    let mut prev_above = altitude_above_standard(eph, config, midnight)? >= 0.0;

    while prev_offset < DAY_SECONDS {
        let offset = (prev_offset + step).min(DAY_SECONDS);
        let above =
            altitude_above_standard(eph, config, midnight + TimeDelta::seconds(offset))? >= 0.0;

        if above != prev_above {
            let crossing =
                refine_crossing(eph, config, midnight, prev_offset, offset, prev_above)?;
            // A crossing refined onto the next midnight belongs to this
            // day's closing second.
            let secs = crossing.min(DAY_SECONDS - 1) as u32;
            let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
                .expect("seconds below 86400 are always a valid time");
            // Keep the first crossing of each kind.
            if above && rise.is_none() {
                rise = Some(time);
            } else if !above && set.is_none() {
                set = Some(time);
            }
        }

        prev_offset = offset;
        prev_above = above;
    }

    if rise.is_none() && set.is_none() {
        let noon = midnight + TimeDelta::hours(12);
        let above = altitude_above_standard(eph, config, noon)? >= 0.0;
        return Ok(if above {
            Visibility::UpAllDay
        } else {
            Visibility::DownAllDay
        });
    }

    Ok(Visibility::Crossings { rise, set })
}
