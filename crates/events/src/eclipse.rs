//! Lunar eclipse detection on full-moon days.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use selene_ephemeris::Ephemeris;

use crate::config::DeriverConfig;
use crate::error::EventError;
use crate::record::{EclipseEvent, EclipseKind};

const DAY_SECONDS: i64 = 86_400;

/// Angular separation between the Moon's centre and the centre of
/// Earth's shadow (the anti-solar point), degrees.
fn shadow_separation_deg(eph: &dyn Ephemeris, instant: DateTime<Utc>) -> Result<f64, EventError> {
    let sun = eph.sun_position(instant)?;
    let moon = eph.moon_position(instant)?;
    let shadow_longitude = sun.apparent_longitude_deg + 180.0;
    let dl = (moon.apparent_longitude_deg - shadow_longitude).to_radians();
    let cos_sigma = moon.latitude_deg.to_radians().cos() * dl.cos();
    Ok(cos_sigma.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Narrows the separation minimum inside `[lo, hi]` (offsets from
/// midnight) by ternary search, to about a second.
fn refine_minimum(
    eph: &dyn Ephemeris,
    midnight: DateTime<Utc>,
    mut lo: i64,
    mut hi: i64,
) -> Result<i64, EventError> {
    while hi - lo > 2 {
        let third = (hi - lo) / 3;
        let m1 = lo + third;
        let m2 = hi - third;
        let s1 = shadow_separation_deg(eph, midnight + TimeDelta::seconds(m1))?;
        let s2 = shadow_separation_deg(eph, midnight + TimeDelta::seconds(m2))?;
        if s1 < s2 {
            hi = m2;
        } else {
            lo = m1;
        }
    }
    Ok(lo + (hi - lo) / 2)
}

/// Checks one civil day for a lunar eclipse.
///
/// Scans the shadow separation across the day; a minimum sitting on the
/// day boundary peaks on a neighbouring date and is not flagged here,
/// which keeps one eclipse from appearing on two consecutive records.
/// The caller restricts this to full-moon days.
pub(crate) fn detect(
    eph: &dyn Ephemeris,
    config: &DeriverConfig,
    date: NaiveDate,
) -> Result<Option<EclipseEvent>, EventError> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let step = i64::from(config.scan_step_min()) * 60;

    let mut offsets = Vec::with_capacity((DAY_SECONDS / step) as usize + 2);
    let mut offset = 0_i64;
    while offset < DAY_SECONDS {
        offsets.push(offset);
        offset += step;
    }
    offsets.push(DAY_SECONDS);

    let mut min_index = 0;
    let mut min_separation = f64::INFINITY;
    for (i, &o) in offsets.iter().enumerate() {
        let separation = shadow_separation_deg(eph, midnight + TimeDelta::seconds(o))?;
        if separation < min_separation {
            min_separation = separation;
            min_index = i;
        }
    }

    if min_index == 0 || min_index == offsets.len() - 1 {
        return Ok(None);
    }

    let best = refine_minimum(
        eph,
        midnight,
        offsets[min_index - 1],
        offsets[min_index + 1],
    )?;
    let instant = midnight + TimeDelta::seconds(best);

    let sun = eph.sun_position(instant)?;
    let moon = eph.moon_position(instant)?;
    let separation = shadow_separation_deg(eph, instant)?;

    // Shadow cone radii at the Moon's distance, with the atmospheric
    // enlargement factor applied.
    let f = config.shadow_enlargement();
    let parallax_sum = moon.horizontal_parallax_deg() + sun.horizontal_parallax_deg();
    let penumbral_radius = f * (parallax_sum + sun.semidiameter_deg());
    let umbral_radius = f * (parallax_sum - sun.semidiameter_deg());
    let moon_radius = moon.semidiameter_deg();

    let kind = if separation <= umbral_radius - moon_radius {
        EclipseKind::Total
    } else if separation <= umbral_radius + moon_radius {
        EclipseKind::Partial
    } else if separation <= penumbral_radius + moon_radius {
        EclipseKind::Penumbral
    } else {
        return Ok(None);
    };

    // Depth: shadow coverage of the disk; umbral for partial/total,
    // penumbral for penumbral-only.
    let shadow_radius = match kind {
        EclipseKind::Penumbral => penumbral_radius,
        EclipseKind::Partial | EclipseKind::Total => umbral_radius,
    };
    let magnitude = (shadow_radius + moon_radius - separation) / (2.0 * moon_radius);
    let depth_pct = (magnitude * 100.0).clamp(0.0, 100.0);

    let time = NaiveTime::from_num_seconds_from_midnight_opt(best as u32, 0)
        .expect("seconds below 86400 are always a valid time");

    Ok(Some(EclipseEvent {
        kind,
        depth_pct,
        instant: time,
    }))
}
