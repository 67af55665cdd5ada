//! Coordinate transforms between ecliptic, equatorial, and horizontal frames.

use crate::time::normalize_degrees;

/// Position on the celestial sphere in the equatorial frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoord {
    /// Right ascension in degrees, `[0, 360)`.
    pub right_ascension_deg: f64,
    /// Declination in degrees, `[-90, 90]`.
    pub declination_deg: f64,
}

/// Mean obliquity of the ecliptic in degrees for Julian centuries `t`
/// since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_111 - 0.013_004_167 * t - 1.638_889e-7 * t * t + 5.036_111e-7 * t.powi(3)
}

/// Nutation in longitude in degrees, abridged to the four largest terms.
pub(crate) fn nutation_in_longitude_deg(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();
    (-17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin())
        / 3600.0
}

/// Converts geocentric ecliptic coordinates to equatorial coordinates.
pub fn ecliptic_to_equatorial(
    longitude_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> EquatorialCoord {
    let lambda = longitude_deg.to_radians();
    let beta = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let alpha = (lambda.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lambda.cos());
    let delta = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin()).asin();

    EquatorialCoord {
        right_ascension_deg: normalize_degrees(alpha.to_degrees()),
        declination_deg: delta.to_degrees(),
    }
}

/// Geocentric altitude in degrees of a body at hour angle `hour_angle_deg`
/// for an observer at geographic latitude `latitude_deg`.
pub fn altitude_deg(latitude_deg: f64, declination_deg: f64, hour_angle_deg: f64) -> f64 {
    let phi = latitude_deg.to_radians();
    let delta = declination_deg.to_radians();
    let h = hour_angle_deg.to_radians();
    (phi.sin() * delta.sin() + phi.cos() * delta.cos() * h.cos()).asin().to_degrees()
}
