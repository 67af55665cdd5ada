//! Geocentric solar position from the low-precision series.
//!
//! Good to about 0.01 degrees in longitude over the supported span, which
//! is far below the 45-degree phase bin width downstream.

use crate::time::normalize_degrees;

/// Kilometres per astronomical unit.
pub const AU_KM: f64 = 149_597_870.7;

/// Solar radius in kilometres.
pub const SUN_RADIUS_KM: f64 = 696_000.0;

/// Geocentric solar position at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Apparent ecliptic longitude in degrees, `[0, 360)`.
    pub apparent_longitude_deg: f64,
    /// Earth-Sun distance in astronomical units.
    pub distance_au: f64,
}

impl SunPosition {
    /// Earth-Sun distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_au * AU_KM
    }

    /// Solar semidiameter in degrees as seen from Earth.
    pub fn semidiameter_deg(&self) -> f64 {
        (SUN_RADIUS_KM / self.distance_km()).asin().to_degrees()
    }

    /// Equatorial horizontal parallax of the Sun in degrees.
    pub fn horizontal_parallax_deg(&self) -> f64 {
        (crate::moon::EARTH_RADIUS_KM / self.distance_km()).asin().to_degrees()
    }
}

/// Computes the Sun's apparent geocentric position for Julian centuries `t`
/// since J2000.0 (TT scale).
pub(crate) fn sun_position(t: f64) -> SunPosition {
    // Geometric mean longitude and mean anomaly.
    let l0 = 280.46646 + 36_000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.0001537 * t * t).to_radians();

    // Eccentricity of Earth's orbit.
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    // Equation of centre.
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_longitude = l0 + c;
    let true_anomaly = m + c.to_radians();

    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    // Apparent longitude: correct for nutation and aberration.
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = true_longitude - 0.00569 - 0.00478 * omega.sin();

    SunPosition {
        apparent_longitude_deg: normalize_degrees(apparent),
        distance_au,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn position_1992_oct_13() {
        // 1992 October 13.0 TD = JDE 2448908.5:
        // apparent longitude 199.90895 degrees, distance 0.99766 AU.
        let t = (2_448_908.5 - 2_451_545.0) / 36_525.0;
        let pos = sun_position(t);
        assert_abs_diff_eq!(pos.apparent_longitude_deg, 199.90895, epsilon = 3e-4);
        assert_abs_diff_eq!(pos.distance_au, 0.99766, epsilon = 1e-5);
    }

    #[test]
    fn distance_near_perihelion() {
        // Early January: Earth close to perihelion, under 0.9850 AU.
        // 2024 Jan 3, 0h TT is JDE 2460312.5.
        let t = (2_460_312.5 - 2_451_545.0) / 36_525.0;
        let pos = sun_position(t);
        assert!(pos.distance_au < 0.985, "got {}", pos.distance_au);
        assert!(pos.distance_au > 0.982, "got {}", pos.distance_au);
    }

    #[test]
    fn distance_near_aphelion() {
        // Early July: Earth close to aphelion, above 1.0160 AU.
        // 2024 Jul 5, 0h TT is JDE 2460496.5.
        let t = (2_460_496.5 - 2_451_545.0) / 36_525.0;
        let pos = sun_position(t);
        assert!(pos.distance_au > 1.016, "got {}", pos.distance_au);
        assert!(pos.distance_au < 1.018, "got {}", pos.distance_au);
    }

    #[test]
    fn longitude_near_zero_at_march_equinox() {
        // 2024 March equinox: Mar 20, 03:06 UT. JDE about 2460389.63.
        let t = (2_460_389.63 - 2_451_545.0) / 36_525.0;
        let pos = sun_position(t);
        let dist_from_zero = pos.apparent_longitude_deg.min(360.0 - pos.apparent_longitude_deg);
        assert!(dist_from_zero < 0.05, "longitude {}", pos.apparent_longitude_deg);
    }

    #[test]
    fn semidiameter_about_a_quarter_degree() {
        let pos = SunPosition {
            apparent_longitude_deg: 0.0,
            distance_au: 1.0,
        };
        assert_abs_diff_eq!(pos.semidiameter_deg(), 0.2666, epsilon = 5e-4);
    }

    #[test]
    fn solar_parallax_about_nine_arcseconds() {
        let pos = SunPosition {
            apparent_longitude_deg: 0.0,
            distance_au: 1.0,
        };
        assert_abs_diff_eq!(pos.horizontal_parallax_deg() * 3600.0, 8.8, epsilon = 0.1);
    }
}
