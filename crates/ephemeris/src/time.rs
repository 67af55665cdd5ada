//! Time-scale conversions: Julian Day, dynamical time, and sidereal time.

use chrono::{DateTime, Datelike, Utc};

/// Julian Day of the standard epoch J2000.0 (2000 January 1.5 TT).
pub const J2000: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970 January 1.0 UT).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Converts a UTC instant to the Julian Day on the UT scale.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + instant.timestamp_micros() as f64 / 86_400e6
}

/// Difference TT - UT in seconds for the given calendar year and month.
///
/// Piecewise polynomial fit (Espenak & Meeus) covering 1900 through the
/// mid-21st century. The month enters through the decimal year
/// `y = year + (month - 0.5) / 12`.
pub fn delta_t_seconds(year: i32, month: u32) -> f64 {
    let y = f64::from(year) + (f64::from(month) - 0.5) / 12.0;

    if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t.powi(3) - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    }
}

/// Converts a UTC instant to the Julian Ephemeris Day (TT scale).
pub fn julian_ephemeris_day(instant: DateTime<Utc>) -> f64 {
    let dt = delta_t_seconds(instant.year(), instant.month());
    julian_day(instant) + dt / 86_400.0
}

/// Julian centuries elapsed since J2000.0 for the given Julian Day.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / 36_525.0
}

/// Greenwich mean sidereal time in degrees for a UT Julian Day.
///
/// Result is normalized to `[0, 360)`.
pub fn gmst_degrees(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    let theta = 280.46061837 + 360.98564736629 * (jd_ut - J2000) + 0.000387933 * t * t
        - t.powi(3) / 38_710_000.0;
    normalize_degrees(theta)
}

/// Reduces an angle in degrees to the range `[0, 360)`.
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use chrono::NaiveDate;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn julian_day_j2000() {
        // J2000.0 on the UT scale: 2000 Jan 1, 12:00 UT.
        let jd = julian_day(utc(2000, 1, 1, 12, 0, 0));
        assert_relative_eq!(jd, 2_451_545.0, epsilon = 1e-9);
    }

    #[test]
    fn julian_day_unix_epoch() {
        let jd = julian_day(utc(1970, 1, 1, 0, 0, 0));
        assert_relative_eq!(jd, 2_440_587.5, epsilon = 1e-9);
    }

    #[test]
    fn julian_day_1987_apr_10() {
        // Known value: 1987 April 10.0 = JD 2446895.5.
        let jd = julian_day(utc(1987, 4, 10, 0, 0, 0));
        assert_relative_eq!(jd, 2_446_895.5, epsilon = 1e-9);
    }

    #[test]
    fn julian_day_monotonic_sub_day() {
        let a = julian_day(utc(2024, 6, 1, 0, 0, 0));
        let b = julian_day(utc(2024, 6, 1, 6, 0, 0));
        assert_relative_eq!(b - a, 0.25, epsilon = 1e-9);
    }

    #[test]
    fn delta_t_2000() {
        // Fit value at the 1986-2005 segment origin.
        assert_abs_diff_eq!(delta_t_seconds(2000, 6), 63.9, epsilon = 0.2);
    }

    #[test]
    fn delta_t_1950() {
        // Observed TT-UT around 1950 was about 29 s.
        assert_abs_diff_eq!(delta_t_seconds(1950, 6), 29.1, epsilon = 0.5);
    }

    #[test]
    fn delta_t_1910() {
        // Early 20th century: about 10 s.
        assert_abs_diff_eq!(delta_t_seconds(1910, 6), 10.4, epsilon = 1.0);
    }

    #[test]
    fn delta_t_continuous_at_segment_joins() {
        // Adjacent segments should agree to within a second at the joins.
        for &year in &[1920, 1941, 1961, 1986, 2005, 2050] {
            let before = delta_t_seconds(year - 1, 12);
            let after = delta_t_seconds(year, 1);
            assert!(
                (before - after).abs() < 1.5,
                "delta-T jump of {} s at {year}",
                (before - after).abs()
            );
        }
    }

    #[test]
    fn ephemeris_day_exceeds_ut_day() {
        let instant = utc(2024, 6, 1, 12, 0, 0);
        let jd = julian_day(instant);
        let jde = julian_ephemeris_day(instant);
        // Delta-T is positive throughout the validity window.
        assert!(jde > jd);
        assert!((jde - jd) * 86_400.0 < 120.0, "delta-T above two minutes");
    }

    #[test]
    fn julian_centuries_j2000_is_zero() {
        assert_relative_eq!(julian_centuries(J2000), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn gmst_1987_apr_10() {
        // 1987 April 10, 0h UT: GMST = 13h 10m 46.3668s = 197.693195 degrees.
        let theta = gmst_degrees(2_446_895.5);
        assert_abs_diff_eq!(theta, 197.693195, epsilon = 1e-4);
    }

    #[test]
    fn gmst_in_range() {
        for k in 0..100 {
            let jd = 2_451_545.0 + f64::from(k) * 37.3;
            let theta = gmst_degrees(jd);
            assert!((0.0..360.0).contains(&theta), "GMST {theta} out of range");
        }
    }

    #[test]
    fn normalize_degrees_handles_negatives() {
        assert_relative_eq!(normalize_degrees(-30.0), 330.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_degrees(725.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_degrees(0.0), 0.0, epsilon = 1e-12);
    }
}
