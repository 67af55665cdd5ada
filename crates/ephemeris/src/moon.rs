//! Geocentric lunar position from the truncated ELP-2000/82 series.
//!
//! The 60-term periodic series keeps the longitude within a few
//! arcseconds of the full theory, distance within a few kilometres.

use crate::coords::nutation_in_longitude_deg;
use crate::time::normalize_degrees;

/// Earth equatorial radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Lunar radius in kilometres.
pub const MOON_RADIUS_KM: f64 = 1737.4;

/// Geocentric lunar position at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Apparent ecliptic longitude in degrees, `[0, 360)`.
    pub apparent_longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Earth-Moon distance (centre to centre) in kilometres.
    pub distance_km: f64,
}

impl MoonPosition {
    /// Equatorial horizontal parallax in degrees.
    pub fn horizontal_parallax_deg(&self) -> f64 {
        (EARTH_RADIUS_KM / self.distance_km).asin().to_degrees()
    }

    /// Lunar semidiameter in degrees as seen from Earth.
    pub fn semidiameter_deg(&self) -> f64 {
        (MOON_RADIUS_KM / self.distance_km).asin().to_degrees()
    }
}

// ---------------------------------------------------------------------------
// Periodic terms
// ---------------------------------------------------------------------------

/// Longitude and distance series: multiples of (D, M, M', F), then the
/// sine coefficient for longitude (1e-6 degree) and the cosine
/// coefficient for distance (1e-3 km).
#[rustfmt::skip]
const LR_TERMS: [(i8, i8, i8, i8, i32, i32); 60] = [
    (0, 0, 1, 0, 6_288_774, -20_905_355),
    (2, 0, -1, 0, 1_274_027, -3_699_111),
    (2, 0, 0, 0, 658_314, -2_955_968),
    (0, 0, 2, 0, 213_618, -569_925),
    (0, 1, 0, 0, -185_116, 48_888),
    (0, 0, 0, 2, -114_332, -3_149),
    (2, 0, -2, 0, 58_793, 246_158),
    (2, -1, -1, 0, 57_066, -152_138),
    (2, 0, 1, 0, 53_322, -170_733),
    (2, -1, 0, 0, 45_758, -204_586),
    (0, 1, -1, 0, -40_923, -129_620),
    (1, 0, 0, 0, -34_720, 108_743),
    (0, 1, 1, 0, -30_383, 104_755),
    (2, 0, 0, -2, 15_327, 10_321),
    (0, 0, 1, 2, -12_528, 0),
    (0, 0, 1, -2, 10_980, 79_661),
    (4, 0, -1, 0, 10_675, -34_782),
    (0, 0, 3, 0, 10_034, -23_210),
    (4, 0, -2, 0, 8_548, -21_636),
    (2, 1, -1, 0, -7_888, 24_208),
    (2, 1, 0, 0, -6_766, 30_824),
    (1, 0, -1, 0, -5_163, -8_379),
    (1, 1, 0, 0, 4_987, -16_675),
    (2, -1, 1, 0, 4_036, -12_831),
    (2, 0, 2, 0, 3_994, -10_445),
    (4, 0, 0, 0, 3_861, -11_650),
    (2, 0, -3, 0, 3_665, 14_403),
    (0, 1, -2, 0, -2_689, -7_003),
    (2, 0, -1, 2, -2_602, 0),
    (2, -1, -2, 0, 2_390, 10_056),
    (1, 0, 1, 0, -2_348, 6_322),
    (2, -2, 0, 0, 2_236, -9_884),
    (0, 1, 2, 0, -2_120, 5_751),
    (0, 2, 0, 0, -2_069, 0),
    (2, -2, -1, 0, 2_048, -4_950),
    (2, 0, 1, -2, -1_773, 4_130),
    (2, 0, 0, 2, -1_595, 0),
    (4, -1, -1, 0, 1_215, -3_958),
    (0, 0, 2, 2, -1_110, 0),
    (3, 0, -1, 0, -892, 3_258),
    (2, 1, 1, 0, -810, 2_616),
    (4, -1, -2, 0, 759, -1_897),
    (0, 2, -1, 0, -713, -2_117),
    (2, 2, -1, 0, -700, 2_354),
    (2, 1, -2, 0, 691, 0),
    (2, -1, 0, -2, 596, 0),
    (4, 0, 1, 0, 549, -1_423),
    (0, 0, 4, 0, 537, -1_117),
    (4, -1, 0, 0, 520, -1_571),
    (1, 0, -2, 0, -487, -1_739),
    (2, 1, 0, -2, -399, 0),
    (0, 0, 2, -2, -381, -4_421),
    (1, 1, 1, 0, 351, 0),
    (3, 0, -2, 0, -340, 0),
    (4, 0, -3, 0, 330, 0),
    (2, -1, 2, 0, 327, 0),
    (0, 2, 1, 0, -323, 1_165),
    (1, 1, -1, 0, 299, 0),
    (2, 0, 3, 0, 294, 0),
    (2, 0, -1, -2, 0, 8_752),
];

/// Latitude series: multiples of (D, M, M', F) and the sine coefficient
/// (1e-6 degree).
#[rustfmt::skip]
const B_TERMS: [(i8, i8, i8, i8, i32); 60] = [
    (0, 0, 0, 1, 5_128_122),
    (0, 0, 1, 1, 280_602),
    (0, 0, 1, -1, 277_693),
    (2, 0, 0, -1, 173_237),
    (2, 0, -1, 1, 55_413),
    (2, 0, -1, -1, 46_271),
    (2, 0, 0, 1, 32_573),
    (0, 0, 2, 1, 17_198),
    (2, 0, 1, -1, 9_266),
    (0, 0, 2, -1, 8_822),
    (2, -1, 0, -1, 8_216),
    (2, 0, -2, -1, 4_324),
    (2, 0, 1, 1, 4_200),
    (2, 1, 0, -1, -3_359),
    (2, -1, -1, 1, 2_463),
    (2, -1, 0, 1, 2_211),
    (2, -1, -1, -1, 2_065),
    (0, 1, -1, -1, -1_870),
    (4, 0, -1, -1, 1_828),
    (0, 1, 0, 1, -1_794),
    (0, 0, 0, 3, -1_749),
    (0, 1, -1, 1, -1_565),
    (1, 0, 0, 1, -1_491),
    (0, 1, 1, 1, -1_475),
    (0, 1, 1, -1, -1_410),
    (0, 1, 0, -1, -1_344),
    (1, 0, 0, -1, -1_335),
    (0, 0, 3, 1, 1_107),
    (4, 0, 0, -1, 1_021),
    (4, 0, -1, 1, 833),
    (0, 0, 1, -3, 777),
    (4, 0, -2, 1, 671),
    (2, 0, 0, -3, 607),
    (2, 0, 2, -1, 596),
    (2, -1, 1, -1, 491),
    (2, 0, -2, 1, -451),
    (0, 0, 3, -1, 439),
    (2, 0, 2, 1, 422),
    (2, 0, -3, -1, 421),
    (2, 1, -1, 1, -366),
    (2, 1, 0, 1, -351),
    (4, 0, 0, 1, 331),
    (2, -1, 1, 1, 315),
    (2, -2, 0, -1, 302),
    (0, 0, 1, 3, -283),
    (2, 1, 1, -1, -229),
    (1, 1, 0, -1, 223),
    (1, 1, 0, 1, 223),
    (0, 1, -2, -1, -220),
    (2, 1, -1, -1, -220),
    (1, 0, 1, 1, -185),
    (2, -1, -2, -1, 181),
    (0, 1, 2, 1, -177),
    (4, 0, -2, -1, 176),
    (4, -1, -1, -1, 166),
    (1, 0, 1, -1, -164),
    (4, 0, 1, -1, 132),
    (1, 0, -1, -1, -119),
    (4, -1, 0, -1, 115),
    (2, -2, 0, 1, 107),
];

// ---------------------------------------------------------------------------
// Fundamental arguments
// ---------------------------------------------------------------------------

struct FundamentalArgs {
    /// Mean longitude, degrees.
    lp: f64,
    /// Mean elongation from the Sun, degrees.
    d: f64,
    /// Solar mean anomaly, degrees.
    m: f64,
    /// Lunar mean anomaly, degrees.
    mp: f64,
    /// Argument of latitude, degrees.
    f: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    /// Eccentricity damping for terms involving the solar anomaly.
    e: f64,
}

fn fundamental_args(t: f64) -> FundamentalArgs {
    let lp = 218.316_447_7
        + 481_267.881_234_21 * t
        - 0.001_578_6 * t * t
        + t * t * t / 538_841.0
        - t * t * t * t / 65_194_000.0;
    let d = 297.850_192_1
        + 445_267.111_403_4 * t
        - 0.001_881_9 * t * t
        + t * t * t / 545_868.0
        - t * t * t * t / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t
        + t * t * t / 24_490_000.0;
    let mp = 134.963_396_4
        + 477_198.867_505_5 * t
        + 0.008_741_4 * t * t
        + t * t * t / 69_699.0
        - t * t * t * t / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t
        - 0.003_653_9 * t * t
        - t * t * t / 3_526_000.0
        + t * t * t * t / 863_310_000.0;

    FundamentalArgs {
        lp: normalize_degrees(lp),
        d: normalize_degrees(d),
        m: normalize_degrees(m),
        mp: normalize_degrees(mp),
        f: normalize_degrees(f),
        a1: normalize_degrees(119.75 + 131.849 * t),
        a2: normalize_degrees(53.09 + 479_264.290 * t),
        a3: normalize_degrees(313.45 + 481_266.484 * t),
        e: 1.0 - 0.002_516 * t - 0.000_007_4 * t * t,
    }
}

/// Eccentricity factor for a term: E for each power of the solar anomaly.
fn anomaly_damping(e: f64, m_mult: i8) -> f64 {
    match m_mult.abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Computes the Moon's apparent geocentric position for Julian centuries
/// `t` since J2000.0 (TT scale).
pub(crate) fn moon_position(t: f64) -> MoonPosition {
    let args = fundamental_args(t);

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(d, m, mp, f, sl, sr) in &LR_TERMS {
        let arg = (f64::from(d) * args.d
            + f64::from(m) * args.m
            + f64::from(mp) * args.mp
            + f64::from(f) * args.f)
            .to_radians();
        let damp = anomaly_damping(args.e, m);
        sum_l += f64::from(sl) * damp * arg.sin();
        sum_r += f64::from(sr) * damp * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(d, m, mp, f, sb) in &B_TERMS {
        let arg = (f64::from(d) * args.d
            + f64::from(m) * args.m
            + f64::from(mp) * args.mp
            + f64::from(f) * args.f)
            .to_radians();
        sum_b += f64::from(sb) * anomaly_damping(args.e, m) * arg.sin();
    }

    // Additive corrections for Venus (A1), Jupiter (A2) and flattening.
    sum_l += 3_958.0 * args.a1.to_radians().sin()
        + 1_962.0 * (args.lp - args.f).to_radians().sin()
        + 318.0 * args.a2.to_radians().sin();
    sum_b += -2_235.0 * args.lp.to_radians().sin()
        + 382.0 * args.a3.to_radians().sin()
        + 175.0 * (args.a1 - args.f).to_radians().sin()
        + 175.0 * (args.a1 + args.f).to_radians().sin()
        + 127.0 * (args.lp - args.mp).to_radians().sin()
        - 115.0 * (args.lp + args.mp).to_radians().sin();

    let longitude = args.lp + sum_l / 1e6 + nutation_in_longitude_deg(t);

    MoonPosition {
        apparent_longitude_deg: normalize_degrees(longitude),
        latitude_deg: sum_b / 1e6,
        distance_km: 385_000.56 + sum_r / 1e3,
    }
}
