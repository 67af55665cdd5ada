//! Lunar phase binning and disk illumination.

use selene_ephemeris::{MoonPosition, SunPosition};

use crate::error::EventError;

/// Named lunar phase, one of eight 45-degree elongation bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Elongation near 0 degrees.
    New,
    /// Elongation near 45 degrees.
    WaxingCrescent,
    /// Elongation near 90 degrees.
    FirstQuarter,
    /// Elongation near 135 degrees.
    WaxingGibbous,
    /// Elongation near 180 degrees.
    Full,
    /// Elongation near 225 degrees.
    WaningGibbous,
    /// Elongation near 270 degrees.
    LastQuarter,
    /// Elongation near 315 degrees.
    WaningCrescent,
}

impl Phase {
    /// All phases in cycle order, starting at New.
    pub const ALL: [Phase; 8] = [
        Phase::New,
        Phase::WaxingCrescent,
        Phase::FirstQuarter,
        Phase::WaxingGibbous,
        Phase::Full,
        Phase::WaningGibbous,
        Phase::LastQuarter,
        Phase::WaningCrescent,
    ];

    /// Classifies a Sun-Moon elongation in ecliptic longitude, degrees.
    ///
    /// Bins are centred on multiples of 45 degrees; an elongation on a
    /// bin boundary rounds to the nearest centre, never floor or ceil.
    pub fn from_elongation(elongation_deg: f64) -> Phase {
        let bin = (elongation_deg.rem_euclid(360.0) / 45.0).round() as usize % 8;
        Phase::ALL[bin]
    }

    /// Display name as persisted in the table.
    pub fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Emoji glyph for presentation rows.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::New => "\u{1F311}",
            Self::WaxingCrescent => "\u{1F312}",
            Self::FirstQuarter => "\u{1F313}",
            Self::WaxingGibbous => "\u{1F314}",
            Self::Full => "\u{1F315}",
            Self::WaningGibbous => "\u{1F316}",
            Self::LastQuarter => "\u{1F317}",
            Self::WaningCrescent => "\u{1F318}",
        }
    }

    /// Parses a persisted display name back to a phase.
    pub fn from_name(name: &str) -> Result<Phase, EventError> {
        Phase::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| EventError::UnknownPhase {
                name: name.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Illumination
// ---------------------------------------------------------------------------

/// Geocentric elongation of the Moon from the Sun, radians.
fn true_elongation(sun: SunPosition, moon: MoonPosition) -> f64 {
    let dl = (moon.apparent_longitude_deg - sun.apparent_longitude_deg).to_radians();
    let cos_psi = moon.latitude_deg.to_radians().cos() * dl.cos();
    cos_psi.clamp(-1.0, 1.0).acos()
}

/// Illuminated fraction of the lunar disk as a percentage.
///
/// The phase angle follows from the true elongation via
/// `tan i = R sin(psi) / (Delta - R cos(psi))`, then `k = (1 + cos i)/2`.
/// Symmetric around new and full, monotonic within each half-cycle.
pub fn illumination_pct(sun: SunPosition, moon: MoonPosition) -> f64 {
    let psi = true_elongation(sun, moon);
    let r = sun.distance_km();
    let phase_angle = (r * psi.sin()).atan2(moon.distance_km - r * psi.cos());
    (1.0 + phase_angle.cos()) / 2.0 * 100.0
}
