//! Daily lunar record container.

use chrono::{NaiveDate, NaiveTime};

use crate::error::EventError;
use crate::phase::Phase;

/// How the Moon relates to the local horizon over one civil day.
///
/// A day either records at least one horizon crossing, or the Moon never
/// crosses at all and one of the all-day flags applies. The variants make
/// the flags mutually exclusive with any recorded time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// At least one horizon crossing occurred. A lone rise or set happens
    /// roughly once per lunation when the other crossing falls on a
    /// neighbouring day.
    Crossings {
        /// Ascending crossing, UTC.
        rise: Option<NaiveTime>,
        /// Descending crossing, UTC.
        set: Option<NaiveTime>,
    },
    /// The Moon stayed above the horizon all day.
    UpAllDay,
    /// The Moon stayed below the horizon all day.
    DownAllDay,
}

/// Lunar eclipse classification by which shadow the disk enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EclipseKind {
    /// Disk touches only the outer, partial shadow.
    Penumbral,
    /// Disk partially inside the umbra.
    Partial,
    /// Disk fully inside the umbra.
    Total,
}

impl EclipseKind {
    /// Display name as persisted in the table.
    pub fn name(self) -> &'static str {
        match self {
            Self::Penumbral => "Penumbral",
            Self::Partial => "Partial",
            Self::Total => "Total",
        }
    }

    /// Parses a persisted display name back to a kind.
    pub fn from_name(name: &str) -> Result<Self, EventError> {
        match name {
            "Penumbral" => Ok(Self::Penumbral),
            "Partial" => Ok(Self::Partial),
            "Total" => Ok(Self::Total),
            other => Err(EventError::UnknownEclipseKind {
                name: other.to_string(),
            }),
        }
    }
}

/// A lunar eclipse observed within one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipseEvent {
    /// Deepest shadow the disk reaches.
    pub kind: EclipseKind,
    /// Fractional shadow coverage of the disk, 0..=100.
    pub depth_pct: f64,
    /// UTC time of maximum eclipse.
    pub instant: NaiveTime,
}

/// One derived record per calendar date.
///
/// Constructed only through [`DailyLunarRecord::new`], which enforces the
/// data-model invariants; records are immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyLunarRecord {
    /// Civil date, UTC.
    date: NaiveDate,
    /// Phase bin at the reference instant.
    phase: Phase,
    /// Illuminated disk fraction, 0..=100.
    illumination_pct: f64,
    /// Horizon behaviour over the day.
    visibility: Visibility,
    /// Eclipse at this date, if one peaks within the day.
    eclipse: Option<EclipseEvent>,
    /// Full moon within the perigee distance threshold.
    supermoon: bool,
}

impl DailyLunarRecord {
    /// Creates a new record after validating the invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidRecord`] if any of the following fail:
    /// - `illumination_pct` outside `[0, 100]`
    /// - no horizon crossing recorded without an all-day flag
    /// - eclipse depth outside `[0, 100]`
    /// - supermoon flagged on a non-Full phase
    pub fn new(
        date: NaiveDate,
        phase: Phase,
        illumination_pct: f64,
        visibility: Visibility,
        eclipse: Option<EclipseEvent>,
        supermoon: bool,
    ) -> Result<Self, EventError> {
        let invalid = |reason: String| EventError::InvalidRecord { date, reason };

        if !(0.0..=100.0).contains(&illumination_pct) {
            return Err(invalid(format!(
                "illumination {illumination_pct} outside [0, 100]"
            )));
        }

        if visibility == (Visibility::Crossings { rise: None, set: None }) {
            return Err(invalid(
                "no horizon crossing recorded; use an all-day flag".to_string(),
            ));
        }

        if let Some(event) = &eclipse
            && !(0.0..=100.0).contains(&event.depth_pct)
        {
            return Err(invalid(format!(
                "eclipse depth {} outside [0, 100]",
                event.depth_pct
            )));
        }

        if supermoon && phase != Phase::Full {
            return Err(invalid(format!(
                "supermoon flagged on phase {:?}",
                phase.name()
            )));
        }

        Ok(Self {
            date,
            phase,
            illumination_pct,
            visibility,
            eclipse,
            supermoon,
        })
    }

    /// Returns the civil date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the phase bin.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the illuminated disk fraction, 0..=100.
    pub fn illumination_pct(&self) -> f64 {
        self.illumination_pct
    }

    /// Returns the horizon behaviour.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns the moonrise time, if one occurred.
    pub fn moonrise(&self) -> Option<NaiveTime> {
        match self.visibility {
            Visibility::Crossings { rise, .. } => rise,
            _ => None,
        }
    }

    /// Returns the moonset time, if one occurred.
    pub fn moonset(&self) -> Option<NaiveTime> {
        match self.visibility {
            Visibility::Crossings { set, .. } => set,
            _ => None,
        }
    }

    /// Returns `true` if the Moon stayed above the horizon all day.
    pub fn up_all_day(&self) -> bool {
        self.visibility == Visibility::UpAllDay
    }

    /// Returns `true` if the Moon stayed below the horizon all day.
    pub fn down_all_day(&self) -> bool {
        self.visibility == Visibility::DownAllDay
    }

    /// Returns the eclipse event, if one peaks within the day.
    pub fn eclipse(&self) -> Option<&EclipseEvent> {
        self.eclipse.as_ref()
    }

    /// Returns `true` if this is a full moon within the perigee threshold.
    pub fn supermoon(&self) -> bool {
        self.supermoon
    }
}
