//! Output structures for the 30-day report.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::ReportError;

/// Top-level report output.
#[derive(Debug, Serialize)]
pub struct LunarReport {
    /// Window metadata.
    pub window: WindowMeta,
    /// Headline event counts.
    pub counts: EventCounts,
    /// Illumination aggregates over the window.
    pub illumination: IlluminationSummary,
    /// Days per phase, all eight phases in cycle order.
    pub phase_distribution: Vec<PhaseCount>,
    /// All-day visibility tallies.
    pub visibility: VisibilitySummary,
    /// One entry per eclipse in the window.
    pub eclipses: Vec<EclipseDetail>,
    /// One entry per supermoon in the window.
    pub supermoons: Vec<SupermoonDetail>,
    /// One presentation row per date.
    pub days: Vec<DayRow>,
}

/// The covered date range after clipping.
#[derive(Debug, Serialize)]
pub struct WindowMeta {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub n_days: usize,
}

/// Headline counts over the window.
#[derive(Debug, Serialize)]
pub struct EventCounts {
    pub full_moons: usize,
    pub new_moons: usize,
    pub supermoons: usize,
    pub eclipses: usize,
}

/// Illumination aggregates, in percent.
#[derive(Debug, Serialize)]
pub struct IlluminationSummary {
    pub mean_pct: f64,
    pub min_pct: f64,
    pub max_pct: f64,
}

/// Day count for a single phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseCount {
    pub phase: String,
    pub days: usize,
}

/// All-day visibility tallies over the window.
#[derive(Debug, Serialize)]
pub struct VisibilitySummary {
    pub up_all_day: usize,
    pub down_all_day: usize,
}

/// Detail entry for one eclipse.
#[derive(Debug, Clone, Serialize)]
pub struct EclipseDetail {
    pub date: NaiveDate,
    pub kind: String,
    pub depth_pct: f64,
    pub instant: NaiveTime,
}

/// Detail entry for one supermoon.
#[derive(Debug, Clone, Serialize)]
pub struct SupermoonDetail {
    pub date: NaiveDate,
    pub illumination_pct: f64,
}

/// One presentation row of the calendar view. Times are preformatted
/// UTC strings, empty when the event does not occur.
#[derive(Debug, Clone, Serialize)]
pub struct DayRow {
    pub date: NaiveDate,
    /// Emoji-prefixed phase label, e.g. `"\u{1F315} Full Moon"`.
    pub phase: String,
    pub illumination_pct: f64,
    pub moonrise: String,
    pub moonset: String,
    pub up_all_day: bool,
    pub down_all_day: bool,
}

/// Serialize a report to a pretty JSON string.
pub fn to_json(report: &LunarReport) -> Result<String, ReportError> {
    serde_json::to_string_pretty(report).map_err(|e| ReportError::Serialization {
        reason: e.to_string(),
    })
}
