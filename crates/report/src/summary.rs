//! Aggregation over a selected window.

use selene_events::{DailyLunarRecord, Phase};

use crate::output::{
    DayRow, EclipseDetail, EventCounts, IlluminationSummary, PhaseCount, SupermoonDetail,
    VisibilitySummary,
};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Count the headline events in the window.
pub fn count_events(window: &[DailyLunarRecord]) -> EventCounts {
    EventCounts {
        full_moons: window.iter().filter(|r| r.phase() == Phase::Full).count(),
        new_moons: window.iter().filter(|r| r.phase() == Phase::New).count(),
        supermoons: window.iter().filter(|r| r.supermoon()).count(),
        eclipses: window.iter().filter(|r| r.eclipse().is_some()).count(),
    }
}

/// Compute mean/min/max illumination over the window.
///
/// The selected window always holds at least one record.
pub fn illumination_summary(window: &[DailyLunarRecord]) -> IlluminationSummary {
    let sum: f64 = window.iter().map(|r| r.illumination_pct()).sum();
    let min = window
        .iter()
        .map(|r| r.illumination_pct())
        .fold(f64::INFINITY, f64::min);
    let max = window
        .iter()
        .map(|r| r.illumination_pct())
        .fold(f64::NEG_INFINITY, f64::max);
    IlluminationSummary {
        mean_pct: sum / window.len() as f64,
        min_pct: min,
        max_pct: max,
    }
}

/// Count days per phase, covering all eight phases in cycle order.
pub fn phase_distribution(window: &[DailyLunarRecord]) -> Vec<PhaseCount> {
    Phase::ALL
        .into_iter()
        .map(|phase| PhaseCount {
            phase: phase.name().to_string(),
            days: window.iter().filter(|r| r.phase() == phase).count(),
        })
        .collect()
}

/// Tally all-day visibility states in the window.
pub fn visibility_summary(window: &[DailyLunarRecord]) -> VisibilitySummary {
    VisibilitySummary {
        up_all_day: window.iter().filter(|r| r.up_all_day()).count(),
        down_all_day: window.iter().filter(|r| r.down_all_day()).count(),
    }
}

/// Collect one detail entry per eclipse in the window.
pub fn eclipse_details(window: &[DailyLunarRecord]) -> Vec<EclipseDetail> {
    window
        .iter()
        .filter_map(|r| {
            r.eclipse().map(|event| EclipseDetail {
                date: r.date(),
                kind: event.kind.name().to_string(),
                depth_pct: event.depth_pct,
                instant: event.instant,
            })
        })
        .collect()
}

/// Collect one detail entry per supermoon in the window.
pub fn supermoon_details(window: &[DailyLunarRecord]) -> Vec<SupermoonDetail> {
    window
        .iter()
        .filter(|r| r.supermoon())
        .map(|r| SupermoonDetail {
            date: r.date(),
            illumination_pct: r.illumination_pct(),
        })
        .collect()
}

/// Build one presentation row per record.
pub fn day_rows(window: &[DailyLunarRecord]) -> Vec<DayRow> {
    window
        .iter()
        .map(|r| DayRow {
            date: r.date(),
            phase: format!("{} {}", r.phase().emoji(), r.phase().name()),
            illumination_pct: r.illumination_pct(),
            moonrise: fmt_time(r.moonrise()),
            moonset: fmt_time(r.moonset()),
            up_all_day: r.up_all_day(),
            down_all_day: r.down_all_day(),
        })
        .collect()
}

fn fmt_time(time: Option<chrono::NaiveTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}
