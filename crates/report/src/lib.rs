//! Selene reporting: windowed aggregates over the daily lunar table.

mod error;
mod output;
mod summary;
mod window;

use chrono::NaiveDate;
use selene_io::LunarDataset;

pub use error::ReportError;
pub use output::{
    DayRow, EclipseDetail, EventCounts, IlluminationSummary, LunarReport, PhaseCount,
    SupermoonDetail, VisibilitySummary, WindowMeta, to_json,
};
pub use window::WINDOW_DAYS;

/// Build the 30-day report starting at `start`.
///
/// Selects the window `[start, start + 29]`, clipped to the dataset's
/// final date, and aggregates counts, illumination statistics, the
/// phase distribution, visibility tallies, special events, and one
/// presentation row per day.
///
/// # Errors
///
/// Returns [`ReportError::StartOutOfRange`] if `start` falls outside
/// the dataset's coverage.
pub fn build_report(dataset: &LunarDataset, start: NaiveDate) -> Result<LunarReport, ReportError> {
    // Step 1: Select and clip the window
    let window = window::select_window(dataset, start)?;

    // Step 2: Aggregate
    let counts = summary::count_events(window);
    let illumination = summary::illumination_summary(window);
    let phase_distribution = summary::phase_distribution(window);
    let visibility = summary::visibility_summary(window);
    let eclipses = summary::eclipse_details(window);
    let supermoons = summary::supermoon_details(window);
    let days = summary::day_rows(window);

    // Step 3: Assemble
    let meta = output::WindowMeta {
        start: window[0].date(),
        end: window[window.len() - 1].date(),
        n_days: window.len(),
    };
    Ok(LunarReport {
        window: meta,
        counts,
        illumination,
        phase_distribution,
        visibility,
        eclipses,
        supermoons,
        days,
    })
}
