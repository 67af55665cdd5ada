//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use selene_events::DeriverConfig;

use crate::config::{EventsToml, ObserverToml};

/// Report rendering formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text sections.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Parses a report format name string into the corresponding enum variant.
pub fn parse_report_format(s: &str) -> Result<ReportFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(ReportFormat::Text),
        "json" => Ok(ReportFormat::Json),
        other => bail!("unknown report format: {other:?}"),
    }
}

/// Builds a [`DeriverConfig`] from the TOML observer and events sections.
pub fn build_deriver_config(observer: &ObserverToml, events: &EventsToml) -> DeriverConfig {
    DeriverConfig::default()
        .with_latitude_deg(observer.latitude)
        .with_longitude_deg(observer.longitude)
        .with_supermoon_km(events.supermoon_km)
        .with_shadow_enlargement(events.shadow_enlargement)
        .with_scan_step_min(events.scan_step_min)
}
