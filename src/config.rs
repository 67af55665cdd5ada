use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level Selene configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeleneConfig {
    /// Table location.
    #[serde(default)]
    pub data: DataToml,

    /// Generation span.
    #[serde(default)]
    pub span: SpanToml,

    /// Observer site for rise/set computations.
    #[serde(default)]
    pub observer: ObserverToml,

    /// Event detection thresholds.
    #[serde(default)]
    pub events: EventsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    #[serde(default = "default_csv")]
    pub csv: PathBuf,
}

impl Default for DataToml {
    fn default() -> Self {
        Self { csv: default_csv() }
    }
}

fn default_csv() -> PathBuf {
    PathBuf::from("lunar_data_1year.csv")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpanToml {
    #[serde(default = "default_start")]
    pub start: NaiveDate,
    #[serde(default = "default_days")]
    pub days: usize,
}

impl Default for SpanToml {
    fn default() -> Self {
        Self {
            start: default_start(),
            days: default_days(),
        }
    }
}

fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date")
}
fn default_days() -> usize {
    366
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverToml {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl Default for ObserverToml {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsToml {
    #[serde(default = "default_supermoon_km")]
    pub supermoon_km: f64,
    #[serde(default = "default_shadow_enlargement")]
    pub shadow_enlargement: f64,
    #[serde(default = "default_scan_step_min")]
    pub scan_step_min: u32,
}

impl Default for EventsToml {
    fn default() -> Self {
        Self {
            supermoon_km: default_supermoon_km(),
            shadow_enlargement: default_shadow_enlargement(),
            scan_step_min: default_scan_step_min(),
        }
    }
}

fn default_supermoon_km() -> f64 {
    360_000.0
}
fn default_shadow_enlargement() -> f64 {
    1.02
}
fn default_scan_step_min() -> u32 {
    10
}
