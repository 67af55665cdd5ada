//! Generate command: derive the daily lunar table and write it as CSV.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use selene_ephemeris::AnalyticEphemeris;
use selene_events::derive_span;
use selene_io::write_table;

use crate::cli::GenerateArgs;
use crate::config::SeleneConfig;
use crate::convert;

/// Run the table generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: SeleneConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Resolve span and output path (CLI overrides config)
    let start = args.start.unwrap_or(config.span.start);
    let days = args.days.unwrap_or(config.span.days);
    let output = args.output.unwrap_or_else(|| config.data.csv.clone());

    // 3. Build deriver config
    let deriver_cfg = convert::build_deriver_config(&config.observer, &config.events);

    // 4. Derive one record per day
    let ephemeris = AnalyticEphemeris::new();
    info!(%start, days, "deriving lunar records");
    let records = derive_span(&ephemeris, &deriver_cfg, start, days)
        .with_context(|| format!("failed to derive lunar records from {start}"))?;

    // 5. Write the CSV table
    write_table(&output, &records)
        .with_context(|| format!("failed to write table: {}", output.display()))?;
    info!(
        path = %output.display(),
        n_records = records.len(),
        "generation complete"
    );

    Ok(())
}
