//! Report command: render a 30-day report from the lunar table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use selene_io::LunarDataset;
use selene_report::{LunarReport, build_report, to_json};

use crate::cli::ReportArgs;
use crate::config::SeleneConfig;
use crate::convert::{self, ReportFormat};

/// Run the report pipeline.
pub fn run(args: ReportArgs) -> Result<()> {
    let _cmd = info_span!("report").entered();
    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: SeleneConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Resolve the table path and load the dataset
    let data_path = args.data.unwrap_or_else(|| config.data.csv.clone());
    info!(path = %data_path.display(), "loading lunar table");
    let dataset = LunarDataset::load(&data_path)
        .with_context(|| format!("failed to load table: {}", data_path.display()))?;

    // 3. Build the report
    let report = build_report(&dataset, args.start)
        .with_context(|| format!("failed to build report starting {}", args.start))?;

    // 4. Render
    let format = convert::parse_report_format(&args.format)?;
    let rendered = match format {
        ReportFormat::Text => render_text(&report),
        ReportFormat::Json => to_json(&report).context("failed to serialize report")?,
    };

    // 5. Write to stdout or file
    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Render the report as plain text sections.
fn render_text(report: &LunarReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "30-Day Lunar Report: {} to {} ({} days)\n\n",
        report.window.start, report.window.end, report.window.n_days
    ));

    out.push_str(&format!("Full moons      {:>3}\n", report.counts.full_moons));
    out.push_str(&format!("New moons       {:>3}\n", report.counts.new_moons));
    out.push_str(&format!("Supermoons      {:>3}\n", report.counts.supermoons));
    out.push_str(&format!("Lunar eclipses  {:>3}\n\n", report.counts.eclipses));

    out.push_str(&format!(
        "Illumination    mean {:.1}%  min {:.1}%  max {:.1}%\n\n",
        report.illumination.mean_pct, report.illumination.min_pct, report.illumination.max_pct
    ));

    out.push_str("Phase distribution\n");
    for entry in &report.phase_distribution {
        out.push_str(&format!("  {:<16} {:>3}\n", entry.phase, entry.days));
    }
    out.push('\n');

    out.push_str("Quick facts\n");
    out.push_str(&format!(
        "  Moon up all day    {:>3}\n",
        report.visibility.up_all_day
    ));
    out.push_str(&format!(
        "  Moon down all day  {:>3}\n\n",
        report.visibility.down_all_day
    ));

    out.push_str("Special events\n");
    if report.eclipses.is_empty() && report.supermoons.is_empty() {
        out.push_str("  none in this window\n");
    } else {
        for eclipse in &report.eclipses {
            out.push_str(&format!(
                "  {}  {} eclipse, depth {:.1}%, greatest at {} UTC\n",
                eclipse.date, eclipse.kind, eclipse.depth_pct, eclipse.instant
            ));
        }
        for supermoon in &report.supermoons {
            out.push_str(&format!(
                "  {}  supermoon, illumination {:.1}%\n",
                supermoon.date, supermoon.illumination_pct
            ));
        }
    }
    out.push('\n');

    out.push_str("Calendar\n");
    out.push_str(&format!(
        "  {:<12}{:<19}{:>6}  {:<9} {:<9}\n",
        "Date", "Phase", "Illum%", "Rise", "Set"
    ));
    for row in &report.days {
        let times = if row.up_all_day {
            "up all day".to_string()
        } else if row.down_all_day {
            "down all day".to_string()
        } else {
            format!("{:<9} {:<9}", row.moonrise, row.moonset)
        };
        let line = format!(
            "  {:<12}{:<19}{:>6.1}  {}",
            row.date.to_string(),
            row.phase,
            row.illumination_pct,
            times
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}
