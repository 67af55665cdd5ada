use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Selene lunar dataset generator and report viewer.
#[derive(Parser)]
#[command(
    name = "selene",
    version,
    about = "Lunar phase dataset generator and report viewer"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Derive the daily lunar table and write it as CSV.
    Generate(GenerateArgs),
    /// Render a 30-day report from an existing table.
    Report(ReportArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "selene.toml")]
    pub config: PathBuf,

    /// Override output CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override span start date (YYYY-MM-DD) from config.
    #[arg(short, long)]
    pub start: Option<NaiveDate>,

    /// Override span length in days from config.
    #[arg(short, long)]
    pub days: Option<usize>,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "selene.toml")]
    pub config: PathBuf,

    /// Path to the lunar CSV table, overriding the config.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Report window start date (YYYY-MM-DD).
    #[arg(short, long)]
    pub start: NaiveDate,

    /// Output format: text or json.
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
