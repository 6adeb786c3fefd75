use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "epi-report")]
#[command(author, version, about = "Epidemiological report generator - charts and paginated summaries from OWID-style data")]
#[command(long_about = "Turns a multi-country epidemiological time series (OWID CSV layout) into a \
    fixed-layout, paginated report of per-country and cross-country charts.\n\n\
    Exit codes:\n  \
    0 - Report generated\n  \
    1 - Data, rendering or layout failure\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render all charts and compose the report document
    Generate(GenerateArgs),

    /// List every country present in the dataset
    Countries(CountriesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Dataset CSV with `location`, `date` and numeric columns
    pub input: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the document here (default: `<title> <as-of>.<ext>` in the output directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Countries of interest, comma-separated (overrides config)
    #[arg(long, value_delimiter = ',')]
    pub countries: Option<Vec<String>>,

    /// Artifact resolution in pixels per inch (overrides config)
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Also write every artifact as a PNG file into this directory
    #[arg(long)]
    pub artifacts_dir: Option<PathBuf>,

    /// Output format [possible values: html, json]
    #[arg(short, long, default_value = "html")]
    pub format: OutputFormat,

    /// Date printed in the title and footers, YYYY-MM-DD (default: today, UTC)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Render charts one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Parser, Debug)]
pub struct CountriesArgs {
    /// Dataset CSV with `location` and `date` columns
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".epi-report.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
