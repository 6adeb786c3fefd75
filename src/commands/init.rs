use std::fs;

use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ReportError, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ReportError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        ReportError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# epi-report configuration file
# Every setting is optional; omitted settings use the values shown here.

version = "1"

# Report title; the first page reads "<title> as of <date>"
title = "COVID-19 Report"

# Adds a "Prepared by <author>" line under the title
# author = "Public Health Analytics"

# Countries of interest, in legend and page order.
# Each must appear in the dataset's `location` column.
countries = [
    "Austria",
    "Canada",
    "France",
    "Germany",
    "Spain",
    "United Kingdom",
    "United States",
]

# Keep every rendered chart as `<dir>/<Title>[ in <Country>].png`
# artifact_dir = "charts"

# Directory for "<title> <date>.html" when no --output is given
# output_dir = "reports"

[render]
# Pixels per inch of every chart
dpi = 300

# Days shown by the daily bar charts
daily_window = 100

# Days shown by the recent-change table
table_window = 7

# Label every k-th day on the daily chart axis
label_every = 5

# Columns loaded from the dataset; anything else is ignored
# [data]
# columns = ["total_cases", "new_cases", "new_cases_smoothed", "positive_rate"]

# Comparison pages list their charts explicitly. Rectangles are page
# millimetres on A4 (210 x 297), origin at the top-left corner.
# [summary]
# heading = "Country Total Comparison"
#
# [[summary.charts]]
# metric = "total_cases"
# label = "Total COVID Cases"
# title = "Total Cases by Country"
# rect = { x = 10.0, y = 104.0, w = 190.0, h = 58.0 }

# [rates]
# heading = "Country Rate Comparison"
#
# [[rates.charts]]
# metric = "total_cases_per_million"
# label = "Total COVID Cases Per Million"
# title = "Total Cases Per Million by Country"
# rect = { x = 10.0, y = 18.0, w = 190.0, h = 89.0 }

# Per-country page; `{country}` in the heading is replaced by the name
# [country]
# heading = "{country} COVID-19 Statistics"
#
# [country.daily_cases]
# bar_metric = "new_cases"
# line_metric = "new_cases_smoothed"
# legend = "Daily Cases"
# label = "Daily COVID Cases"
# title = "Daily New Cases"
# rect = { x = 10.0, y = 20.0, w = 190.0, h = 89.0 }
#
# [country.positivity]
# metric = "positive_rate"
# label = "Percentage"
# title = "Test Positivity Rate"
# rect = { x = 10.0, y = 107.0, w = 114.0, h = 89.0 }
#
# [country.table]
# title = "Daily Change"
# rect = { x = 117.0, y = 107.0, w = 89.0, h = 89.0 }
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
