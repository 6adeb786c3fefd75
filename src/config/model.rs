use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::compose::Rect;
use crate::dataset::{DEFAULT_COLUMNS, columns};
use crate::render::RenderSettings;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_COUNTRIES: [&str; 7] = [
    "Austria",
    "Canada",
    "France",
    "Germany",
    "Spain",
    "United Kingdom",
    "United States",
];

const DEFAULT_INTRO: &str = "The COVID-19 (SARS-CoV-2) pandemic has led to significant human loss of life and major \
disruptions to society and the economy. All countries around the world are feeling the impact of COVID-19. \
This report illustrates COVID-19 statistics in countries of interest. The first page contains total statistics \
over time for countries of interest. The second page contains rates over time for countries of interest. \
The following pages contain individual country statistics. COVID-19 statistics are retrieved from \
Our World in Data (https://github.com/owid/covid-19-data).";

/// Top-level report configuration, read from `.epi-report.toml`.
///
/// Every field has a default, so an empty file is a complete configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub version: Option<String>,

    /// Report title; the first page reads `<title> as of <date>`.
    pub title: String,

    /// Name for the "Prepared by" line; omitted when unset.
    pub author: Option<String>,

    /// Introductory paragraph on the first page.
    pub intro: String,

    /// Countries of interest, in legend and page order.
    pub countries: Vec<String>,

    /// Write artifacts as files into this directory instead of keeping them in memory.
    pub artifact_dir: Option<PathBuf>,

    /// Directory for the report document when no output path is given.
    pub output_dir: Option<PathBuf>,

    pub render: RenderSettings,
    pub data: DataConfig,
    pub summary: ComparisonPage,
    pub rates: ComparisonPage,
    pub country: CountryPage,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            version: None,
            title: "COVID-19 Report".to_string(),
            author: None,
            intro: DEFAULT_INTRO.to_string(),
            countries: DEFAULT_COUNTRIES.iter().map(|c| (*c).to_string()).collect(),
            artifact_dir: None,
            output_dir: None,
            render: RenderSettings::default(),
            data: DataConfig::default(),
            summary: ComparisonPage::summary(),
            rates: ComparisonPage::rates(),
            country: CountryPage::default(),
        }
    }
}

/// Dataset columns to load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub columns: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// A cross-country comparison page: a heading and overlay charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComparisonPage {
    pub heading: String,
    pub charts: Vec<OverlayChart>,
}

impl ComparisonPage {
    fn summary() -> Self {
        Self {
            heading: "Country Total Comparison".to_string(),
            charts: vec![
                OverlayChart::new(
                    columns::TOTAL_CASES,
                    "Total COVID Cases",
                    "Total Cases by Country",
                    Rect::new(10.0, 104.0, 190.0, 58.0),
                ),
                OverlayChart::new(
                    columns::TOTAL_TESTS,
                    "Total COVID Tests",
                    "Total Tests by Country",
                    Rect::new(10.0, 163.0, 190.0, 58.0),
                ),
                OverlayChart::new(
                    columns::TOTAL_DEATHS,
                    "Total COVID Deaths",
                    "Total Deaths by Country",
                    Rect::new(10.0, 222.0, 190.0, 58.0),
                ),
            ],
        }
    }

    fn rates() -> Self {
        Self {
            heading: "Country Rate Comparison".to_string(),
            charts: vec![
                OverlayChart::new(
                    columns::TOTAL_CASES_PER_MILLION,
                    "Total COVID Cases Per Million",
                    "Total Cases Per Million by Country",
                    Rect::new(10.0, 18.0, 190.0, 89.0),
                ),
                OverlayChart::new(
                    columns::TOTAL_DEATHS_PER_MILLION,
                    "Total COVID Deaths Per Million",
                    "Total Deaths Per Million by Country",
                    Rect::new(10.0, 106.0, 190.0, 89.0),
                ),
                OverlayChart::new(
                    columns::TOTAL_TESTS_PER_THOUSAND,
                    "Total COVID Tests Per Thousand",
                    "Total Tests Per Thousand by Country",
                    Rect::new(10.0, 194.0, 190.0, 89.0),
                ),
            ],
        }
    }
}

/// One overlay chart `[[summary.charts]]` / `[[rates.charts]]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OverlayChart {
    pub metric: String,
    pub label: String,
    pub title: String,
    pub rect: Rect,
}

impl OverlayChart {
    fn new(metric: &str, label: &str, title: &str, rect: Rect) -> Self {
        Self {
            metric: metric.to_string(),
            label: label.to_string(),
            title: title.to_string(),
            rect,
        }
    }
}

/// Layout of each per-country page `[country]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CountryPage {
    /// Heading with `{country}` replaced by the country name.
    pub heading: String,
    pub daily_cases: DailyPanel,
    pub daily_deaths: DailyPanel,
    pub positivity: RatePanel,
    pub table: TablePanel,
}

impl Default for CountryPage {
    fn default() -> Self {
        Self {
            heading: "{country} COVID-19 Statistics".to_string(),
            daily_cases: DailyPanel {
                bar_metric: columns::NEW_CASES.to_string(),
                line_metric: columns::NEW_CASES_SMOOTHED.to_string(),
                legend: "Daily Cases".to_string(),
                label: "Daily COVID Cases".to_string(),
                title: "Daily New Cases".to_string(),
                rect: Rect::new(10.0, 20.0, 190.0, 89.0),
            },
            daily_deaths: DailyPanel {
                bar_metric: columns::NEW_DEATHS.to_string(),
                line_metric: columns::NEW_DEATHS_SMOOTHED.to_string(),
                legend: "Daily Deaths".to_string(),
                label: "Daily COVID Deaths".to_string(),
                title: "Daily New Deaths".to_string(),
                rect: Rect::new(10.0, 194.0, 190.0, 89.0),
            },
            positivity: RatePanel {
                metric: columns::POSITIVE_RATE.to_string(),
                label: "Percentage".to_string(),
                title: "Test Positivity Rate".to_string(),
                rect: Rect::new(10.0, 107.0, 114.0, 89.0),
            },
            table: TablePanel {
                title: "Daily Change".to_string(),
                rect: Rect::new(117.0, 107.0, 89.0, 89.0),
            },
        }
    }
}

impl CountryPage {
    #[must_use]
    pub fn heading_for(&self, country: &str) -> String {
        self.heading.replace("{country}", country)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DailyPanel {
    pub bar_metric: String,
    pub line_metric: String,
    /// Legend text of the bars.
    pub legend: String,
    pub label: String,
    pub title: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RatePanel {
    pub metric: String,
    pub label: String,
    pub title: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TablePanel {
    pub title: String,
    pub rect: Rect,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
