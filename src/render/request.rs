use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactId;

/// One artifact the report needs, with everything required to draw it.
///
/// The identity is derived here and nowhere else, so the renderer and the
/// composer always agree on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartRequest {
    /// Every country of interest on one time axis, full history.
    Overlay {
        metric: String,
        y_label: String,
        title: String,
    },
    /// Recent raw daily values as bars with their smoothed counterpart as a line.
    Daily {
        country: String,
        bar_metric: String,
        line_metric: String,
        bar_legend: String,
        y_label: String,
        title: String,
    },
    /// A ratio metric over a country's full history, shown as a percentage.
    Rate {
        country: String,
        metric: String,
        y_label: String,
        title: String,
    },
    /// The most recent days of cases, tests and deaths as a table.
    Table { country: String, title: String },
}

impl ChartRequest {
    #[must_use]
    pub fn id(&self) -> ArtifactId {
        match self {
            Self::Overlay { title, .. } => ArtifactId::chart(title),
            Self::Daily { country, title, .. }
            | Self::Rate { country, title, .. }
            | Self::Table { country, title } => ArtifactId::for_country(title, country),
        }
    }

    /// Render operation name, used in error context and logs.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Overlay { .. } => "overlay",
            Self::Daily { .. } => "daily",
            Self::Rate { .. } => "rate",
            Self::Table { .. } => "table",
        }
    }
}

/// Legend text of the smoothed line in daily charts.
pub const SMOOTHED_LEGEND: &str = "7-Day Moving Average";

/// Rendering knobs shared by every chart of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Pixels per inch of every artifact.
    pub dpi: u32,
    /// Days shown by daily bar charts.
    pub daily_window: usize,
    /// Days shown by the change table.
    pub table_window: usize,
    /// Label every k-th day on the daily chart axis.
    pub label_every: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            dpi: 300,
            daily_window: 100,
            table_window: 7,
            label_every: 5,
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
