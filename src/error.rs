use std::path::PathBuf;

use thiserror::Error;

use crate::artifact::ArtifactId;
use crate::compose::Rect;

/// Problems with the dataset itself or with what a caller asked of it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("column '{column}' is not present in the dataset")]
    MissingColumn { column: String },

    #[error("no rows for country '{country}'")]
    EmptyCountry { country: String },

    #[error("column '{column}' has no values for '{country}'")]
    NoValues { country: String, column: String },

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Invalid use of the page composer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("{operation}: no page has been added yet")]
    NoOpenPage { operation: &'static str },

    #[error("{operation}: document is already sealed")]
    Sealed { operation: &'static str },

    #[error("rectangle {rect} lies outside the {page_width}x{page_height}mm page")]
    OutOfBounds {
        rect: Rect,
        page_width: f64,
        page_height: f64,
    },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Failed to render {operation} for {country} ({metric}): {source}")]
    Render {
        operation: &'static str,
        country: String,
        metric: String,
        #[source]
        source: DataError,
    },

    #[error("Failed to rasterize {id}: {message}")]
    Raster { id: ArtifactId, message: String },

    #[error("Artifact not found: {0}")]
    ArtifactNotFound(ArtifactId),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Wrap a data problem with the render call that hit it.
    #[must_use]
    pub fn render(
        operation: &'static str,
        country: impl Into<String>,
        metric: impl Into<String>,
        source: DataError,
    ) -> Self {
        Self::Render {
            operation,
            country: country.into(),
            metric: metric.into(),
            source,
        }
    }

    /// Short variant name, used as a structured logging field.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::Data(_) => "Data",
            Self::Render { .. } => "Render",
            Self::Raster { .. } => "Raster",
            Self::ArtifactNotFound(_) => "ArtifactNotFound",
            Self::Layout(_) => "Layout",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::Io(_) => "Io",
            Self::Csv(_) => "Csv",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Whether the failure comes from configuration or the environment rather than the data.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::FileRead { .. }
                | Self::FileWrite { .. }
                | Self::Io(_)
                | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
