mod html;
mod json;
mod progress;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use progress::RenderProgress;

use crate::artifact::ArtifactStore;
use crate::compose::ReportDocument;
use crate::error::Result;

/// Serializes a sealed document.
pub trait DocumentFormatter {
    /// Format the document; artifact bodies are read from `store` when the
    /// format embeds them.
    ///
    /// # Errors
    /// Returns an error if an artifact cannot be read or serialization fails.
    fn format(&self, document: &ReportDocument, store: &dyn ArtifactStore) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    /// File extension of documents in this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub fn formatter(self) -> Box<dyn DocumentFormatter> {
        match self {
            Self::Html => Box::new(HtmlFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
