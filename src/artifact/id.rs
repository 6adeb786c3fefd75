use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// File extension of every rendered artifact.
pub const ARTIFACT_EXTENSION: &str = "png";

/// Identity of a rendered image: a title, optionally qualified by country.
///
/// Built once per chart request and handed to both the renderer and the
/// composer, so the two sides never format the key independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ArtifactId {
    title: String,
    country: Option<String>,
}

impl ArtifactId {
    /// Cross-country artifact, e.g. `Total Cases by Country`.
    #[must_use]
    pub fn chart(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            country: None,
        }
    }

    /// Per-country artifact, e.g. `Daily New Cases in Spain`.
    #[must_use]
    pub fn for_country(title: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            country: Some(country.into()),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// `<Title>.png` or `<Title> in <Country>.png`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{self}.{ARTIFACT_EXTENSION}")
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{} in {country}", self.title),
            None => write!(f, "{}", self.title),
        }
    }
}

/// A rendered PNG image and the identity it was rendered under.
#[derive(Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: ArtifactId,
    pub png: Vec<u8>,
}

impl Artifact {
    #[must_use]
    pub const fn new(id: ArtifactId, png: Vec<u8>) -> Self {
        Self { id, png }
    }

    /// Hex SHA-256 of the encoded image.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.png);
        format!("{:x}", hasher.finalize())
    }
}

// Image bodies run to megabytes; show their size instead.
impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artifact")
            .field("id", &self.id)
            .field("png_bytes", &self.png.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
