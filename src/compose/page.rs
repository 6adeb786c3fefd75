use serde::Serialize;

use super::geometry::{PageSize, Rect};
use crate::artifact::ArtifactId;

/// Font of a text directive, sizes in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    #[must_use]
    pub const fn regular(size: f64) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
        }
    }

    #[must_use]
    pub const fn bold(size: f64) -> Self {
        Self {
            size,
            bold: true,
            italic: false,
        }
    }

    #[must_use]
    pub const fn italic(size: f64) -> Self {
        Self {
            size,
            bold: false,
            italic: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// One placement on a page. Directives are drawn in order; later ones overlay
/// earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Directive {
    /// Text wrapped within `rect.w`; `rect.h` is the line height.
    Text {
        rect: Rect,
        text: String,
        style: TextStyle,
        align: Align,
    },
    /// A stored artifact scaled into `rect`.
    Artifact {
        rect: Rect,
        id: ArtifactId,
        file_name: String,
        sha256: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based position in the document.
    pub number: usize,
    pub directives: Vec<Directive>,
}

impl Page {
    #[must_use]
    pub const fn new(number: usize) -> Self {
        Self {
            number,
            directives: Vec::new(),
        }
    }

    /// Identities placed on this page, in placement order.
    pub fn artifact_ids(&self) -> impl Iterator<Item = &ArtifactId> {
        self.directives.iter().filter_map(|d| match d {
            Directive::Artifact { id, .. } => Some(id),
            Directive::Text { .. } => None,
        })
    }
}

/// The sealed, immutable page sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub page_size: PageSize,
    pub pages: Vec<Page>,
}

impl ReportDocument {
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every artifact identity referenced by the document, first use first.
    #[must_use]
    pub fn artifact_ids(&self) -> Vec<&ArtifactId> {
        let mut seen = indexmap::IndexSet::new();
        for id in self.pages.iter().flat_map(Page::artifact_ids) {
            seen.insert(id);
        }
        seen.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
