use std::mem;

use super::geometry::{PageSize, Rect};
use super::page::{Align, Directive, Page, ReportDocument, TextStyle};
use crate::artifact::{ArtifactId, ArtifactStore};
use crate::error::{LayoutError, Result};

/// Footer text size in points.
const FOOTER_SIZE: f64 = 7.0;
/// Distance of the footer box from the bottom edge, in millimetres.
const FOOTER_OFFSET: f64 = 15.0;
const FOOTER_HEIGHT: f64 = 10.0;
const FOOTER_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    Empty,
    Building,
    Sealed,
}

/// Records placement directives page by page, then seals them into a
/// [`ReportDocument`].
///
/// Artifacts are referenced by identity and must already be in the store
/// when placed. No clipping or reflow happens: a rectangle off the page is
/// an error.
pub struct PageComposer<'s> {
    store: &'s dyn ArtifactStore,
    page_size: PageSize,
    title: String,
    footer: Option<String>,
    pages: Vec<Page>,
    state: ComposerState,
}

impl<'s> PageComposer<'s> {
    #[must_use]
    pub fn new(store: &'s dyn ArtifactStore) -> Self {
        Self {
            store,
            page_size: PageSize::A4,
            title: String::new(),
            footer: None,
            pages: Vec::new(),
            state: ComposerState::Empty,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Left footer text drawn on every page at seal time, next to the page number.
    #[must_use]
    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    #[must_use]
    pub const fn state(&self) -> ComposerState {
        self.state
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Open a new page; later placements go onto it.
    ///
    /// # Errors
    /// Returns `LayoutError::Sealed` once the document is sealed.
    pub fn add_page(&mut self) -> Result<()> {
        if self.state == ComposerState::Sealed {
            return Err(LayoutError::Sealed {
                operation: "add_page",
            }
            .into());
        }
        self.pages.push(Page::new(self.pages.len() + 1));
        self.state = ComposerState::Building;
        Ok(())
    }

    /// Place text in a box on the open page.
    ///
    /// # Errors
    /// Returns a `LayoutError` without an open page, after sealing, or when
    /// the box leaves the page.
    pub fn place_text(
        &mut self,
        rect: Rect,
        text: impl Into<String>,
        style: TextStyle,
        align: Align,
    ) -> Result<()> {
        self.push(
            "place_text",
            Directive::Text {
                rect,
                text: text.into(),
                style,
                align,
            },
        )
    }

    /// Place a stored artifact into `rect` on the open page.
    ///
    /// # Errors
    /// Returns a `LayoutError` as for [`PageComposer::place_text`], or the
    /// store's `ArtifactNotFound` when nothing is stored under `id`.
    pub fn place_artifact(&mut self, id: &ArtifactId, rect: Rect) -> Result<()> {
        self.check_open("place_artifact")?;
        let artifact = self.store.get(id)?;
        self.push(
            "place_artifact",
            Directive::Artifact {
                rect,
                file_name: id.file_name(),
                sha256: artifact.digest(),
                id: artifact.id,
            },
        )
    }

    /// Append footers and hand out the finished document. Terminal.
    ///
    /// # Errors
    /// Returns `NoOpenPage` if no page was ever added, `Sealed` if already sealed.
    pub fn seal(&mut self) -> Result<ReportDocument> {
        self.check_open("seal")?;
        self.state = ComposerState::Sealed;

        let mut pages = mem::take(&mut self.pages);
        let footer_rect = Rect::new(
            FOOTER_MARGIN,
            self.page_size.height - FOOTER_OFFSET,
            2.0f64.mul_add(-FOOTER_MARGIN, self.page_size.width),
            FOOTER_HEIGHT,
        );
        for page in &mut pages {
            if let Some(footer) = &self.footer {
                page.directives.push(Directive::Text {
                    rect: footer_rect,
                    text: footer.clone(),
                    style: TextStyle::italic(FOOTER_SIZE),
                    align: Align::Left,
                });
            }
            page.directives.push(Directive::Text {
                rect: footer_rect,
                text: format!("Page {}", page.number),
                style: TextStyle::italic(FOOTER_SIZE),
                align: Align::Right,
            });
        }

        Ok(ReportDocument {
            title: mem::take(&mut self.title),
            page_size: self.page_size,
            pages,
        })
    }

    fn check_open(&self, operation: &'static str) -> Result<()> {
        match self.state {
            ComposerState::Empty => Err(LayoutError::NoOpenPage { operation }.into()),
            ComposerState::Sealed => Err(LayoutError::Sealed { operation }.into()),
            ComposerState::Building => Ok(()),
        }
    }

    fn push(&mut self, operation: &'static str, directive: Directive) -> Result<()> {
        self.check_open(operation)?;
        let rect = match &directive {
            Directive::Text { rect, .. } | Directive::Artifact { rect, .. } => *rect,
        };
        if !rect.fits(self.page_size) {
            return Err(LayoutError::OutOfBounds {
                rect,
                page_width: self.page_size.width,
                page_height: self.page_size.height,
            }
            .into());
        }
        if let Some(page) = self.pages.last_mut() {
            page.directives.push(directive);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
