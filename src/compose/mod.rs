//! Fixed-layout page composition over stored artifacts.

mod composer;
mod geometry;
mod page;

pub use composer::{ComposerState, PageComposer};
pub use geometry::{PageSize, Rect};
pub use page::{Align, Directive, Page, ReportDocument, TextStyle};
