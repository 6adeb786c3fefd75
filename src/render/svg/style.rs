//! SVG styling primitives: colors, text anchoring and font weight.

use std::fmt;

/// Line colors assigned to countries, in legend order.
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// A fill or stroke color.
///
/// Artifacts are standalone files, so colors are always literal hex values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColor(String);

impl ChartColor {
    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self(color.to_string())
    }

    /// Color for the `index`-th series; wraps around after ten.
    #[must_use]
    pub fn palette(index: usize) -> Self {
        Self::hex(PALETTE[index % PALETTE.len()])
    }

    #[must_use]
    pub fn text() -> Self {
        Self::hex("#1e293b")
    }

    #[must_use]
    pub fn muted() -> Self {
        Self::hex("#475569")
    }

    #[must_use]
    pub fn grid() -> Self {
        Self::hex("#e2e8f0")
    }

    /// Header fill of summary tables.
    #[must_use]
    pub fn header() -> Self {
        Self::hex("#00bfbf")
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.0.clone()
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Bold => write!(f, "bold"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
