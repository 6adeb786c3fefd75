//! SVG document builder with a fixed physical size.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;

/// Logical units per inch. Drawing coordinates and font sizes are in points.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Physical size of a rendered artifact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
}

impl Canvas {
    #[must_use]
    pub const fn new(width_in: f64, height_in: f64, dpi: u32) -> Self {
        Self {
            width_in,
            height_in,
            dpi,
        }
    }

    /// Drawing width in points.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width_in * POINTS_PER_INCH
    }

    /// Drawing height in points.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height_in * POINTS_PER_INCH
    }

    /// Intrinsic pixel size at the configured resolution.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixels(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }
}

/// Builder for standalone SVG artifacts.
#[derive(Debug)]
pub struct SvgBuilder {
    canvas: Canvas,
    title: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            title: String::new(),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn push<E: SvgElement>(&mut self, element: &E) {
        self.elements.push(element.render());
    }

    pub fn push_all<E: SvgElement>(&mut self, elements: &[E]) {
        for element in elements {
            self.push(element);
        }
    }

    pub fn push_raw(&mut self, svg: impl Into<String>) {
        self.elements.push(svg.into());
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let (px_width, px_height) = self.canvas.pixels();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {width} {height}" width="{px_width}" height="{px_height}" xmlns="http://www.w3.org/2000/svg" role="img" font-family="DejaVu Sans, Arial, Helvetica, sans-serif">"#
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        let _ = writeln!(
            output,
            r##"    <rect x="0" y="0" width="{width}" height="{height}" fill="#ffffff"/>"##
        );

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
