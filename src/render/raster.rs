//! SVG to PNG at the canvas resolution.

use std::sync::Arc;

use png::{BitDepth, ColorType, Encoder};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree, fontdb};

use super::svg::Canvas;
use crate::artifact::{Artifact, ArtifactId};
use crate::error::{ReportError, Result};

/// A chart drawn as SVG, not yet rasterized.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub id: ArtifactId,
    pub svg: String,
    pub canvas: Canvas,
}

/// Turns charts into PNG artifacts of `inches x dpi` pixels.
///
/// The font database is loaded once and shared by every chart of a run.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    fonts: Arc<fontdb::Database>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    /// Rasterizer using the fonts installed on this system.
    #[must_use]
    pub fn new() -> Self {
        let mut fonts = fontdb::Database::new();
        fonts.load_system_fonts();
        Self::with_fonts(fonts)
    }

    #[must_use]
    pub fn with_fonts(fonts: fontdb::Database) -> Self {
        Self {
            fonts: Arc::new(fonts),
        }
    }

    /// Rasterize `chart` at its canvas resolution and encode it as PNG.
    ///
    /// # Errors
    /// Returns `ReportError::Raster` if the markup does not parse, the pixmap
    /// cannot be allocated, or encoding fails.
    #[allow(clippy::cast_precision_loss)]
    pub fn rasterize(&self, chart: &Chart) -> Result<Artifact> {
        let fail = |message: String| ReportError::Raster {
            id: chart.id.clone(),
            message,
        };

        let mut options = Options::default();
        options.fontdb = Arc::clone(&self.fonts);
        let tree = Tree::from_data(chart.svg.as_bytes(), &options)
            .map_err(|err| fail(format!("SVG parse failed: {err}")))?;

        let (width, height) = chart.canvas.pixels();
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| fail(format!("cannot allocate {width}x{height} pixmap")))?;
        let size = tree.size();
        let transform = Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let png = encode_png(pixmap.data(), width, height).map_err(|err| fail(err.to_string()))?;
        Ok(Artifact::new(chart.id.clone(), png))
    }
}

// Charts paint an opaque background, so premultiplied and straight RGBA agree.
fn encode_png(
    rgba: &[u8],
    width: u32,
    height: u32,
) -> std::result::Result<Vec<u8>, png::EncodingError> {
    let mut out = Vec::new();
    let mut encoder = Encoder::new(&mut out, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;
    Ok(out)
}

#[cfg(test)]
#[path = "raster_tests.rs"]
mod tests;
