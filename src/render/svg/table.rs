//! Small titled table drawn as an image.

use std::fmt::Write;

use super::builder::{Canvas, SvgBuilder};
use super::element::{Label, SvgElement};
use super::format::{coord, html_escape};
use super::frame::TITLE_FONT_SIZE;
use super::style::{ChartColor, TextAnchor};

const CELL_FONT_SIZE: f64 = 12.0;
const SIDE_MARGIN: f64 = 18.0;
const TITLE_SPACE: f64 = 44.0;
const MAX_ROW_HEIGHT: f64 = 30.0;

/// Grid of text cells under a colored header row, centered on the canvas.
#[derive(Debug)]
pub struct TableChart {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub canvas: Canvas,
}

impl TableChart {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        canvas: Canvas,
    ) -> Self {
        Self {
            title: title.into(),
            headers,
            rows,
            canvas,
        }
    }
}

impl SvgElement for TableChart {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let width = self.canvas.width();
        let height = self.canvas.height();
        let mut svg = SvgBuilder::new(self.canvas).with_title(&self.title);

        svg.push(
            &Label::new(width / 2.0, 24.0, self.title.as_str())
                .with_size(TITLE_FONT_SIZE)
                .with_anchor(TextAnchor::Middle)
                .bold(),
        );

        let columns = self.headers.len().max(1);
        let row_count = self.rows.len() + 1;
        let row_height =
            coord(((height - TITLE_SPACE - SIDE_MARGIN) / row_count as f64).min(MAX_ROW_HEIGHT));
        let table_width = SIDE_MARGIN.mul_add(-2.0, width);
        let cell_width = coord(table_width / columns as f64);
        let table_top = f64::midpoint(TITLE_SPACE, height - row_height * row_count as f64)
            .max(TITLE_SPACE);

        let border = ChartColor::muted().to_css();
        let mut cells = String::new();
        let header = std::iter::once((true, &self.headers));
        let body = self.rows.iter().map(|row| (false, row));
        for (r, (is_header, row)) in header.chain(body).enumerate() {
            let y = coord((r as f64).mul_add(row_height, table_top));
            for c in 0..columns {
                let x = coord((c as f64).mul_add(cell_width, SIDE_MARGIN));
                let fill = if is_header {
                    ChartColor::header().to_css()
                } else {
                    "#ffffff".to_string()
                };
                let _ = writeln!(
                    cells,
                    r#"<rect x="{x}" y="{y}" width="{cell_width}" height="{row_height}" fill="{fill}" stroke="{border}" stroke-width="0.75"/>"#
                );
                let text = row.get(c).map_or("", String::as_str);
                let weight = if is_header { r#" font-weight="bold""# } else { "" };
                let _ = writeln!(
                    cells,
                    r#"<text x="{}" y="{}" text-anchor="middle" fill="{}" font-size="{CELL_FONT_SIZE}"{weight}>{}</text>"#,
                    coord(x + cell_width / 2.0),
                    coord(y + row_height / 2.0 + CELL_FONT_SIZE / 3.0),
                    ChartColor::text().to_css(),
                    html_escape(text)
                );
            }
        }
        svg.push_raw(cells);

        svg.build()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
