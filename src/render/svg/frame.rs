//! Title, plot area and value axis shared by the line and bar charts.

use chrono::NaiveDate;

use super::builder::{Canvas, SvgBuilder};
use super::element::{Axis, Label};
use super::format::{coord, format_percent, format_thousands, percent_decimals};
use super::scale::{LinearScale, Ticks};
use super::style::{ChartColor, TextAnchor};

pub const TITLE_FONT_SIZE: f64 = 15.0;
pub const TICK_FONT_SIZE: f64 = 9.0;
const AXIS_LABEL_FONT_SIZE: f64 = 10.0;
const Y_TICK_TARGET: usize = 6;

/// How value-axis ticks are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YFormat {
    /// Truncated integers with thousands separators.
    Thousands,
    /// Ratios as percentages, decimals derived from the tick spacing.
    Percent,
}

impl YFormat {
    fn label(self, value: f64, step: f64) -> String {
        match self {
            Self::Thousands => format_thousands(value),
            Self::Percent => format_percent(value, percent_decimals(step)),
        }
    }
}

/// Space reserved around the plot area, in points.
#[derive(Debug, Clone, Copy)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 78.0,
            right: 18.0,
            top: 38.0,
            bottom: 34.0,
        }
    }
}

/// Plot geometry of one chart: the canvas, the inner plot rectangle and the
/// value scale fitted to the data.
#[derive(Debug, Clone)]
pub struct PlotFrame {
    pub canvas: Canvas,
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub ticks: Ticks,
    pub y_format: YFormat,
    y: LinearScale,
}

impl PlotFrame {
    /// Fit a frame to every present value. The zero line is always included.
    pub fn fit<'a>(
        canvas: Canvas,
        margins: Margins,
        values: impl IntoIterator<Item = &'a Option<f64>>,
        y_format: YFormat,
    ) -> Self {
        let (min, max) = values
            .into_iter()
            .flatten()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)));

        let ticks = Ticks::nice(min, max, Y_TICK_TARGET);
        let left = margins.left;
        let top = margins.top;
        let right = canvas.width() - margins.right;
        let bottom = canvas.height() - margins.bottom;
        let y = LinearScale::new(ticks.bounds(), (bottom, top));

        Self {
            canvas,
            left,
            top,
            right,
            bottom,
            ticks,
            y_format,
            y,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Vertical coordinate of a value.
    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        self.y.map(value)
    }

    /// Builder with the title, grid, value axis and its label already drawn.
    pub fn builder(&self, title: &str, y_label: &str) -> SvgBuilder {
        let mut svg = SvgBuilder::new(self.canvas).with_title(title);

        svg.push(
            &Label::new(self.canvas.width() / 2.0, 22.0, title)
                .with_size(TITLE_FONT_SIZE)
                .with_anchor(TextAnchor::Middle)
                .bold(),
        );

        let (lo, hi) = self.ticks.bounds();
        let span = hi - lo;
        let grid = ChartColor::grid().to_css();
        let mut labels = Vec::with_capacity(self.ticks.values.len());
        for value in &self.ticks.values {
            let y = self.y(*value);
            svg.push_raw(format!(
                r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{grid}" stroke-width="0.5"/>"#,
                coord(self.left),
                coord(self.right),
                y = coord(y),
            ));
            let pos = if span > 0.0 { (value - lo) / span } else { 0.0 };
            labels.push((pos, self.y_format.label(*value, self.ticks.step)));
        }

        svg.push(
            &Axis::vertical(self.left, self.bottom, self.height())
                .with_font_size(TICK_FONT_SIZE)
                .with_labels(labels),
        );

        svg.push(
            &Label::new(14.0, f64::midpoint(self.top, self.bottom), y_label)
                .with_size(AXIS_LABEL_FONT_SIZE)
                .with_anchor(TextAnchor::Middle)
                .with_rotation(-90.0),
        );

        svg
    }

    /// Legend box in the top-left corner of the plot area.
    pub fn legend(&self, svg: &mut SvgBuilder, entries: &[(String, LegendMark, ChartColor)]) {
        for (i, (name, mark, color)) in entries.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let y = (i as f64).mul_add(12.0, self.top + 12.0);
            let x = self.left + 8.0;
            match mark {
                LegendMark::Line => svg.push_raw(format!(
                    r#"<line x1="{x}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="2"/>"#,
                    x + 16.0,
                    color.to_css(),
                    y = y - 3.0,
                )),
                LegendMark::Bar => svg.push_raw(format!(
                    r#"<rect x="{x}" y="{}" width="16" height="7" fill="{}"/>"#,
                    y - 7.0,
                    color.to_css()
                )),
            }
            svg.push(&Label::new(x + 20.0, y, name.as_str()).with_size(TICK_FONT_SIZE));
        }
    }
}

/// Glyph drawn next to a legend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMark {
    Line,
    Bar,
}

/// Day offset of `date` from `origin`, as a plot coordinate domain value.
#[allow(clippy::cast_precision_loss)]
pub fn day_offset(origin: NaiveDate, date: NaiveDate) -> f64 {
    (date - origin).num_days() as f64
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
