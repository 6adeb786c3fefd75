//! Recent daily values as bars with a smoothed line on top.

use chrono::NaiveDate;

use super::builder::Canvas;
use super::element::{Axis, Bar, Line, SvgElement};
use super::frame::{LegendMark, Margins, PlotFrame, TICK_FONT_SIZE, YFormat};
use super::style::ChartColor;

/// Label format of the category axis.
const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Fraction of each category band filled by its bar.
const BAR_FILL: f64 = 0.8;

/// One bar per day plus a line through the same days.
///
/// Every day gets a tick; only every `label_every`-th tick is labelled
/// (the last of each group), and labels read bottom-to-top.
#[derive(Debug)]
pub struct DailyBarChart {
    pub title: String,
    pub y_label: String,
    pub dates: Vec<NaiveDate>,
    pub bars: Vec<Option<f64>>,
    pub line: Vec<Option<f64>>,
    pub bar_name: String,
    pub line_name: String,
    pub label_every: usize,
    pub canvas: Canvas,
}

impl DailyBarChart {
    #[must_use]
    pub fn is_labelled(&self, index: usize) -> bool {
        let k = self.label_every.max(1);
        index % k == k - 1
    }

    fn bar_color() -> ChartColor {
        ChartColor::hex("#0000ff")
    }

    fn line_color() -> ChartColor {
        ChartColor::hex("#ff0000")
    }
}

impl SvgElement for DailyBarChart {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let margins = Margins {
            bottom: 64.0,
            ..Margins::default()
        };
        let frame = PlotFrame::fit(
            self.canvas,
            margins,
            self.bars.iter().chain(&self.line),
            YFormat::Thousands,
        );
        let mut svg = frame.builder(&self.title, &self.y_label);

        let count = self.dates.len().max(1);
        let band = frame.width() / count as f64;
        let center = |i: usize| (i as f64 + 0.5).mul_add(band, frame.left);
        let zero = frame.y(0.0);

        let mut bars = Vec::new();
        for (i, (date, value)) in self.dates.iter().zip(&self.bars).enumerate() {
            let Some(value) = value else { continue };
            let top = frame.y(*value);
            bars.push(Bar {
                x: center(i) - band * BAR_FILL / 2.0,
                y: top.min(zero),
                width: band * BAR_FILL,
                height: (zero - top).abs(),
                color: Self::bar_color(),
                label: date.format(DATE_LABEL_FORMAT).to_string(),
                value: *value,
            });
        }
        svg.push_all(&bars);

        let points: Vec<_> = self
            .line
            .iter()
            .enumerate()
            .map(|(i, value)| value.map(|v| (center(i), frame.y(v))))
            .collect();
        let lines: Vec<Line> = Line::segments(&points, &Self::line_color())
            .into_iter()
            .map(|line| line.with_stroke_width(2.0))
            .collect();
        svg.push_all(&lines);

        let labels = self
            .dates
            .iter()
            .enumerate()
            .map(|(i, date)| {
                let pos = (i as f64 + 0.5) / count as f64;
                let text = if self.is_labelled(i) {
                    date.format(DATE_LABEL_FORMAT).to_string()
                } else {
                    String::new()
                };
                (pos, text)
            })
            .collect();
        svg.push(
            &Axis::horizontal(frame.left, frame.bottom, frame.width())
                .with_font_size(TICK_FONT_SIZE)
                .with_vertical_labels(true)
                .with_labels(labels),
        );

        frame.legend(
            &mut svg,
            &[
                (self.bar_name.clone(), LegendMark::Bar, Self::bar_color()),
                (self.line_name.clone(), LegendMark::Line, Self::line_color()),
            ],
        );

        svg.build()
    }
}

#[cfg(test)]
#[path = "daily_chart_tests.rs"]
mod tests;
