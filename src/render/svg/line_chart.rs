//! Date-indexed line chart: cross-country comparisons and single-country rates.

use chrono::NaiveDate;

use super::builder::Canvas;
use super::element::{Axis, Line, SvgElement};
use super::frame::{LegendMark, Margins, PlotFrame, TICK_FONT_SIZE, YFormat, day_offset};
use super::scale::{LinearScale, date_ticks};
use super::style::ChartColor;

/// Most date labels drawn on the time axis.
const MAX_DATE_TICKS: usize = 8;

/// One named line of dated values. Missing values break the line.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedSeries {
    pub name: String,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<Option<f64>>,
}

impl DatedSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, dates: Vec<NaiveDate>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            dates,
            values,
        }
    }
}

/// Lines over a shared time axis.
///
/// Series are drawn and listed in the legend in the order given, each in
/// its own palette color unless a single color is forced.
#[derive(Debug)]
pub struct TimeLineChart {
    pub title: String,
    pub y_label: String,
    pub series: Vec<DatedSeries>,
    pub canvas: Canvas,
    pub y_format: YFormat,
    pub show_legend: bool,
    pub color: Option<ChartColor>,
    pub stroke_width: f64,
}

impl TimeLineChart {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        y_label: impl Into<String>,
        series: Vec<DatedSeries>,
        canvas: Canvas,
    ) -> Self {
        Self {
            title: title.into(),
            y_label: y_label.into(),
            series,
            canvas,
            y_format: YFormat::Thousands,
            show_legend: true,
            color: None,
            stroke_width: 1.5,
        }
    }

    #[must_use]
    pub const fn with_y_format(mut self, format: YFormat) -> Self {
        self.y_format = format;
        self
    }

    #[must_use]
    pub const fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Draw every series in one color with a heavier stroke.
    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self.stroke_width = 2.0;
        self
    }

    fn color_for(&self, index: usize) -> ChartColor {
        self.color
            .clone()
            .unwrap_or_else(|| ChartColor::palette(index))
    }

    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self.series.iter().flat_map(|s| s.dates.iter().copied());
        let first = dates.clone().min()?;
        let last = dates.max()?;
        Some((first, last))
    }
}

impl SvgElement for TimeLineChart {
    fn render(&self) -> String {
        let frame = PlotFrame::fit(
            self.canvas,
            Margins::default(),
            self.series.iter().flat_map(|s| s.values.iter()),
            self.y_format,
        );
        let mut svg = frame.builder(&self.title, &self.y_label);

        let Some((first, last)) = self.date_range() else {
            return svg.build();
        };
        let span = day_offset(first, last);
        let x = LinearScale::new((0.0, span), (frame.left, frame.right));

        let labels = date_ticks(first, last, MAX_DATE_TICKS)
            .into_iter()
            .map(|(date, text)| {
                let pos = if span > 0.0 { day_offset(first, date) / span } else { 0.5 };
                (pos, text)
            })
            .collect();
        svg.push(
            &Axis::horizontal(frame.left, frame.bottom, frame.width())
                .with_font_size(TICK_FONT_SIZE)
                .with_labels(labels),
        );

        for (i, series) in self.series.iter().enumerate() {
            let points: Vec<_> = series
                .dates
                .iter()
                .zip(&series.values)
                .map(|(date, value)| value.map(|v| (x.map(day_offset(first, *date)), frame.y(v))))
                .collect();
            let lines: Vec<Line> = Line::segments(&points, &self.color_for(i))
                .into_iter()
                .map(|line| line.with_stroke_width(self.stroke_width))
                .collect();
            svg.push_all(&lines);
        }

        if self.show_legend {
            let entries: Vec<_> = self
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| (s.name.clone(), LegendMark::Line, self.color_for(i)))
                .collect();
            frame.legend(&mut svg, &entries);
        }

        svg.build()
    }
}

#[cfg(test)]
#[path = "line_chart_tests.rs"]
mod tests;
