use tracing::debug;

use super::raster::{Chart, Rasterizer};
use super::request::{ChartRequest, RenderSettings, SMOOTHED_LEGEND};
use super::svg::{
    Canvas, ChartColor, DailyBarChart, DatedSeries, SvgElement, TableChart, TimeLineChart,
    YFormat, format_count,
};
use crate::artifact::{Artifact, ArtifactId, ArtifactStore};
use crate::dataset::{CountrySet, Series, SeriesSelector, Window, columns};
use crate::error::{DataError, ReportError, Result};

/// Canvas sizes in inches.
const OVERLAY_SIZE: (f64, f64) = (11.0, 5.0);
const DAILY_SIZE: (f64, f64) = (11.0, 5.0);
const RATE_SIZE: (f64, f64) = (6.0, 5.0);
const TABLE_SIZE: (f64, f64) = (5.0, 5.0);

const TABLE_HEADERS: [&str; 4] = ["Date", "Cases", "Tests", "Deaths"];
const TABLE_METRICS: [&str; 3] = [columns::NEW_CASES, columns::NEW_TESTS, columns::NEW_DEATHS];
const TABLE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Turns chart requests into PNG artifacts.
///
/// Each request is drawn as SVG on a canvas sized in inches, then rasterized
/// at `settings.dpi`. Output is a pure function of the dataset, the country
/// set, the settings and the fonts: the same inputs always produce
/// byte-identical images. Every data problem fails the request; nothing is
/// drawn blank.
#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer<'a> {
    selector: SeriesSelector<'a>,
    countries: &'a CountrySet,
    settings: RenderSettings,
    rasterizer: &'a Rasterizer,
}

impl<'a> ChartRenderer<'a> {
    #[must_use]
    pub const fn new(
        selector: SeriesSelector<'a>,
        countries: &'a CountrySet,
        settings: RenderSettings,
        rasterizer: &'a Rasterizer,
    ) -> Self {
        Self {
            selector,
            countries,
            settings,
            rasterizer,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Draw and rasterize any request.
    ///
    /// # Errors
    /// Returns `ReportError::Render` when the data cannot back the chart, or
    /// `ReportError::Raster` when the drawing cannot be rasterized.
    pub fn render(&self, request: &ChartRequest) -> Result<Artifact> {
        let chart = self.draw(request)?;
        self.rasterizer.rasterize(&chart)
    }

    /// Draw any request as SVG without rasterizing it.
    ///
    /// # Errors
    /// Returns `ReportError::Render` when the data cannot back the chart.
    pub fn draw(&self, request: &ChartRequest) -> Result<Chart> {
        match request {
            ChartRequest::Overlay {
                metric,
                y_label,
                title,
            } => self.overlay(metric, y_label, title),
            ChartRequest::Daily {
                country,
                bar_metric,
                line_metric,
                bar_legend,
                y_label,
                title,
            } => self.daily(country, bar_metric, line_metric, bar_legend, y_label, title),
            ChartRequest::Rate {
                country,
                metric,
                y_label,
                title,
            } => self.rate(country, metric, y_label, title),
            ChartRequest::Table { country, title } => self.table(country, title),
        }
    }

    /// Render a request and store the result under the request's identity.
    ///
    /// # Errors
    /// Returns rendering errors, or the store's error if the put fails.
    pub fn render_into(
        &self,
        request: &ChartRequest,
        store: &mut dyn ArtifactStore,
    ) -> Result<ArtifactId> {
        let artifact = self.render(request)?;
        let id = artifact.id.clone();
        debug!(artifact = %id, bytes = artifact.png.len(), "Rendered artifact");
        store.put(artifact)?;
        Ok(id)
    }

    /// One line per country of interest over the full history of `metric`.
    ///
    /// # Errors
    /// Fails if any country has no rows, lacks the column, or has no values.
    pub fn overlay(&self, metric: &str, y_label: &str, title: &str) -> Result<Chart> {
        const OP: &str = "overlay";

        let mut lines = Vec::with_capacity(self.countries.len());
        for country in self.countries.iter() {
            let series = self.select(OP, country, metric, &[metric], Window::Full)?;
            let values = Self::require(OP, &series, metric)?.to_vec();
            lines.push(DatedSeries::new(country, series.dates, values));
        }

        let canvas = self.canvas(OVERLAY_SIZE);
        let chart = TimeLineChart::new(title, y_label, lines, canvas);
        Ok(Chart {
            id: ArtifactId::chart(title),
            svg: chart.render(),
            canvas,
        })
    }

    /// Bars of `bar_metric` with `line_metric` drawn over them, last
    /// `daily_window` days.
    ///
    /// # Errors
    /// Fails if the country has no rows, or either metric is absent or empty.
    pub fn daily(
        &self,
        country: &str,
        bar_metric: &str,
        line_metric: &str,
        bar_legend: &str,
        y_label: &str,
        title: &str,
    ) -> Result<Chart> {
        const OP: &str = "daily";

        let window = Window::Last(self.settings.daily_window);
        let series = self.select(OP, country, bar_metric, &[bar_metric, line_metric], window)?;
        let bars = Self::require(OP, &series, bar_metric)?.to_vec();
        let line = Self::require(OP, &series, line_metric)?.to_vec();

        let chart = DailyBarChart {
            title: title.to_string(),
            y_label: y_label.to_string(),
            dates: series.dates,
            bars,
            line,
            bar_name: bar_legend.to_string(),
            line_name: SMOOTHED_LEGEND.to_string(),
            label_every: self.settings.label_every,
            canvas: self.canvas(DAILY_SIZE),
        };
        Ok(Chart {
            id: ArtifactId::for_country(title, country),
            svg: chart.render(),
            canvas: chart.canvas,
        })
    }

    /// A ratio metric over the country's full history, y axis in percent.
    ///
    /// # Errors
    /// Fails if the country has no rows, or the metric is absent or empty.
    pub fn rate(&self, country: &str, metric: &str, y_label: &str, title: &str) -> Result<Chart> {
        const OP: &str = "rate";

        let series = self.select(OP, country, metric, &[metric], Window::Full)?;
        let values = Self::require(OP, &series, metric)?.to_vec();

        let canvas = self.canvas(RATE_SIZE);
        let chart = TimeLineChart::new(
            title,
            y_label,
            vec![DatedSeries::new(country, series.dates, values)],
            canvas,
        )
        .with_y_format(YFormat::Percent)
        .with_legend(false)
        .with_color(ChartColor::hex("#ff0000"));
        Ok(Chart {
            id: ArtifactId::for_country(title, country),
            svg: chart.render(),
            canvas,
        })
    }

    /// Date, cases, tests and deaths for the last `table_window` days.
    ///
    /// Missing cells read `n/a`; only an absent column or an empty country fails.
    ///
    /// # Errors
    /// Fails if the country has no rows or a table column is absent.
    pub fn table(&self, country: &str, title: &str) -> Result<Chart> {
        const OP: &str = "table";

        let window = Window::Last(self.settings.table_window);
        let series = self.select(OP, country, &TABLE_METRICS.join(","), &TABLE_METRICS, window)?;

        let metrics = TABLE_METRICS
            .iter()
            .map(|metric| {
                series.column(metric).ok_or_else(|| {
                    ReportError::render(
                        OP,
                        country,
                        *metric,
                        DataError::MissingColumn {
                            column: (*metric).to_string(),
                        },
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let rows = series
            .dates
            .iter()
            .enumerate()
            .map(|(i, date)| {
                std::iter::once(date.format(TABLE_DATE_FORMAT).to_string())
                    .chain(metrics.iter().map(|values| format_count(values[i])))
                    .collect()
            })
            .collect();

        let canvas = self.canvas(TABLE_SIZE);
        let chart = TableChart::new(
            title,
            TABLE_HEADERS.iter().map(|h| (*h).to_string()).collect(),
            rows,
            canvas,
        );
        Ok(Chart {
            id: ArtifactId::for_country(title, country),
            svg: chart.render(),
            canvas,
        })
    }

    fn canvas(&self, (width, height): (f64, f64)) -> Canvas {
        Canvas::new(width, height, self.settings.dpi)
    }

    /// Select rows for a render, attaching render context to data errors.
    fn select(
        &self,
        operation: &'static str,
        country: &str,
        metric: &str,
        wanted: &[&str],
        window: Window,
    ) -> Result<Series> {
        let series = self
            .selector
            .select(country, wanted, window)
            .map_err(|err| match err {
                ReportError::Data(source) => ReportError::render(operation, country, metric, source),
                other => other,
            })?;
        if series.is_empty() {
            return Err(ReportError::render(
                operation,
                country,
                metric,
                DataError::EmptyCountry {
                    country: country.to_string(),
                },
            ));
        }
        Ok(series)
    }

    fn require<'s>(
        operation: &'static str,
        series: &'s Series,
        metric: &str,
    ) -> Result<&'s [Option<f64>]> {
        series
            .require(metric)
            .map_err(|source| ReportError::render(operation, &series.country, metric, source))
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
