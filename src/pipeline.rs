//! Plan, render, compose: the three phases of one report run.

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::artifact::{ArtifactId, ArtifactStore};
use crate::compose::{Align, PageComposer, Rect, ReportDocument, TextStyle};
use crate::config::{ComparisonPage, ReportConfig};
use crate::dataset::{CountrySet, Dataset, SeriesSelector};
use crate::error::Result;
use crate::output::RenderProgress;
use crate::render::{ChartRenderer, ChartRequest, Rasterizer};

const CLOSING_HEADING: &str = "Countries Available for Report";

const HEADING_RECT: Rect = Rect::new(10.0, 10.0, 190.0, 8.0);
const AUTHOR_RECT: Rect = Rect::new(10.0, 20.0, 190.0, 8.0);
const INTRO_RECT: Rect = Rect::new(10.0, 40.0, 190.0, 7.0);
const SUMMARY_HEADING_RECT: Rect = Rect::new(10.0, 98.0, 190.0, 8.0);
const COUNTRY_LIST_RECT: Rect = Rect::new(10.0, 20.0, 190.0, 7.0);

const TITLE_SIZE: f64 = 26.0;
const AUTHOR_SIZE: f64 = 20.0;
const HEADING_SIZE: f64 = 18.0;
const BODY_SIZE: f64 = 12.0;

/// A chart request and the rectangle its artifact occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub request: ChartRequest,
    pub rect: Rect,
}

/// One report run over a fully loaded dataset.
///
/// Every artifact is rendered and stored before composition starts; pages
/// only ever hold artifact identities.
#[derive(Debug, Clone, Copy)]
pub struct ReportPipeline<'a> {
    dataset: &'a Dataset,
    countries: &'a CountrySet,
    config: &'a ReportConfig,
    as_of: NaiveDate,
    parallel: bool,
    quiet: bool,
}

impl<'a> ReportPipeline<'a> {
    #[must_use]
    pub const fn new(
        dataset: &'a Dataset,
        countries: &'a CountrySet,
        config: &'a ReportConfig,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            dataset,
            countries,
            config,
            as_of,
            parallel: true,
            quiet: false,
        }
    }

    /// Render on the rayon pool (default) or one request at a time.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Hide the progress bar.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Placements of the title page charts.
    #[must_use]
    pub fn summary_placements(&self) -> Vec<Placement> {
        overlay_placements(&self.config.summary)
    }

    /// Placements of the rate comparison page charts.
    #[must_use]
    pub fn rate_placements(&self) -> Vec<Placement> {
        overlay_placements(&self.config.rates)
    }

    /// Placements of one country page, top to bottom.
    #[must_use]
    pub fn country_placements(&self, country: &str) -> Vec<Placement> {
        let page = &self.config.country;
        let daily = |panel: &crate::config::DailyPanel| Placement {
            request: ChartRequest::Daily {
                country: country.to_string(),
                bar_metric: panel.bar_metric.clone(),
                line_metric: panel.line_metric.clone(),
                bar_legend: panel.legend.clone(),
                y_label: panel.label.clone(),
                title: panel.title.clone(),
            },
            rect: panel.rect,
        };

        vec![
            daily(&page.daily_cases),
            Placement {
                request: ChartRequest::Rate {
                    country: country.to_string(),
                    metric: page.positivity.metric.clone(),
                    y_label: page.positivity.label.clone(),
                    title: page.positivity.title.clone(),
                },
                rect: page.positivity.rect,
            },
            Placement {
                request: ChartRequest::Table {
                    country: country.to_string(),
                    title: page.table.title.clone(),
                },
                rect: page.table.rect,
            },
            daily(&page.daily_deaths),
        ]
    }

    /// Every chart the report needs, in page order.
    #[must_use]
    pub fn plan(&self) -> Vec<ChartRequest> {
        let mut placements = self.summary_placements();
        placements.extend(self.rate_placements());
        for country in self.countries.iter() {
            placements.extend(self.country_placements(country));
        }
        placements.into_iter().map(|p| p.request).collect()
    }

    /// Render every planned chart into `store`.
    ///
    /// Renders run in parallel unless disabled; stores happen sequentially in
    /// plan order either way. The first failing request aborts the run.
    ///
    /// # Errors
    /// Returns the first rendering or store error in plan order.
    pub fn render_all(&self, store: &mut dyn ArtifactStore) -> Result<Vec<ArtifactId>> {
        for country in self.countries.iter() {
            if !self.dataset.has_country(country) {
                warn!(country, "Country of interest is not present in the dataset");
            }
        }

        let plan = self.plan();
        let rasterizer = Rasterizer::new();
        let renderer = ChartRenderer::new(
            SeriesSelector::new(self.dataset),
            self.countries,
            self.config.render,
            &rasterizer,
        );
        let progress = RenderProgress::new(plan.len() as u64, self.quiet);
        info!(
            charts = plan.len(),
            parallel = self.parallel,
            dpi = self.config.render.dpi,
            "Rendering charts"
        );

        let ids = if self.parallel {
            let rendered: Vec<_> = plan
                .par_iter()
                .map(|request| {
                    let artifact = renderer.render(request);
                    progress.inc();
                    artifact
                })
                .collect();
            progress.finish();

            let mut ids = Vec::with_capacity(rendered.len());
            for artifact in rendered {
                let artifact = artifact?;
                ids.push(artifact.id.clone());
                store.put(artifact)?;
            }
            ids
        } else {
            let mut ids = Vec::with_capacity(plan.len());
            for request in &plan {
                let id = renderer.render_into(request, store);
                progress.inc();
                ids.push(id?);
            }
            progress.finish();
            ids
        };

        info!(artifacts = ids.len(), "Rendered charts");
        Ok(ids)
    }

    /// Lay out the pages in their fixed order and seal the document.
    ///
    /// # Errors
    /// Returns `ArtifactNotFound` if a planned chart is missing from `store`,
    /// or a layout error for a rectangle outside the page.
    pub fn compose(&self, store: &dyn ArtifactStore) -> Result<ReportDocument> {
        let config = self.config;
        let mut composer = PageComposer::new(store)
            .with_title(format!("{} {}", config.title, self.as_of))
            .with_footer(format!("Retrieved on: {}", self.as_of));

        composer.add_page()?;
        composer.place_text(
            HEADING_RECT,
            format!("{} as of {}", config.title, self.as_of),
            TextStyle::bold(TITLE_SIZE),
            Align::Center,
        )?;
        if let Some(author) = &config.author {
            composer.place_text(
                AUTHOR_RECT,
                format!("Prepared by {author}"),
                TextStyle::bold(AUTHOR_SIZE),
                Align::Center,
            )?;
        }
        if !config.intro.is_empty() {
            composer.place_text(
                INTRO_RECT,
                config.intro.clone(),
                TextStyle::regular(BODY_SIZE),
                Align::Left,
            )?;
        }
        composer.place_text(
            SUMMARY_HEADING_RECT,
            config.summary.heading.clone(),
            TextStyle::bold(HEADING_SIZE),
            Align::Center,
        )?;
        place_all(&mut composer, &self.summary_placements())?;

        composer.add_page()?;
        place_heading(&mut composer, config.rates.heading.clone())?;
        place_all(&mut composer, &self.rate_placements())?;

        for country in self.countries.iter() {
            composer.add_page()?;
            place_heading(&mut composer, config.country.heading_for(country))?;
            place_all(&mut composer, &self.country_placements(country))?;
        }

        composer.add_page()?;
        place_heading(&mut composer, CLOSING_HEADING.to_string())?;
        let all_countries: Vec<&str> = self.dataset.countries().iter().map(String::as_str).collect();
        composer.place_text(
            COUNTRY_LIST_RECT,
            all_countries.join(", "),
            TextStyle::regular(BODY_SIZE),
            Align::Left,
        )?;

        let document = composer.seal()?;
        info!(
            pages = document.page_count(),
            artifacts = document.artifact_ids().len(),
            "Composed report"
        );
        Ok(document)
    }

    /// Render everything, then compose.
    ///
    /// # Errors
    /// Returns the first rendering, store or layout error.
    pub fn run(&self, store: &mut dyn ArtifactStore) -> Result<ReportDocument> {
        self.render_all(store)?;
        self.compose(store)
    }
}

fn overlay_placements(page: &ComparisonPage) -> Vec<Placement> {
    page.charts
        .iter()
        .map(|chart| Placement {
            request: ChartRequest::Overlay {
                metric: chart.metric.clone(),
                y_label: chart.label.clone(),
                title: chart.title.clone(),
            },
            rect: chart.rect,
        })
        .collect()
}

fn place_heading(composer: &mut PageComposer<'_>, text: String) -> Result<()> {
    composer.place_text(
        HEADING_RECT,
        text,
        TextStyle::bold(HEADING_SIZE),
        Align::Center,
    )
}

fn place_all(composer: &mut PageComposer<'_>, placements: &[Placement]) -> Result<()> {
    for placement in placements {
        composer.place_artifact(&placement.request.id(), placement.rect)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
