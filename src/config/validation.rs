//! Configuration semantic validation.
//!
//! Checks values that parse but cannot produce a report.

use crate::compose::{PageSize, Rect};
use crate::{ReportError, Result};

use super::model::{CONFIG_VERSION, ReportConfig};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns `ReportError::Config` naming the first offending field.
pub fn validate_config_semantics(config: &ReportConfig) -> Result<()> {
    validate_version(config)?;
    validate_countries(config)?;
    validate_render_section(config)?;
    validate_layout(config)?;
    Ok(())
}

/// Validate config version. Returns an error if version is unsupported.
pub fn validate_version(config: &ReportConfig) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(ReportError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_countries(config: &ReportConfig) -> Result<()> {
    if config.countries.is_empty() {
        return Err(ReportError::Config(
            "countries must list at least one country of interest".to_string(),
        ));
    }
    if let Some(i) = config.countries.iter().position(|c| c.trim().is_empty()) {
        return Err(ReportError::Config(format!("countries[{i}] is empty")));
    }
    Ok(())
}

fn validate_render_section(config: &ReportConfig) -> Result<()> {
    let render = &config.render;
    if render.dpi == 0 {
        return Err(ReportError::Config(
            "render.dpi must be greater than 0".to_string(),
        ));
    }
    let windows = [
        ("render.daily_window", render.daily_window),
        ("render.table_window", render.table_window),
        ("render.label_every", render.label_every),
    ];
    for (field, value) in windows {
        if value == 0 {
            return Err(ReportError::Config(format!(
                "{field} must be greater than 0"
            )));
        }
    }
    Ok(())
}

fn validate_layout(config: &ReportConfig) -> Result<()> {
    let mut rects: Vec<(String, Rect)> = Vec::new();
    for (section, page) in [("summary", &config.summary), ("rates", &config.rates)] {
        for (i, chart) in page.charts.iter().enumerate() {
            rects.push((format!("{section}.charts[{i}].rect"), chart.rect));
        }
    }
    let country = &config.country;
    rects.push(("country.daily_cases.rect".to_string(), country.daily_cases.rect));
    rects.push(("country.daily_deaths.rect".to_string(), country.daily_deaths.rect));
    rects.push(("country.positivity.rect".to_string(), country.positivity.rect));
    rects.push(("country.table.rect".to_string(), country.table.rect));

    let page = PageSize::A4;
    for (field, rect) in rects {
        if !rect.fits(page) {
            return Err(ReportError::Config(format!(
                "{field} {rect} lies outside the {}x{}mm page",
                page.width, page.height
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
