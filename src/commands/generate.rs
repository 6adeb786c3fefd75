use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::artifact::{ArtifactStore, DirArtifactStore, MemoryArtifactStore};
use crate::cli::{Cli, GenerateArgs};
use crate::config::{ReportConfig, validate_config_semantics};
use crate::dataset::{CountrySet, load_csv};
use crate::output::OutputFormat;
use crate::pipeline::ReportPipeline;
use crate::{EXIT_SUCCESS, ReportError, Result};

use super::{exit_code_for, load_config};

#[must_use]
pub fn run_generate(args: &GenerateArgs, cli: &Cli) -> i32 {
    match run_generate_impl(args, cli) {
        Ok(path) => {
            if !cli.quiet {
                println!("Report written to {}", path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

/// Load config and data, run the pipeline and write the document.
///
/// # Errors
/// Returns configuration, data, rendering, layout or I/O errors; nothing is
/// written unless every step succeeds.
pub fn run_generate_impl(args: &GenerateArgs, cli: &Cli) -> Result<PathBuf> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?.config;
    apply_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    let countries = CountrySet::new(config.countries.iter())?;

    let dataset = load_csv(&args.input, &config.data.columns)?;
    info!(
        path = %args.input.display(),
        rows = dataset.len(),
        countries = dataset.countries().len(),
        columns = dataset.columns().len(),
        "Loaded dataset"
    );

    let as_of = args.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let mut store: Box<dyn ArtifactStore> = match &config.artifact_dir {
        Some(dir) => Box::new(DirArtifactStore::create(dir)?),
        None => Box::new(MemoryArtifactStore::new()),
    };

    let document = ReportPipeline::new(&dataset, &countries, &config, as_of)
        .with_parallel(!args.sequential)
        .with_quiet(cli.quiet)
        .run(store.as_mut())?;

    let content = args.format.formatter().format(&document, store.as_ref())?;
    let output_path = args.output.clone().unwrap_or_else(|| {
        config
            .output_dir
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
            .join(default_output_name(&config.title, as_of, args.format))
    });
    write_document(&output_path, &content)?;
    info!(
        path = %output_path.display(),
        pages = document.page_count(),
        bytes = content.len(),
        "Wrote report"
    );

    Ok(output_path)
}

/// `<title> <as-of>.<ext>`.
#[must_use]
pub fn default_output_name(title: &str, as_of: NaiveDate, format: OutputFormat) -> String {
    format!("{title} {as_of}.{}", format.extension())
}

fn apply_overrides(config: &mut ReportConfig, args: &GenerateArgs) {
    if let Some(countries) = &args.countries {
        config.countries.clone_from(countries);
    }
    if let Some(dpi) = args.dpi {
        config.render.dpi = dpi;
    }
    if let Some(dir) = &args.artifacts_dir {
        config.artifact_dir = Some(dir.clone());
    }
}

fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::FileWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| ReportError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
