use super::*;
use crate::artifact::MemoryArtifactStore;
use crate::compose::Directive;
use crate::error::{DataError, LayoutError, ReportError};
use crate::test_support::{country_set, png_size, synthetic_dataset};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 10).unwrap()
}

fn low_dpi_config() -> ReportConfig {
    let mut config = ReportConfig::default();
    config.render.dpi = 40;
    config
}

fn texts(document: &ReportDocument, page: usize) -> Vec<&str> {
    document.pages[page]
        .directives
        .iter()
        .filter_map(|d| match d {
            Directive::Text { text, .. } => Some(text.as_str()),
            Directive::Artifact { .. } => None,
        })
        .collect()
}

#[test]
fn plan_lists_comparison_charts_then_each_country() {
    let dataset = synthetic_dataset(&["Austria", "Canada"], 10);
    let countries = country_set(&["Canada", "Austria"]);
    let config = low_dpi_config();
    let pipeline = ReportPipeline::new(&dataset, &countries, &config, as_of());

    let plan = pipeline.plan();

    assert_eq!(plan.len(), 6 + 2 * 4);
    assert_eq!(plan[0].id(), ArtifactId::chart("Total Cases by Country"));
    assert_eq!(
        plan[3].id(),
        ArtifactId::chart("Total Cases Per Million by Country")
    );
    assert_eq!(plan[6].id(), ArtifactId::for_country("Daily New Cases", "Canada"));
    assert_eq!(
        plan[13].id(),
        ArtifactId::for_country("Daily New Deaths", "Austria")
    );
}

#[test]
fn country_page_order_is_cases_positivity_table_deaths() {
    let dataset = synthetic_dataset(&["Spain"], 3);
    let countries = country_set(&["Spain"]);
    let config = low_dpi_config();
    let pipeline = ReportPipeline::new(&dataset, &countries, &config, as_of());

    let ops: Vec<_> = pipeline
        .country_placements("Spain")
        .iter()
        .map(|p| p.request.operation())
        .collect();

    assert_eq!(ops, vec!["daily", "rate", "table", "daily"]);
}

#[test]
fn end_to_end_two_countries_yields_five_pages() {
    let dataset = synthetic_dataset(&["Austria", "Canada"], 10);
    let countries = country_set(&["Austria", "Canada"]);
    let config = low_dpi_config();
    let mut store = MemoryArtifactStore::new();

    let document = ReportPipeline::new(&dataset, &countries, &config, as_of())
        .with_quiet(true)
        .run(&mut store)
        .unwrap();

    assert_eq!(document.page_count(), 5);
    assert_eq!(document.title, "COVID-19 Report 2021-01-10");
    assert!(texts(&document, 0).contains(&"COVID-19 Report as of 2021-01-10"));
    assert!(texts(&document, 1).contains(&"Country Rate Comparison"));
    assert!(texts(&document, 2).contains(&"Austria COVID-19 Statistics"));
    assert!(texts(&document, 3).contains(&"Canada COVID-19 Statistics"));
    assert!(texts(&document, 4).contains(&"Countries Available for Report"));
    assert!(texts(&document, 4).contains(&"Austria, Canada"));

    let ids = document.artifact_ids();
    assert_eq!(ids.len(), 14);
    for id in ids {
        assert!(store.get(id).is_ok(), "{id} should resolve");
    }
    let overlay = store
        .get(&ArtifactId::chart("Total Cases by Country"))
        .unwrap();
    assert_eq!(png_size(&overlay.png), (440, 200));
}

#[test]
fn every_page_carries_footer() {
    let dataset = synthetic_dataset(&["Austria"], 10);
    let countries = country_set(&["Austria"]);
    let config = low_dpi_config();
    let mut store = MemoryArtifactStore::new();

    let document = ReportPipeline::new(&dataset, &countries, &config, as_of())
        .with_quiet(true)
        .run(&mut store)
        .unwrap();

    for (idx, page) in document.pages.iter().enumerate() {
        let page_texts = texts(&document, idx);
        assert!(page_texts.contains(&"Retrieved on: 2021-01-10"));
        assert_eq!(page_texts.last(), Some(&format!("Page {}", page.number).as_str()));
    }
}

#[test]
fn author_line_only_when_configured() {
    let dataset = synthetic_dataset(&["Austria"], 5);
    let countries = country_set(&["Austria"]);
    let mut store = MemoryArtifactStore::new();

    let config = low_dpi_config();
    let document = ReportPipeline::new(&dataset, &countries, &config, as_of())
        .with_quiet(true)
        .run(&mut store)
        .unwrap();
    assert!(!texts(&document, 0).iter().any(|t| t.starts_with("Prepared by")));

    let config = ReportConfig {
        author: Some("Jane Analyst".to_string()),
        ..low_dpi_config()
    };
    let document = ReportPipeline::new(&dataset, &countries, &config, as_of())
        .with_quiet(true)
        .run(&mut store)
        .unwrap();
    assert!(texts(&document, 0).contains(&"Prepared by Jane Analyst"));
}

#[test]
fn closing_page_lists_all_dataset_countries() {
    let dataset = synthetic_dataset(&["Austria", "Canada", "Peru"], 5);
    let countries = country_set(&["Peru"]);
    let config = low_dpi_config();
    let mut store = MemoryArtifactStore::new();

    let document = ReportPipeline::new(&dataset, &countries, &config, as_of())
        .with_quiet(true)
        .run(&mut store)
        .unwrap();

    assert_eq!(document.page_count(), 4);
    assert!(texts(&document, 3).contains(&"Austria, Canada, Peru"));
}

#[test]
fn sequential_and_parallel_render_identical_artifacts() {
    let dataset = synthetic_dataset(&["Austria", "Canada"], 12);
    let countries = country_set(&["Austria", "Canada"]);
    let config = low_dpi_config();

    let mut parallel = MemoryArtifactStore::new();
    let mut sequential = MemoryArtifactStore::new();
    let pipeline = ReportPipeline::new(&dataset, &countries, &config, as_of()).with_quiet(true);
    let parallel_ids = pipeline.render_all(&mut parallel).unwrap();
    let sequential_ids = pipeline
        .with_parallel(false)
        .render_all(&mut sequential)
        .unwrap();

    assert_eq!(parallel_ids, sequential_ids);
    assert_eq!(parallel.ids(), sequential.ids());
    for id in parallel.ids() {
        assert_eq!(parallel.get(&id).unwrap(), sequential.get(&id).unwrap());
    }
}

#[test]
fn missing_country_aborts_before_composition() {
    let dataset = synthetic_dataset(&["Austria"], 5);
    let countries = country_set(&["Austria", "Atlantis"]);
    let config = low_dpi_config();
    let mut store = MemoryArtifactStore::new();

    let err = ReportPipeline::new(&dataset, &countries, &config, as_of())
        .with_quiet(true)
        .run(&mut store)
        .unwrap_err();

    assert!(matches!(
        err,
        ReportError::Render {
            source: DataError::EmptyCountry { .. },
            ..
        }
    ));
}

#[test]
fn compose_without_rendering_reports_missing_artifact() {
    let dataset = synthetic_dataset(&["Austria"], 5);
    let countries = country_set(&["Austria"]);
    let config = low_dpi_config();
    let store = MemoryArtifactStore::new();

    let err = ReportPipeline::new(&dataset, &countries, &config, as_of())
        .compose(&store)
        .unwrap_err();

    assert!(matches!(err, ReportError::ArtifactNotFound(ref id) if id.title() == "Total Cases by Country"));
}

#[test]
fn rect_off_the_page_is_a_layout_error() {
    let dataset = synthetic_dataset(&["Austria"], 5);
    let countries = country_set(&["Austria"]);
    let mut config = low_dpi_config();
    config.country.table.rect = Rect::new(150.0, 107.0, 89.0, 89.0);
    let mut store = MemoryArtifactStore::new();

    let err = ReportPipeline::new(&dataset, &countries, &config, as_of())
        .with_quiet(true)
        .run(&mut store)
        .unwrap_err();

    assert!(matches!(
        err,
        ReportError::Layout(LayoutError::OutOfBounds { .. })
    ));
}
