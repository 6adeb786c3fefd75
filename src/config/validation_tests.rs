use super::*;
use crate::compose::Rect;

#[test]
fn default_config_is_valid() {
    validate_config_semantics(&ReportConfig::default()).unwrap();
}

#[test]
fn unsupported_version_is_rejected() {
    let config = ReportConfig {
        version: Some("2".to_string()),
        ..ReportConfig::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '2'"));
}

#[test]
fn empty_country_list_is_rejected() {
    let config = ReportConfig {
        countries: Vec::new(),
        ..ReportConfig::default()
    };
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn blank_country_is_rejected() {
    let config = ReportConfig {
        countries: vec!["Spain".to_string(), "  ".to_string()],
        ..ReportConfig::default()
    };
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("countries[1]"));
}

#[test]
fn zero_label_every_is_rejected() {
    let mut config = ReportConfig::default();
    config.render.label_every = 0;
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("render.label_every"));
}

#[test]
fn zero_dpi_is_rejected() {
    let mut config = ReportConfig::default();
    config.render.dpi = 0;
    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn rect_off_the_page_is_rejected() {
    let mut config = ReportConfig::default();
    config.country.table.rect = Rect::new(150.0, 107.0, 89.0, 89.0);
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("country.table.rect"));
    assert!(err.is_config_error());
}

#[test]
fn summary_chart_rect_is_checked() {
    let mut config = ReportConfig::default();
    config.summary.charts[2].rect.y = 250.0;
    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("summary.charts[2].rect"));
}
