//! Integration tests for configuration discovery and validation.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn local_config_sets_countries_and_title() {
    let fixture = TestFixture::new();
    let input = fixture.create_dataset(&["Austria", "Canada", "Peru"], 10);
    fixture.create_config(
        r#"
title = "Andean Brief"
author = "Regional Desk"
countries = ["Peru"]

[render]
dpi = 72
"#,
    );

    epi_report!()
        .current_dir(fixture.path())
        .args(["-q", "generate"])
        .arg(&input)
        .args(["--as-of", "2021-01-10"])
        .assert()
        .success();

    let html =
        std::fs::read_to_string(fixture.path().join("Andean Brief 2021-01-10.html")).unwrap();
    assert!(html.contains("Andean Brief as of 2021-01-10"));
    assert!(html.contains("Prepared by Regional Desk"));
    assert!(html.contains("Peru COVID-19 Statistics"));
    assert!(!html.contains("Austria COVID-19 Statistics"));
}

#[test]
fn no_config_ignores_local_file() {
    let fixture = TestFixture::new();
    let input = fixture.create_dataset(&["Austria"], 10);
    fixture.create_config("countries = []\n");

    epi_report!()
        .current_dir(fixture.path())
        .args(["--no-config", "-q", "generate"])
        .arg(&input)
        .args(["--countries", "Austria", "--dpi", "72", "-o", "out.html"])
        .assert()
        .success();
}

#[test]
fn empty_country_list_is_rejected() {
    let fixture = TestFixture::new();
    let input = fixture.create_dataset(&["Austria"], 10);
    fixture.create_config("countries = []\n");

    epi_report!()
        .current_dir(fixture.path())
        .args(["generate"])
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_key_is_rejected() {
    let fixture = TestFixture::new();
    let input = fixture.create_dataset(&["Austria"], 10);
    fixture.create_file("custom.toml", "colour = \"blue\"\n");

    epi_report!()
        .current_dir(fixture.path())
        .args(["generate"])
        .arg(&input)
        .args(["--config", "custom.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("colour"));
}

#[test]
fn rect_outside_page_is_rejected() {
    let fixture = TestFixture::new();
    let input = fixture.create_dataset(&["Austria"], 10);
    fixture.create_config(
        r#"
[country.table]
title = "Daily Change"
rect = { x = 150.0, y = 107.0, w = 89.0, h = 89.0 }
"#,
    );

    epi_report!()
        .current_dir(fixture.path())
        .args(["generate"])
        .arg(&input)
        .args(["--countries", "Austria"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("country.table"));
}

#[test]
fn unsupported_version_is_rejected() {
    let fixture = TestFixture::new();
    let input = fixture.create_dataset(&["Austria"], 10);
    fixture.create_config("version = \"9\"\n");

    epi_report!()
        .current_dir(fixture.path())
        .args(["generate"])
        .arg(&input)
        .assert()
        .code(2);
}
