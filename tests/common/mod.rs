#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the epi-report binary.
#[macro_export]
macro_rules! epi_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("epi-report"))
    };
}

pub const DATASET_COLUMNS: [&str; 12] = [
    "total_cases",
    "new_cases",
    "new_cases_smoothed",
    "total_deaths",
    "new_deaths",
    "new_deaths_smoothed",
    "total_cases_per_million",
    "total_deaths_per_million",
    "total_tests",
    "new_tests",
    "total_tests_per_thousand",
    "positive_rate",
];

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates an epi-report config file in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".epi-report.toml", content);
    }

    /// Writes `owid.csv` with every dataset column filled for `days` days
    /// per country, starting 2021-01-01. Returns its path.
    pub fn create_dataset(&self, countries: &[&str], days: u32) -> PathBuf {
        let mut content = format!("iso_code,location,date,{}\n", DATASET_COLUMNS.join(","));
        for (idx, country) in countries.iter().enumerate() {
            let scale = f64::from(u32::try_from(idx).unwrap() + 1);
            for day in 0..days {
                let date = chrono::NaiveDate::from_ymd_opt(2021, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(u64::from(day)))
                    .unwrap();
                let d = f64::from(day);
                let values: Vec<String> = DATASET_COLUMNS
                    .iter()
                    .map(|column| synthetic_value(column, scale, d).to_string())
                    .collect();
                let _ = writeln!(content, "XXX,{country},{date},{}", values.join(","));
            }
        }
        self.create_file("owid.csv", &content);
        self.path().join("owid.csv")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn synthetic_value(column: &str, scale: f64, day: f64) -> f64 {
    match column {
        "positive_rate" => 0.01f64.mul_add(scale, 0.0005 * day),
        c if c.starts_with("new_") => 100.0f64.mul_add(scale, day),
        c if c.ends_with("per_million") || c.ends_with("per_thousand") => scale * day,
        _ => 1000.0 * scale * (day + 1.0),
    }
}
