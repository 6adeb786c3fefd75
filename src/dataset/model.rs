use chrono::NaiveDate;
use indexmap::IndexSet;

use crate::error::{DataError, ReportError, Result};

/// Column names used by the default report.
pub mod columns {
    pub const TOTAL_CASES: &str = "total_cases";
    pub const NEW_CASES: &str = "new_cases";
    pub const NEW_CASES_SMOOTHED: &str = "new_cases_smoothed";
    pub const TOTAL_DEATHS: &str = "total_deaths";
    pub const NEW_DEATHS: &str = "new_deaths";
    pub const NEW_DEATHS_SMOOTHED: &str = "new_deaths_smoothed";
    pub const TOTAL_CASES_PER_MILLION: &str = "total_cases_per_million";
    pub const TOTAL_DEATHS_PER_MILLION: &str = "total_deaths_per_million";
    pub const TOTAL_TESTS: &str = "total_tests";
    pub const NEW_TESTS: &str = "new_tests";
    pub const TOTAL_TESTS_PER_THOUSAND: &str = "total_tests_per_thousand";
    pub const POSITIVE_RATE: &str = "positive_rate";
}

/// One (country, date) observation. `values` is parallel to [`Dataset::columns`].
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub country: String,
    pub date: NaiveDate,
    pub values: Vec<Option<f64>>,
}

impl Row {
    #[must_use]
    pub fn new(country: impl Into<String>, date: NaiveDate, values: Vec<Option<f64>>) -> Self {
        Self {
            country: country.into(),
            date,
            values,
        }
    }
}

/// Complete, read-only time series for every country in the source.
///
/// Rows keep their input order. Within a country that order is chronological;
/// nothing is assumed about ordering across countries.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
    countries: IndexSet<String>,
}

impl Dataset {
    /// Build a dataset from numeric column names and rows.
    ///
    /// # Errors
    /// Returns [`DataError::Malformed`] if a row's value count does not match the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.values.len() != columns.len())
        {
            return Err(DataError::Malformed {
                line: idx + 1,
                message: format!(
                    "{} {} has {} values, expected {}",
                    row.country,
                    row.date,
                    row.values.len(),
                    columns.len()
                ),
            }
            .into());
        }

        let countries = rows.iter().map(|row| row.country.clone()).collect();
        Ok(Self {
            columns,
            rows,
            countries,
        })
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column in each row's `values`. Case-sensitive.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Every country present, in order of first appearance.
    #[must_use]
    pub const fn countries(&self) -> &IndexSet<String> {
        &self.countries
    }

    #[must_use]
    pub fn has_country(&self, country: &str) -> bool {
        self.countries.contains(country)
    }

    /// Rows for one country, in dataset order.
    pub fn rows_for<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a Row> + 'a {
        self.rows.iter().filter(move |row| row.country == country)
    }
}

/// Ordered countries of interest. Order drives legend order and page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySet {
    countries: IndexSet<String>,
}

impl CountrySet {
    /// Build a set from names; duplicates keep their first position.
    ///
    /// # Errors
    /// Returns an error if no country is given or a name is blank.
    pub fn new<I, S>(countries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for country in countries {
            let country = country.into();
            let trimmed = country.trim();
            if trimmed.is_empty() {
                return Err(ReportError::Config(
                    "country names must not be empty".to_string(),
                ));
            }
            set.insert(trimmed.to_string());
        }

        if set.is_empty() {
            return Err(ReportError::Config(
                "at least one country of interest is required".to_string(),
            ));
        }

        Ok(Self { countries: set })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, country: &str) -> bool {
        self.countries.contains(country)
    }

    /// Position in legend/page order.
    #[must_use]
    pub fn position(&self, country: &str) -> Option<usize> {
        self.countries.get_index_of(country)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
