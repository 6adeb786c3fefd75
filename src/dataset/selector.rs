use chrono::NaiveDate;

use super::model::{CountrySet, Dataset};
use crate::error::{DataError, Result};

/// How much history a chart needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Every row of the country.
    Full,
    /// The most recent `n` rows; fewer if the country has fewer.
    Last(usize),
}

/// One country's rows restricted to a set of columns, stored column-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub country: String,
    pub dates: Vec<NaiveDate>,
    columns: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl Series {
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values of one selected column, aligned with `dates`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|idx| self.values[idx].as_slice())
    }

    /// Like [`Series::column`], but an unselected column or a column with no
    /// values at all is a [`DataError`].
    ///
    /// # Errors
    /// Returns `MissingColumn` or `NoValues`.
    pub fn require(&self, name: &str) -> std::result::Result<&[Option<f64>], DataError> {
        let values = self.column(name).ok_or_else(|| DataError::MissingColumn {
            column: name.to_string(),
        })?;
        if values.iter().all(Option::is_none) {
            return Err(DataError::NoValues {
                country: self.country.clone(),
                column: name.to_string(),
            });
        }
        Ok(values)
    }
}

/// Cuts per-country views out of a [`Dataset`] without touching it.
#[derive(Debug, Clone, Copy)]
pub struct SeriesSelector<'a> {
    dataset: &'a Dataset,
}

impl<'a> SeriesSelector<'a> {
    #[must_use]
    pub const fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    #[must_use]
    pub const fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Rows of `country` restricted to `columns`, in dataset order.
    ///
    /// A country without rows yields an empty series.
    ///
    /// # Errors
    /// Returns `MissingColumn` if any requested column is not in the dataset.
    pub fn select(&self, country: &str, columns: &[&str], window: Window) -> Result<Series> {
        let indices = self.column_indices(columns)?;
        let rows: Vec<_> = self.dataset.rows_for(country).collect();

        let skip = match window {
            Window::Full => 0,
            Window::Last(n) => rows.len().saturating_sub(n),
        };
        let rows = &rows[skip..];

        let values = indices
            .iter()
            .map(|&idx| rows.iter().map(|row| row.values[idx]).collect())
            .collect();

        Ok(Series {
            country: country.to_string(),
            dates: rows.iter().map(|row| row.date).collect(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            values,
        })
    }

    /// One series per country of interest, in set order.
    ///
    /// # Errors
    /// Returns `MissingColumn` if any requested column is not in the dataset.
    pub fn select_all(
        &self,
        countries: &CountrySet,
        columns: &[&str],
        window: Window,
    ) -> Result<Vec<Series>> {
        countries
            .iter()
            .map(|country| self.select(country, columns, window))
            .collect()
    }

    fn column_indices(&self, columns: &[&str]) -> std::result::Result<Vec<usize>, DataError> {
        columns
            .iter()
            .map(|name| {
                self.dataset
                    .column_index(name)
                    .ok_or_else(|| DataError::MissingColumn {
                        column: (*name).to_string(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
