//! CSV ingest for OWID-shaped time series.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use super::model::{Dataset, Row, columns};
use crate::error::{DataError, ReportError, Result};

const COUNTRY_COLUMN: &str = "location";
const DATE_COLUMN: &str = "date";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Numeric columns loaded when the configuration does not name any.
pub const DEFAULT_COLUMNS: &[&str] = &[
    columns::TOTAL_CASES,
    columns::NEW_CASES,
    columns::NEW_CASES_SMOOTHED,
    columns::TOTAL_DEATHS,
    columns::NEW_DEATHS,
    columns::NEW_DEATHS_SMOOTHED,
    columns::TOTAL_CASES_PER_MILLION,
    columns::TOTAL_DEATHS_PER_MILLION,
    columns::TOTAL_TESTS,
    columns::NEW_TESTS,
    columns::TOTAL_TESTS_PER_THOUSAND,
    columns::POSITIVE_RATE,
];

/// Load a dataset from a CSV file.
///
/// # Errors
/// Returns an error if the file cannot be opened or any row is malformed.
pub fn load_csv(path: &Path, wanted: &[String]) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file, wanted)
}

/// Read a dataset from CSV text.
///
/// Only `location`, `date` and the `wanted` numeric columns are kept; wanted
/// columns absent from the header are skipped, so a chart that needs one fails
/// later with a column-specific error. Empty cells are missing values.
///
/// # Errors
/// Returns an error on CSV syntax errors, a missing `location`/`date` header,
/// an unparseable date, or a non-numeric value in a kept column.
pub fn read_csv<R: Read>(reader: R, wanted: &[String]) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let country_idx = header_index(&headers, COUNTRY_COLUMN)?;
    let date_idx = header_index(&headers, DATE_COLUMN)?;

    let kept: Vec<(String, usize)> = wanted
        .iter()
        .filter_map(|name| {
            headers
                .iter()
                .position(|h| h == name)
                .map(|idx| (name.clone(), idx))
        })
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let record = record?;
        rows.push(parse_row(&record, line, country_idx, date_idx, &kept)?);
    }

    let names = kept.into_iter().map(|(name, _)| name).collect();
    Dataset::new(names, rows)
}

fn header_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        DataError::MissingColumn {
            column: name.to_string(),
        }
        .into()
    })
}

fn parse_row(
    record: &StringRecord,
    line: usize,
    country_idx: usize,
    date_idx: usize,
    kept: &[(String, usize)],
) -> Result<Row> {
    let country = record.get(country_idx).unwrap_or_default();
    if country.is_empty() {
        return Err(malformed(line, "empty location"));
    }

    let raw_date = record.get(date_idx).unwrap_or_default();
    let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
        .map_err(|e| malformed(line, &format!("invalid date '{raw_date}': {e}")))?;

    let values = kept
        .iter()
        .map(|(name, idx)| parse_value(record.get(*idx).unwrap_or_default(), name, line))
        .collect::<Result<Vec<_>>>()?;

    Ok(Row::new(country, date, values))
}

fn parse_value(raw: &str, column: &str, line: usize) -> Result<Option<f64>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| malformed(line, &format!("column '{column}' has non-numeric value '{raw}'")))
}

fn malformed(line: usize, message: &str) -> ReportError {
    DataError::Malformed {
        line,
        message: message.to_string(),
    }
    .into()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
