//! Synthetic datasets shared by unit tests.

use chrono::{Days, NaiveDate};

use crate::dataset::{CountrySet, DEFAULT_COLUMNS, Dataset, Row, columns};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
}

/// Value for a column on day `day` of a country with index `country_idx`.
#[allow(clippy::cast_precision_loss)]
pub fn synthetic_value(column: &str, country_idx: usize, day: usize) -> f64 {
    let scale = (country_idx + 1) as f64;
    let d = day as f64;
    match column {
        columns::POSITIVE_RATE => 0.01 * scale + 0.0005 * d,
        c if c.starts_with("new_") => 100.0 * scale + d,
        c if c.ends_with("per_million") || c.ends_with("per_thousand") => scale * d,
        _ => 1000.0 * scale * (d + 1.0),
    }
}

/// Every default column populated for `days` consecutive days per country.
pub fn synthetic_dataset(countries: &[&str], days: usize) -> Dataset {
    let names: Vec<String> = DEFAULT_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    let mut rows = Vec::new();
    for (country_idx, country) in countries.iter().enumerate() {
        for day in 0..days {
            let date = start_date().checked_add_days(Days::new(day as u64)).unwrap();
            let values = names
                .iter()
                .map(|c| Some(synthetic_value(c, country_idx, day)))
                .collect();
            rows.push(Row::new(*country, date, values));
        }
    }
    Dataset::new(names, rows).unwrap()
}

pub fn country_set(countries: &[&str]) -> CountrySet {
    CountrySet::new(countries.iter().copied()).unwrap()
}

/// [`synthetic_dataset`] as OWID-style CSV text.
pub fn synthetic_csv(countries: &[&str], days: usize) -> String {
    use std::fmt::Write;

    let mut csv = format!("iso_code,location,date,{}\n", DEFAULT_COLUMNS.join(","));
    for (country_idx, country) in countries.iter().enumerate() {
        for day in 0..days {
            let date = start_date().checked_add_days(Days::new(day as u64)).unwrap();
            let values: Vec<String> = DEFAULT_COLUMNS
                .iter()
                .map(|c| synthetic_value(c, country_idx, day).to_string())
                .collect();
            writeln!(csv, "XXX,{country},{date},{}", values.join(",")).unwrap();
        }
    }
    csv
}

/// Width and height from a PNG header.
pub fn png_size(bytes: &[u8]) -> (u32, u32) {
    let reader = png::Decoder::new(std::io::Cursor::new(bytes))
        .read_info()
        .unwrap();
    let info = reader.info();
    (info.width, info.height)
}
