use crate::cli::CountriesArgs;
use crate::dataset::load_csv;
use crate::{EXIT_SUCCESS, Result};

use super::exit_code_for;

#[must_use]
pub fn run_countries(args: &CountriesArgs) -> i32 {
    match run_countries_impl(args) {
        Ok(countries) => {
            for country in countries {
                println!("{country}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

/// Every country in the dataset, in first-seen order.
///
/// Only `location` and `date` are read, so any OWID-shaped file works.
///
/// # Errors
/// Returns an error if the file cannot be read or a row is malformed.
pub fn run_countries_impl(args: &CountriesArgs) -> Result<Vec<String>> {
    let dataset = load_csv(&args.input, &[])?;
    Ok(dataset.countries().iter().cloned().collect())
}

#[cfg(test)]
#[path = "countries_tests.rs"]
mod tests;
