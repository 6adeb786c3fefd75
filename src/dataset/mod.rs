//! The in-memory time series and the views cut from it for each chart.

mod loader;
mod model;
mod selector;

pub use loader::{DEFAULT_COLUMNS, load_csv, read_csv};
pub use model::{CountrySet, Dataset, Row, columns};
pub use selector::{Series, SeriesSelector, Window};
