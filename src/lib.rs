pub mod artifact;
pub mod cli;
pub mod commands;
pub mod compose;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod render;

#[cfg(test)]
mod test_support;

pub use error::{Result, ReportError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_REPORT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
