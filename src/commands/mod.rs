pub mod countries;
pub mod generate;
pub mod init;

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader, LoadResult, ReportConfig};
use crate::error::ReportError;
use crate::{EXIT_CONFIG_ERROR, EXIT_REPORT_ERROR};

pub use countries::{run_countries, run_countries_impl};
pub use generate::{default_output_name, run_generate, run_generate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

/// Exit code for a failed command.
#[must_use]
pub const fn exit_code_for(error: &ReportError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_REPORT_ERROR
    }
}

/// Resolve the configuration for a command.
///
/// `--no-config` yields the built-in defaults; an explicit path is loaded
/// as-is; otherwise the usual discovery order applies.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: ReportConfig::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
