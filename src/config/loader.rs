use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, Result};

use super::files::{ConfigFiles, SystemConfigFiles};
use super::model::ReportConfig;
use super::validation::validate_config_semantics;

/// A loaded configuration and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub config: ReportConfig,
    /// File the configuration was read from; `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read, parsed or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".epi-report.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.epi-report.toml` in current directory
/// 2. Platform-specific user config directory:
///    - Windows: `%APPDATA%\epi-report\config\config.toml`
///    - macOS: `~/Library/Application Support/epi-report/config.toml`
///    - Linux: `~/.config/epi-report/config.toml` (XDG)
/// 3. Returns `ReportConfig::default()` if no config found
#[derive(Debug)]
pub struct FileConfigLoader<F: ConfigFiles = SystemConfigFiles> {
    files: F,
}

impl Default for FileConfigLoader<SystemConfigFiles> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<SystemConfigFiles> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: SystemConfigFiles,
        }
    }
}

impl<F: ConfigFiles> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_files(files: F) -> Self {
        Self { files }
    }

    /// Local file first, then the user file.
    fn candidates(&self) -> impl Iterator<Item = PathBuf> {
        let local = self
            .files
            .working_dir()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = self.files.user_dir().map(|dir| dir.join(USER_CONFIG_NAME));
        local.into_iter().chain(user)
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        self.files
            .read(path)
            .map_err(|source| ReportError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }

    fn parse(path: &Path, content: &str) -> Result<LoadResult> {
        let config: ReportConfig = toml::from_str(content)?;
        validate_config_semantics(&config)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<F: ConfigFiles> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        for path in self.candidates() {
            if let Some(content) = self.read(&path)? {
                return Self::parse(&path, &content);
            }
        }

        debug!("No config file found, using defaults");
        Ok(LoadResult {
            config: ReportConfig::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self.read(path)?.ok_or_else(|| ReportError::FileRead {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such config file"),
        })?;
        Self::parse(path, &content)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
