//! Where configuration files are looked for, and how they are read.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// The places a run may find its configuration.
///
/// Implemented over the real process environment, and by an in-memory
/// table in tests so discovery can be checked without touching `$HOME`.
pub trait ConfigFiles {
    /// Directory holding the project-local `.epi-report.toml`.
    fn working_dir(&self) -> Option<PathBuf>;

    /// Per-user configuration directory, if the platform has one.
    fn user_dir(&self) -> Option<PathBuf>;

    /// Text of the file at `path`; `Ok(None)` when there is no such file.
    ///
    /// # Errors
    /// Any I/O failure other than the file being absent.
    fn read(&self, path: &Path) -> io::Result<Option<String>>;
}

/// The process's current directory and the platform config directory:
/// `~/.config/epi-report` on Linux, `~/Library/Application Support/epi-report`
/// on macOS, `%APPDATA%\epi-report\config` on Windows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigFiles;

impl ConfigFiles for SystemConfigFiles {
    fn working_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn user_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "epi-report")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
