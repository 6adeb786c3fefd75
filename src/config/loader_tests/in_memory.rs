use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ConfigFiles;

/// Config files held in a map, with fixed working and user directories.
pub struct InMemoryFiles {
    files: HashMap<PathBuf, String>,
    working_dir: PathBuf,
    user_dir: Option<PathBuf>,
}

impl InMemoryFiles {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            working_dir: PathBuf::from("/project"),
            user_dir: Some(PathBuf::from("/home/user/.config/epi-report")),
        }
    }

    pub fn file(mut self, path: &str, text: &str) -> Self {
        self.files.insert(PathBuf::from(path), text.to_string());
        self
    }

    pub fn cwd(mut self, dir: &str) -> Self {
        self.working_dir = PathBuf::from(dir);
        self
    }

    pub fn user_config_dir(mut self, dir: Option<&str>) -> Self {
        self.user_dir = dir.map(PathBuf::from);
        self
    }
}

impl ConfigFiles for InMemoryFiles {
    fn working_dir(&self) -> Option<PathBuf> {
        Some(self.working_dir.clone())
    }

    fn user_dir(&self) -> Option<PathBuf> {
        self.user_dir.clone()
    }

    fn read(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}
