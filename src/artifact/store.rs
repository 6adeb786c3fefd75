use std::fs;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use super::id::{Artifact, ArtifactId};
use crate::error::{ReportError, Result};

/// Keyed storage for rendered artifacts.
///
/// `put` replaces any artifact already stored under the same identity.
/// `get` never substitutes a placeholder: an identity that was not put is
/// [`ReportError::ArtifactNotFound`].
pub trait ArtifactStore {
    /// Store an artifact, replacing any previous one with the same identity.
    ///
    /// # Errors
    /// Returns an error if the artifact cannot be persisted.
    fn put(&mut self, artifact: Artifact) -> Result<()>;

    /// Fetch the artifact stored under `id`.
    ///
    /// # Errors
    /// Returns `ArtifactNotFound` if nothing was stored under `id`.
    fn get(&self, id: &ArtifactId) -> Result<Artifact>;

    /// Whether an artifact is stored under `id`.
    fn contains(&self, id: &ArtifactId) -> bool;

    /// Stored identities in first-put order.
    fn ids(&self) -> Vec<ArtifactId>;
}

/// In-memory store, insertion ordered.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    artifacts: IndexMap<ArtifactId, Artifact>,
}

impl MemoryArtifactStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn put(&mut self, artifact: Artifact) -> Result<()> {
        self.artifacts.insert(artifact.id.clone(), artifact);
        Ok(())
    }

    fn get(&self, id: &ArtifactId) -> Result<Artifact> {
        self.artifacts
            .get(id)
            .cloned()
            .ok_or_else(|| ReportError::ArtifactNotFound(id.clone()))
    }

    fn contains(&self, id: &ArtifactId) -> bool {
        self.artifacts.contains_key(id)
    }

    fn ids(&self) -> Vec<ArtifactId> {
        self.artifacts.keys().cloned().collect()
    }
}

/// Store that writes each artifact to `<dir>/<identity>.png`.
///
/// Only identities written through this store are visible to `get`; stale
/// files left in the directory by an earlier run are never picked up.
#[derive(Debug)]
pub struct DirArtifactStore {
    dir: PathBuf,
    written: IndexSet<ArtifactId>,
}

impl DirArtifactStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ReportError::FileWrite {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            written: IndexSet::new(),
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the file backing `id`.
    #[must_use]
    pub fn path_for(&self, id: &ArtifactId) -> PathBuf {
        self.dir.join(id.file_name())
    }
}

impl ArtifactStore for DirArtifactStore {
    fn put(&mut self, artifact: Artifact) -> Result<()> {
        let path = self.path_for(&artifact.id);
        fs::write(&path, &artifact.png)
            .map_err(|source| ReportError::FileWrite { path, source })?;
        self.written.insert(artifact.id);
        Ok(())
    }

    fn get(&self, id: &ArtifactId) -> Result<Artifact> {
        if !self.written.contains(id) {
            return Err(ReportError::ArtifactNotFound(id.clone()));
        }
        let path = self.path_for(id);
        let png = fs::read(&path).map_err(|source| ReportError::FileRead { path, source })?;
        Ok(Artifact::new(id.clone(), png))
    }

    fn contains(&self, id: &ArtifactId) -> bool {
        self.written.contains(id)
    }

    fn ids(&self) -> Vec<ArtifactId> {
        self.written.iter().cloned().collect()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
