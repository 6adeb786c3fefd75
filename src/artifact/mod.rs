//! Rendered images keyed by title, the hand-off between rendering and composition.

mod id;
mod store;

pub use id::{ARTIFACT_EXTENSION, Artifact, ArtifactId};
pub use store::{ArtifactStore, DirArtifactStore, MemoryArtifactStore};
