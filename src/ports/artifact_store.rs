//! Artifact store port definition.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::{AppError, GeneratorArtifact, GeneratorName};

/// Port for reading and writing generator artifacts, one per name.
pub trait ArtifactStore {
    /// Enumerate every artifact currently present.
    fn list(&self) -> Result<BTreeSet<GeneratorName>, AppError>;

    /// Check whether an artifact exists for `name`.
    fn exists(&self, name: &GeneratorName) -> bool;

    /// Read the serialized artifact (header included).
    fn read(&self, name: &GeneratorName) -> Result<String, AppError>;

    /// Create or replace the artifact. Readers never observe a partially written file.
    fn write(&self, artifact: &GeneratorArtifact) -> Result<PathBuf, AppError>;

    /// Replace the generated index file.
    fn write_index(&self, contents: &str) -> Result<PathBuf, AppError>;
}
