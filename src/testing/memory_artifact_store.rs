use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, GeneratorArtifact, GeneratorName};
use crate::ports::ArtifactStore;

/// In-memory store holding serialized artifacts by name.
#[derive(Clone, Default)]
pub struct MemoryArtifactStore {
    pub files: Arc<Mutex<BTreeMap<GeneratorName, String>>>,
    pub index: Arc<Mutex<Option<String>>>,
    pub writes: Arc<Mutex<Vec<GeneratorName>>>,
    pub index_writes: Arc<Mutex<usize>>,
    /// Writing this name fails with a permission error.
    pub fail_on: Option<GeneratorName>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an artifact as if written by a previous run.
    pub fn with_body(self, name: &str, body: &str) -> Self {
        let artifact = GeneratorArtifact::new(
            GeneratorName::new(name).unwrap(),
            body,
            format!("https://perchance.org/{}", name),
            chrono::Utc::now(),
        );
        self.files.lock().unwrap().insert(artifact.name.clone(), artifact.render());
        self
    }

    pub fn failing_on(mut self, name: &str) -> Self {
        self.fail_on = Some(GeneratorName::new(name).unwrap());
        self
    }

    pub fn body(&self, name: &str) -> Option<String> {
        let files = self.files.lock().unwrap();
        let text = files.get(&GeneratorName::new(name).unwrap())?;
        GeneratorArtifact::strip_header(text).map(str::to_string)
    }

    pub fn names(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().map(|n| n.to_string()).collect()
    }

    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    pub fn index_write_count(&self) -> usize {
        *self.index_writes.lock().unwrap()
    }

    pub fn index_contents(&self) -> Option<String> {
        self.index.lock().unwrap().clone()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn list(&self) -> Result<BTreeSet<GeneratorName>, AppError> {
        Ok(self.files.lock().unwrap().keys().cloned().collect())
    }

    fn exists(&self, name: &GeneratorName) -> bool {
        self.files.lock().unwrap().contains_key(name)
    }

    fn read(&self, name: &GeneratorName) -> Result<String, AppError> {
        self.files
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()).into())
    }

    fn write(&self, artifact: &GeneratorArtifact) -> Result<PathBuf, AppError> {
        if self.fail_on.as_ref() == Some(&artifact.name) {
            return Err(AppError::persistence(
                artifact.name.as_str(),
                io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
            ));
        }
        self.files.lock().unwrap().insert(artifact.name.clone(), artifact.render());
        self.writes.lock().unwrap().push(artifact.name.clone());
        Ok(PathBuf::from(format!("{}.perchance", artifact.name)))
    }

    fn write_index(&self, contents: &str) -> Result<PathBuf, AppError> {
        *self.index.lock().unwrap() = Some(contents.to_string());
        *self.index_writes.lock().unwrap() += 1;
        Ok(PathBuf::from("mod.rs"))
    }
}
