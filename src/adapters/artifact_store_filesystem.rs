use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::domain::{AppError, GeneratorArtifact, GeneratorName, StoreConfig};
use crate::ports::ArtifactStore;

/// Filesystem-based artifact store: one `<name>.<ext>` file per generator.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    dir: PathBuf,
    extension: String,
    index_file: String,
}

impl FilesystemArtifactStore {
    /// Create a store rooted at `dir`.
    pub fn new(
        dir: impl Into<PathBuf>,
        extension: impl Into<String>,
        index_file: impl Into<String>,
    ) -> Self {
        Self { dir: dir.into(), extension: extension.into(), index_file: index_file.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.dir, &config.extension, &config.index_file)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn artifact_path(&self, name: &GeneratorName) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }

    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index_file)
    }

    /// Write via a sibling temp file and rename over the destination.
    ///
    /// The result has the permissions a plain create would give it, or keeps the
    /// permissions of the file it replaces.
    fn write_atomic(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut temp = temp_file_builder().tempfile_in(&self.dir)?;
        temp.write_all(contents.as_bytes())?;
        if let Ok(existing) = fs::metadata(path) {
            temp.as_file().set_permissions(existing.permissions())?;
        }
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Create temp files with the regular `0o666 & !umask` mode instead of owner-only.
#[cfg(unix)]
fn temp_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}

impl ArtifactStore for FilesystemArtifactStore {
    fn list(&self) -> Result<BTreeSet<GeneratorName>, AppError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = BTreeSet::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
                && let Ok(name) = GeneratorName::new(stem)
            {
                names.insert(name);
            }
        }

        Ok(names)
    }

    fn exists(&self, name: &GeneratorName) -> bool {
        self.artifact_path(name).is_file()
    }

    fn read(&self, name: &GeneratorName) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.artifact_path(name))?)
    }

    fn write(&self, artifact: &GeneratorArtifact) -> Result<PathBuf, AppError> {
        let path = self.artifact_path(&artifact.name);
        self.write_atomic(&path, &artifact.render())
            .map_err(|e| AppError::persistence(artifact.name.as_str(), e))?;
        Ok(path)
    }

    fn write_index(&self, contents: &str) -> Result<PathBuf, AppError> {
        let path = self.index_path();
        self.write_atomic(&path, contents)
            .map_err(|e| AppError::persistence(self.index_file.as_str(), e))?;
        Ok(path)
    }
}
