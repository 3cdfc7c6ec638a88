//! Sync configuration loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, SyncConfig};

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "gensync.toml";

/// Load the configuration for a run rooted at `root`.
///
/// An explicit `config_path` must exist. Without one, `<root>/gensync.toml` is used when
/// present and built-in defaults otherwise. A relative `store.dir` is resolved against the
/// directory holding the config file (or `root` for defaults).
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<SyncConfig, AppError> {
    let (path, required) = match config_path {
        Some(path) if path.is_absolute() => (path.to_path_buf(), true),
        Some(path) => (root.join(path), true),
        None => (root.join(CONFIG_FILE), false),
    };

    let mut config = match fs::read_to_string(&path) {
        Ok(content) => parse_config_content(&content)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if required {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            SyncConfig::default()
        }
        Err(err) => return Err(err.into()),
    };

    let base = if path.exists() { path.parent().unwrap_or(root) } else { root };
    if config.store.dir.is_relative() {
        config.store.dir = base.join(&config.store.dir);
    }

    Ok(config)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<SyncConfig, AppError> {
    let config: SyncConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
