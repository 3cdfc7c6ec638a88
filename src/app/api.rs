//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration loading,
//! context creation, and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemArtifactStore, HttpGeneratorClient, formatter_from_config};
use crate::app::AppContext;
use crate::app::commands::{index, list, sync};
use crate::domain::{GeneratorName, SyncConfig, load_config};
use crate::ports::{IndexFormatter, SessionToken};

pub use crate::app::commands::index::IndexOutcome;
pub use crate::app::commands::sync::{PhaseTrace, SyncOptions, SyncOutcome, SyncPhase};
pub use crate::domain::AppError;

/// Caller-facing inputs for a sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncRequest {
    /// Session cookie value for the remote endpoint.
    pub session: String,
    /// Re-download generators that already exist.
    pub force: bool,
    /// Extra generator names requested on the command line.
    pub names: Vec<String>,
    /// Use only `names`, ignoring the configured list.
    pub only: bool,
    /// Explicit config file; defaults to `gensync.toml` in the root.
    pub config_path: Option<PathBuf>,
}

/// Create an `AppContext` from a loaded configuration.
fn create_context(
    config: SyncConfig,
) -> AppContext<FilesystemArtifactStore, Box<dyn IndexFormatter>> {
    let store = FilesystemArtifactStore::from_config(&config.store);
    let formatter = formatter_from_config(&config.index);
    AppContext::new(store, formatter, config)
}

/// Combine the configured generator list with names given by the caller.
fn requested_names(
    config: &SyncConfig,
    request: &SyncRequest,
) -> Result<Vec<GeneratorName>, AppError> {
    let mut names = if request.only { Vec::new() } else { config.generators.names.clone() };
    for raw in &request.names {
        names.push(GeneratorName::new(raw)?);
    }
    Ok(names)
}

/// Sync generators into the store configured for the current directory.
pub fn sync(request: SyncRequest) -> Result<SyncOutcome, AppError> {
    sync_at(std::env::current_dir()?, request)
}

/// Sync generators into the store configured for `root`.
pub fn sync_at(root: impl Into<PathBuf>, request: SyncRequest) -> Result<SyncOutcome, AppError> {
    let root = root.into();
    if request.session.trim().is_empty() {
        return Err(AppError::config_error("Session token must not be empty"));
    }

    let config = load_config(&root, request.config_path.as_deref())?;
    let names = requested_names(&config, &request)?;
    let client = HttpGeneratorClient::new(&config.remote)?;
    let ctx = create_context(config);

    let options = SyncOptions::new(SessionToken::new(request.session), names).force(request.force);
    sync::execute(&ctx, &client, &options)
}

/// Regenerate the index for the current directory without fetching.
pub fn index(config_path: Option<&Path>) -> Result<IndexOutcome, AppError> {
    index_at(std::env::current_dir()?, config_path)
}

/// Regenerate the index for `root` without fetching.
pub fn index_at(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
) -> Result<IndexOutcome, AppError> {
    let root: PathBuf = root.into();
    let config = load_config(&root, config_path)?;
    let ctx = create_context(config);
    index::execute(&ctx)
}

/// List stored generators for the current directory.
pub fn list(config_path: Option<&Path>) -> Result<Vec<GeneratorName>, AppError> {
    list_at(std::env::current_dir()?, config_path)
}

/// List stored generators for `root`.
pub fn list_at(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
) -> Result<Vec<GeneratorName>, AppError> {
    let root: PathBuf = root.into();
    let config = load_config(&root, config_path)?;
    let store = FilesystemArtifactStore::from_config(&config.store);
    list::execute(&store)
}
