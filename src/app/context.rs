use crate::domain::SyncConfig;
use crate::ports::{ArtifactStore, IndexFormatter};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ArtifactStore, F: IndexFormatter> {
    store: S,
    formatter: F,
    config: SyncConfig,
}

impl<S: ArtifactStore, F: IndexFormatter> AppContext<S, F> {
    /// Create a new application context.
    pub fn new(store: S, formatter: F, config: SyncConfig) -> Self {
        Self { store, formatter, config }
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the index formatter.
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }
}
