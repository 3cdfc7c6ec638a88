//! Enumerate the generators currently in the store.

use crate::domain::{AppError, GeneratorName};
use crate::ports::ArtifactStore;

/// Names in the store, in index order.
pub fn execute(store: &impl ArtifactStore) -> Result<Vec<GeneratorName>, AppError> {
    Ok(store.list()?.into_iter().collect())
}
