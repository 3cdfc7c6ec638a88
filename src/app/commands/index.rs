//! Regenerate the static lookup table over the current store.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, StoreIndex};
use crate::ports::{ArtifactStore, IndexFormatter};

/// Result of writing the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutcome {
    pub path: PathBuf,
    pub entries: usize,
}

/// List the store, render the index, write it, and run the formatter on it.
///
/// The index always reflects what is on disk, not what a run happened to fetch.
pub fn execute<S, F>(ctx: &AppContext<S, F>) -> Result<IndexOutcome, AppError>
where
    S: ArtifactStore,
    F: IndexFormatter,
{
    let names = ctx.store().list()?;
    let index = StoreIndex::generate(&names, &ctx.config().index_layout());

    let path = ctx.store().write_index(&index.render())?;
    ctx.formatter().format(&path)?;

    Ok(IndexOutcome { path, entries: index.len() })
}
