//! Sync command implementation.

use std::path::PathBuf;

use crate::app::api::{self, SyncRequest};
use crate::domain::AppError;

pub fn run_sync(
    session: String,
    force: bool,
    names: Vec<String>,
    only: bool,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let request = SyncRequest { session, force, names, only, config_path: config };
    let outcome = api::sync(request)?;

    if !outcome.short_circuited() {
        println!(
            "✅ Saved {} generator(s); index now lists {}",
            outcome.written.len(),
            outcome.index_entries
        );
    }
    Ok(())
}
