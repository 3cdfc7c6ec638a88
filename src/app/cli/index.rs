//! Index command implementation.

use std::path::PathBuf;

use crate::app::api;
use crate::domain::AppError;

pub fn run_index(config: Option<PathBuf>) -> Result<(), AppError> {
    let outcome = api::index(config.as_deref())?;
    println!("✅ Generated {} ({} generator(s))", outcome.path.display(), outcome.entries);
    Ok(())
}
