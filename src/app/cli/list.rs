//! List command implementation.

use std::path::PathBuf;

use crate::app::api;
use crate::domain::AppError;

pub fn run_list(config: Option<PathBuf>) -> Result<(), AppError> {
    for name in api::list(config.as_deref())? {
        println!("{}", name);
    }
    Ok(())
}
