use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::IndexFormatter;

/// Formatter that records the paths it was asked to format.
#[derive(Clone, Default)]
pub struct RecordingFormatter {
    pub formatted: Arc<Mutex<Vec<PathBuf>>>,
    pub failure: Option<String>,
}

impl RecordingFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::default() }
    }

    pub fn calls(&self) -> usize {
        self.formatted.lock().unwrap().len()
    }
}

impl IndexFormatter for RecordingFormatter {
    fn format(&self, path: &Path) -> Result<(), AppError> {
        self.formatted.lock().unwrap().push(path.to_path_buf());
        match &self.failure {
            Some(message) => Err(AppError::IndexFormatting(message.clone())),
            None => Ok(()),
        }
    }
}
