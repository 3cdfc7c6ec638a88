//! Index formatter port definition.

use std::path::Path;

use crate::domain::AppError;

/// Port for the external formatting step run over the written index.
pub trait IndexFormatter {
    /// Format the file in place. Any failure must be reported, never ignored.
    fn format(&self, path: &Path) -> Result<(), AppError>;
}

/// Formatter that leaves the index untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl IndexFormatter for NoopFormatter {
    fn format(&self, _path: &Path) -> Result<(), AppError> {
        Ok(())
    }
}

impl<T: IndexFormatter + ?Sized> IndexFormatter for Box<T> {
    fn format(&self, path: &Path) -> Result<(), AppError> {
        (**self).format(path)
    }
}
