use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, IndexConfig};
use crate::ports::{IndexFormatter, NoopFormatter};

/// Runs `rustfmt` (or a compatible executable) over the generated index.
#[derive(Debug, Clone)]
pub struct RustfmtFormatter {
    program: String,
    edition: String,
}

impl RustfmtFormatter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), edition: "2021".to_string() }
    }

    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }

    fn args<'a>(&'a self, path: &'a Path) -> [&'a std::ffi::OsStr; 3] {
        ["--edition".as_ref(), self.edition.as_ref(), path.as_os_str()]
    }
}

impl Default for RustfmtFormatter {
    fn default() -> Self {
        Self::new("rustfmt")
    }
}

impl IndexFormatter for RustfmtFormatter {
    fn format(&self, path: &Path) -> Result<(), AppError> {
        let output = Command::new(&self.program)
            .args(self.args(path))
            .output()
            .map_err(|e| {
                AppError::IndexFormatting(format!("could not run '{}': {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(AppError::IndexFormatting(format!(
                "'{}' exited with {}: {}",
                self.program,
                code,
                if stderr.is_empty() { "Unknown error".to_string() } else { stderr }
            )));
        }

        Ok(())
    }
}

/// Pick the formatter described by the index configuration.
pub fn formatter_from_config(config: &IndexConfig) -> Box<dyn IndexFormatter> {
    if config.format {
        Box::new(RustfmtFormatter::new(config.formatter.trim()).with_edition(&config.edition))
    } else {
        Box::new(NoopFormatter)
    }
}
