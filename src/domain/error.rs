use std::io;

use thiserror::Error;

/// Library-wide error type for gensync operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Generator name is invalid.
    #[error(
        "Invalid generator name '{0}': must be alphanumeric with hyphens or underscores"
    )]
    InvalidGeneratorName(String),

    /// The remote endpoint was unreachable or answered with a non-success status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Writing an artifact (or the index) to the store failed.
    #[error("Failed to persist '{name}': {source}")]
    Persistence {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The external formatter rejected or could not process the index.
    #[error("Index formatting failed: {0}")]
    IndexFormatting(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn persistence(name: impl Into<String>, source: io::Error) -> Self {
        AppError::Persistence { name: name.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Persistence { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::InvalidGeneratorName(_)
            | AppError::MalformedResponse(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_) => io::ErrorKind::NotFound,
            AppError::Transport(_) | AppError::IndexFormatting(_) => io::ErrorKind::Other,
        }
    }
}
