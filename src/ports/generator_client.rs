//! Generator API client port definition.

use std::collections::BTreeMap;

use crate::domain::{AppError, FetchRequest, GeneratorName};

/// Opaque session credential supplied by the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// Port for the batched generator fetch.
pub trait GeneratorClient {
    /// Issue one request for every name in `request` and return the model text per name.
    ///
    /// The response may contain names that were not requested (server-side dependency
    /// expansion) and may omit names that were.
    fn fetch(
        &self,
        request: &FetchRequest,
        session: &SessionToken,
    ) -> Result<BTreeMap<GeneratorName, String>, AppError>;
}
