use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, FetchRequest, GeneratorName};
use crate::ports::{GeneratorClient, SessionToken};

/// Client that answers from a canned table and records every request.
#[derive(Clone, Default)]
pub struct FakeGeneratorClient {
    pub requests: Arc<Mutex<Vec<FetchRequest>>>,
    pub responses: BTreeMap<GeneratorName, String>,
    /// Returned for every request in addition to the requested names.
    pub extra_names: Vec<GeneratorName>,
    pub failure: Option<String>,
}

impl FakeGeneratorClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, name: &str, text: &str) -> Self {
        self.responses.insert(GeneratorName::new(name).unwrap(), text.to_string());
        self
    }

    /// Also return `name` whenever a request is made (server-side dependency expansion).
    pub fn with_dependency(mut self, name: &str, text: &str) -> Self {
        let name = GeneratorName::new(name).unwrap();
        self.responses.insert(name.clone(), text.to_string());
        self.extra_names.push(name);
        self
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::default() }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<FetchRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl GeneratorClient for FakeGeneratorClient {
    fn fetch(
        &self,
        request: &FetchRequest,
        _session: &SessionToken,
    ) -> Result<BTreeMap<GeneratorName, String>, AppError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = &self.failure {
            return Err(AppError::Transport(message.clone()));
        }

        Ok(self
            .responses
            .iter()
            .filter(|(name, _)| request.names.contains(*name) || self.extra_names.contains(*name))
            .map(|(name, text)| (name.clone(), text.clone()))
            .collect())
    }
}
