//! Generator API client implementation using reqwest.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue, ORIGIN, REFERER,
    USER_AGENT,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, FetchRequest, GeneratorName, RemoteConfig};
use crate::ports::{GeneratorClient, SessionToken};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:144.0) Gecko/20100101 Firefox/144.0";

/// Longest slice of an error body echoed back in diagnostics.
const DIAGNOSTIC_BODY_LIMIT: usize = 500;

/// HTTP client for the batched generator endpoint.
#[derive(Clone)]
pub struct HttpGeneratorClient {
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeneratorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeneratorClient").field("endpoint", &self.endpoint).finish()
    }
}

impl HttpGeneratorClient {
    /// Create a new HTTP client for the configured endpoint.
    pub fn new(config: &RemoteConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(browser_headers(&config.site_url)?)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { endpoint: config.endpoint.clone(), client })
    }
}

/// Headers a browser sends for a same-origin XHR; the endpoint rejects bare clients.
fn browser_headers(site_url: &Url) -> Result<HeaderMap, AppError> {
    let origin = site_url.origin().ascii_serialization();
    let header = |value: &str| {
        HeaderValue::from_str(value).map_err(|e| {
            AppError::Configuration(format!("Invalid header value '{}': {}", value, e))
        })
    };

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(REFERER, header(site_url.as_str())?);
    headers.insert(ORIGIN, header(&origin)?);
    headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
    headers.insert("sec-fetch-site", HeaderValue::from_static("same-origin"));
    headers.insert("priority", HeaderValue::from_static("u=4"));
    Ok(headers)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    generator_names: &'a BTreeSet<GeneratorName>,
    generator_name_to_last_known_edit_time: &'a BTreeMap<GeneratorName, i64>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    generators: Vec<ApiGenerator>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiGenerator {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    model_text: Option<String>,
}

impl GeneratorClient for HttpGeneratorClient {
    fn fetch(
        &self,
        request: &FetchRequest,
        session: &SessionToken,
    ) -> Result<BTreeMap<GeneratorName, String>, AppError> {
        let api_request = ApiRequest {
            generator_names: &request.names,
            generator_name_to_last_known_edit_time: &request.last_known_edit_time,
        };

        let cookie = HeaderValue::from_str(&format!("cf_clearance={}", session.expose()))
            .map_err(|_| {
                AppError::Configuration("Session token contains invalid header characters".into())
            })?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(COOKIE, cookie)
            .json(&api_request)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AppError::Transport(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::Transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate(&body, DIAGNOSTIC_BODY_LIMIT)
            )));
        }

        parse_response(&body)
    }
}

/// Turn a response body into a name → model text map.
///
/// Records without a name are dropped. Names that are not valid generator names are
/// dropped with a warning, since they cannot be stored safely.
fn parse_response(body: &str) -> Result<BTreeMap<GeneratorName, String>, AppError> {
    let api_response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        let excerpt = truncate(body, DIAGNOSTIC_BODY_LIMIT);
        AppError::MalformedResponse(format!("{} (body: {})", e, excerpt))
    })?;

    let mut generators = BTreeMap::new();
    for record in api_response.generators {
        let Some(raw_name) = record.name.filter(|name| !name.is_empty()) else {
            continue;
        };
        match GeneratorName::new(&raw_name) {
            Ok(name) => {
                generators.insert(name, record.model_text.unwrap_or_default());
            }
            Err(_) => {
                eprintln!("⚠️  Ignoring generator with unusable name '{}'", raw_name);
            }
        }
    }

    Ok(generators)
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
