//! Generator artifacts and their provenance framing.

use chrono::{DateTime, SecondsFormat, Utc};

use super::GeneratorName;

/// Number of lines the provenance header occupies in a serialized artifact.
pub const HEADER_LINES: usize = 3;

/// A fetched generator, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorArtifact {
    pub name: GeneratorName,
    /// Raw payload from the remote API.
    pub body: String,
    pub source_url: String,
    pub fetched_at: DateTime<Utc>,
}

impl GeneratorArtifact {
    pub fn new(
        name: GeneratorName,
        body: impl Into<String>,
        source_url: impl Into<String>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self { name, body: body.into(), source_url: source_url.into(), fetched_at }
    }

    /// Serialize as header (source line, timestamp line, blank line) followed by the body.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 128);
        out.push_str("// ");
        out.push_str(&self.source_url);
        out.push('\n');
        out.push_str("// Fetched at: ");
        out.push_str(&self.fetched_at.to_rfc3339_opts(SecondsFormat::Micros, false));
        out.push('\n');
        out.push('\n');
        out.push_str(&self.body);
        out
    }

    /// Recover the body of a serialized artifact by skipping the header lines.
    ///
    /// Returns `None` when the text is shorter than the header.
    pub fn strip_header(text: &str) -> Option<&str> {
        let mut rest = text;
        for _ in 0..HEADER_LINES {
            let newline = rest.find('\n')?;
            rest = &rest[newline + 1..];
        }
        Some(rest)
    }
}
