//! Sync configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::store_index::IndexLayout;
use crate::domain::{AppError, GeneratorName};

/// Configuration loaded from `gensync.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    /// Artifact store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Remote endpoint configuration.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Index emission configuration.
    #[serde(default)]
    pub index: IndexConfig,
    /// Generators to keep present in the store.
    #[serde(default)]
    pub generators: GeneratorsConfig,
}

impl SyncConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.store.validate()?;
        self.remote.validate()?;
        self.index.validate()?;
        Ok(())
    }

    pub fn index_layout(&self) -> IndexLayout {
        IndexLayout {
            const_name: self.store.index_const.clone(),
            extension: self.store.extension.clone(),
        }
    }
}

/// Where artifacts live on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store directory, relative to the config root.
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,
    /// File extension for artifacts (without the dot).
    #[serde(default = "default_extension")]
    pub extension: String,
    /// File name of the generated index, inside the store directory.
    #[serde(default = "default_index_file")]
    pub index_file: String,
    /// Name of the emitted constant.
    #[serde(default = "default_index_const")]
    pub index_const: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
            extension: default_extension(),
            index_file: default_index_file(),
            index_const: default_index_const(),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("store.dir must not be empty".to_string()));
        }
        if self.extension.is_empty()
            || !self.extension.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AppError::InvalidConfig(format!(
                "store.extension '{}' must be non-empty ASCII alphanumeric",
                self.extension
            )));
        }
        if self.index_file.is_empty()
            || self.index_file.contains('/')
            || self.index_file.contains('\\')
        {
            return Err(AppError::InvalidConfig(format!(
                "store.index_file '{}' must be a plain file name",
                self.index_file
            )));
        }
        if self.index_file.ends_with(&format!(".{}", self.extension)) {
            return Err(AppError::InvalidConfig(format!(
                "store.index_file '{}' would be listed as an artifact",
                self.index_file
            )));
        }
        let mut chars = self.index_const.chars();
        let starts_ok = chars.next().is_some_and(|c| c.is_ascii_uppercase() || c == '_');
        if !starts_ok || !chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(AppError::InvalidConfig(format!(
                "store.index_const '{}' must be an upper-case Rust identifier",
                self.index_const
            )));
        }
        Ok(())
    }
}

fn default_store_dir() -> PathBuf {
    PathBuf::from("src/builtin_generators")
}

fn default_extension() -> String {
    "perchance".to_string()
}

fn default_index_file() -> String {
    "mod.rs".to_string()
}

fn default_index_const() -> String {
    "GENERATORS".to_string()
}

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Batched generator endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,
    /// Public site root; `<site_url><name>` is recorded as each artifact's source.
    #[serde(default = "default_site_url")]
    pub site_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            site_url: default_site_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.site_url.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "site_url '{}' cannot be used as a base URL",
                self.site_url
            )));
        }
        Ok(())
    }

    /// Public URL of a generator, recorded in the artifact header.
    pub fn source_url(&self, name: &GeneratorName) -> String {
        match self.site_url.join(name.as_str()) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.site_url, name),
        }
    }
}

fn default_endpoint() -> Url {
    Url::parse("https://perchance.org/api/getGeneratorsAndDependencies")
        .expect("Default endpoint URL must be valid")
}

fn default_site_url() -> Url {
    Url::parse("https://perchance.org/").expect("Default site URL must be valid")
}

fn default_timeout() -> u64 {
    120
}

/// Post-processing of the generated index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Run the formatter on the index after writing it.
    #[serde(default = "default_true")]
    pub format: bool,
    /// Formatter executable.
    #[serde(default = "default_formatter")]
    pub formatter: String,
    /// Rust edition passed to the formatter; should match the host crate.
    #[serde(default = "default_edition")]
    pub edition: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { format: default_true(), formatter: default_formatter(), edition: default_edition() }
    }
}

impl IndexConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.format && self.formatter.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "index.formatter must be set when index.format is enabled".to_string(),
            ));
        }
        if !RUST_EDITIONS.contains(&self.edition.as_str()) {
            return Err(AppError::InvalidConfig(format!(
                "index.edition '{}' must be one of: {}",
                self.edition,
                RUST_EDITIONS.join(", ")
            )));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_formatter() -> String {
    "rustfmt".to_string()
}

const RUST_EDITIONS: &[&str] = &["2015", "2018", "2021", "2024"];

fn default_edition() -> String {
    "2021".to_string()
}

/// The list of generators a sync run ensures are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorsConfig {
    #[serde(default = "default_generator_names")]
    pub names: Vec<GeneratorName>,
}

impl Default for GeneratorsConfig {
    fn default() -> Self {
        Self { names: default_generator_names() }
    }
}

/// Generators shipped with the host program by default.
pub const DEFAULT_GENERATOR_NAMES: &[&str] = &[
    "abstract-noun",
    "animal",
    "archaic-word",
    "body-part",
    "color-name",
    "color",
    "common-noun",
    "concrete-noun",
    "country",
    "dinosaur",
    "emotion",
    "endangered-animal",
    "english-town-name",
    "fruit",
    "greek-god",
    "greek-monster",
    "greek-titan",
    "ingredient",
    "land-animal",
    "monster-edited",
    "monster-type",
    "nationality",
    "nautical-term",
    "netflix-category",
    "noun",
    "object",
    "occupation",
    "person-adjective",
    "planet-name",
    "room-type",
    "sci-fi-noun",
    "terrain",
    "type-of-art-edited",
    "uncountable-noun",
    "unusual-animal",
    "vegetable",
    "venue",
];

fn default_generator_names() -> Vec<GeneratorName> {
    DEFAULT_GENERATOR_NAMES
        .iter()
        .map(|name| GeneratorName::new(name).expect("Default generator names must be valid"))
        .collect()
}
