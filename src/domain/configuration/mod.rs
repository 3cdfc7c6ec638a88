pub mod loader;
pub mod sync_config;

pub use loader::{CONFIG_FILE, load_config, parse_config_content};
pub use sync_config::{
    DEFAULT_GENERATOR_NAMES, GeneratorsConfig, IndexConfig, RemoteConfig, StoreConfig, SyncConfig,
};
