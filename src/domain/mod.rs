pub mod artifact;
pub mod configuration;
pub mod error;
pub mod fetch_plan;
pub mod identifiers;
pub mod store_index;

pub use artifact::{GeneratorArtifact, HEADER_LINES};
pub use configuration::{
    GeneratorsConfig, IndexConfig, RemoteConfig, StoreConfig, SyncConfig, load_config,
};
pub use error::AppError;
pub use fetch_plan::{FetchPlan, FetchRequest, plan};
pub use identifiers::GeneratorName;
pub use store_index::{IndexEntry, IndexLayout, StoreIndex};
