mod artifact_store;
mod generator_client;
mod index_formatter;

pub use artifact_store::ArtifactStore;
pub use generator_client::{GeneratorClient, SessionToken};
pub use index_formatter::{IndexFormatter, NoopFormatter};
