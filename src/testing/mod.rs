mod fake_generator_client;
mod memory_artifact_store;
mod recording_formatter;

pub use fake_generator_client::FakeGeneratorClient;
pub use memory_artifact_store::MemoryArtifactStore;
pub use recording_formatter::RecordingFormatter;
