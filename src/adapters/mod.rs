pub mod artifact_store_filesystem;
pub mod generator_client_http;
pub mod rustfmt_formatter;

pub use artifact_store_filesystem::FilesystemArtifactStore;
pub use generator_client_http::HttpGeneratorClient;
pub use rustfmt_formatter::{RustfmtFormatter, formatter_from_config};
