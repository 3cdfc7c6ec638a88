//! gensync: download Perchance generators and emit a compile-time lookup table.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    IndexOutcome, PhaseTrace, SyncOptions, SyncOutcome, SyncPhase, SyncRequest, index, index_at,
    list, list_at, sync, sync_at,
};
pub use domain::{AppError, GeneratorArtifact, GeneratorName, StoreIndex, SyncConfig};
