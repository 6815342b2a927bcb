//! Conf module — engine configuration model and loading.

pub mod load;
pub mod model;

pub use model::{EngineConfig, ReportDefaults, StorageConfig};
