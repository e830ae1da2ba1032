pub mod config;
pub mod identity;
pub mod review;

pub use config::{load_collector_config, CollectorConfig, ConfigError};
pub use identity::{AppIdentity, StoreKind};
pub use review::{AppMetadata, ReviewRecord, RunResult};
