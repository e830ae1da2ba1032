pub mod chain;
pub mod error;
pub mod http;
pub mod lookup;
pub mod normalize;
pub mod strategy;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;

pub use chain::{run_chain, ChainFailure, ChainOutcome};
pub use error::ScraperError;
pub use http::build_http_client;
pub use lookup::fetch_app_metadata;
pub use strategy::ReviewStrategy;
