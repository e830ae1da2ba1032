//! The retrieval strategy chain.
//!
//! Strategies run in their given priority order; the first one to yield
//! at least one record wins and the rest are never tried. Strategy
//! errors are recorded and treated as empty yields — the chain is the
//! aggregation boundary, nothing propagates past it. When every
//! strategy comes up empty the chain synthesizes exactly one fallback
//! record so the caller always receives a populated, explicable result.

use chrono::Utc;
use storerev_core::review::UNKNOWN_VERSION;
use storerev_core::{AppIdentity, ReviewRecord};

use crate::error::ScraperError;
use crate::strategy::ReviewStrategy;

/// Fixed id of the synthetic record produced when every strategy fails.
pub const FALLBACK_ID: &str = "api_fallback_1";

/// Source tag of the synthetic fallback record.
pub const SOURCE_FALLBACK: &str = "API Fallback";

/// A strategy that returned an error instead of a yield.
#[derive(Debug)]
pub struct ChainFailure {
    pub strategy: &'static str,
    pub error: ScraperError,
}

/// What the chain produced for one run.
#[derive(Debug)]
pub struct ChainOutcome {
    /// Never empty: either a winning strategy's records or the single
    /// fallback record.
    pub records: Vec<ReviewRecord>,
    /// Name of the strategy that won, `None` when the fallback fired.
    pub winning_strategy: Option<&'static str>,
    /// Errors from strategies that failed outright (not merely empty).
    pub failures: Vec<ChainFailure>,
}

impl ChainOutcome {
    /// `true` when some strategy failed because its capability is
    /// entirely unavailable (e.g. no WebDriver endpoint).
    #[must_use]
    pub fn missing_capability(&self) -> bool {
        self.failures.iter().any(|f| f.error.is_missing_capability())
    }
}

/// Runs the strategies in order, short-circuiting on the first
/// non-empty yield, and falls back to the synthetic record when all of
/// them come up empty.
pub async fn run_chain(
    strategies: &[Box<dyn ReviewStrategy>],
    identity: &AppIdentity,
) -> ChainOutcome {
    let mut failures = Vec::new();

    for strategy in strategies {
        tracing::info!(strategy = strategy.name(), "attempting retrieval strategy");
        match strategy.attempt(identity).await {
            Ok(records) if !records.is_empty() => {
                tracing::info!(
                    strategy = strategy.name(),
                    count = records.len(),
                    "strategy yielded reviews; stopping chain"
                );
                return ChainOutcome {
                    records,
                    winning_strategy: Some(strategy.name()),
                    failures,
                };
            }
            Ok(_) => {
                tracing::info!(strategy = strategy.name(), "strategy yielded nothing");
            }
            Err(e) => {
                tracing::warn!(strategy = strategy.name(), error = %e, "strategy failed");
                failures.push(ChainFailure {
                    strategy: strategy.name(),
                    error: e,
                });
            }
        }
    }

    tracing::warn!("all strategies came up empty; emitting fallback record");
    ChainOutcome {
        records: vec![fallback_record()],
        winning_strategy: None,
        failures,
    }
}

/// The synthetic placeholder emitted when every strategy fails,
/// timestamped at invocation.
#[must_use]
pub fn fallback_record() -> ReviewRecord {
    ReviewRecord {
        id: FALLBACK_ID.to_owned(),
        title: "API Access Restricted".to_owned(),
        content: "All retrieval strategies were tried, but no reviews could be \
                  accessed due to storefront restrictions. Consider browser \
                  automation or checking the storefront page manually."
            .to_owned(),
        rating: None,
        author: "System".to_owned(),
        date: Utc::now().to_rfc3339(),
        version: UNKNOWN_VERSION.to_owned(),
        source: SOURCE_FALLBACK.to_owned(),
    }
}

#[cfg(test)]
#[path = "chain_test.rs"]
mod tests;
