//! Canonical review record and the per-run result envelope.
//!
//! Every retrieval strategy produces raw payloads in its own shape; the
//! scraper normalizes all of them into [`ReviewRecord`]. The invariant is
//! that a record is always fully populated — downstream consumers (JSON
//! and CSV writers, analysis notebooks) never see a missing field. The
//! defaults live here next to the type so normalizers agree on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::AppIdentity;

/// Store-provided catalog metadata, passed through opaquely.
///
/// The lookup API returns dozens of loosely-typed fields (rating, version,
/// release dates, price, artwork URLs); none of them are interpreted here,
/// so the whole object is kept as-is. An empty map means "no metadata".
pub type AppMetadata = serde_json::Map<String, serde_json::Value>;

/// Default author when a strategy cannot name the reviewer.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Default version string when the review does not carry one.
pub const UNKNOWN_VERSION: &str = "N/A";

/// One normalized user review, identical in shape regardless of which
/// strategy produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Unique within a run. Strategy-scoped synthetic ids are used when
    /// the source payload has no natural id.
    pub id: String,
    pub title: String,
    pub content: String,
    /// 1–5 stars; `None` when the strategy could not determine a rating.
    pub rating: Option<u8>,
    pub author: String,
    /// ISO-8601 when the source provides one, otherwise the strategy's
    /// local date format. Never empty.
    pub date: String,
    pub version: String,
    /// Tag identifying the strategy that produced this record.
    pub source: String,
}

/// Everything one invocation produced, serialized once and never mutated.
#[derive(Debug, Serialize)]
pub struct RunResult {
    #[serde(flatten)]
    pub identity: AppIdentity,
    pub metadata: AppMetadata,
    pub reviews: Vec<ReviewRecord>,
    pub store_url: String,
    pub collected_at: DateTime<Utc>,
    pub total_reviews: usize,
}

impl RunResult {
    #[must_use]
    pub fn new(
        identity: AppIdentity,
        metadata: AppMetadata,
        reviews: Vec<ReviewRecord>,
        store_url: String,
        collected_at: DateTime<Utc>,
    ) -> Self {
        let total_reviews = reviews.len();
        Self {
            identity,
            metadata,
            reviews,
            store_url,
            collected_at,
            total_reviews,
        }
    }
}
