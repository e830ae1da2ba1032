//! Review retrieval strategies.
//!
//! Each strategy is an independent, self-contained way of obtaining
//! reviews with its own request and parsing logic. Strategies keep their
//! transport and payload failures internal — malformed bodies, non-200
//! statuses, and network errors all become empty yields — and return
//! `Err` only when an entire capability is missing (no WebDriver
//! endpoint, for instance). The [chain](crate::chain) decides ordering
//! and fallback.

pub mod browser;
pub mod feed;
pub mod static_page;
pub mod storefront;

use async_trait::async_trait;
use storerev_core::{AppIdentity, ReviewRecord};

use crate::error::ScraperError;

pub use browser::BrowserStrategy;
pub use feed::FeedStrategy;
pub use static_page::StaticPageStrategy;
pub use storefront::StorefrontApiStrategy;

/// One independent method of retrieving reviews.
#[async_trait]
pub trait ReviewStrategy: Send + Sync {
    /// Short human-readable name used in logs and failure reports.
    fn name(&self) -> &'static str;

    /// Attempts retrieval for the given identity.
    ///
    /// An empty `Vec` means "this strategy found nothing" and is not an
    /// error. Implementations handle their own internal retry and pacing.
    ///
    /// # Errors
    ///
    /// Only for conditions the chain should know about, such as a
    /// missing capability ([`ScraperError::WebDriverUnavailable`]).
    /// Ordinary retrieval failures yield `Ok(vec![])` instead.
    async fn attempt(&self, identity: &AppIdentity) -> Result<Vec<ReviewRecord>, ScraperError>;
}
