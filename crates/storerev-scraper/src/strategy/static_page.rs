//! Static page strategy, the last resort.
//!
//! Review content is not statically embedded in the storefront page, so
//! no real extraction is attempted. The page is fetched once to confirm
//! the app exists, then a single synthetic "access limited" record is
//! produced pointing the reader at the canonical URL.

use reqwest::Client;
use storerev_core::review::UNKNOWN_VERSION;
use storerev_core::{AppIdentity, CollectorConfig, ReviewRecord};

use crate::error::ScraperError;
use crate::http::random_user_agent;
use crate::strategy::ReviewStrategy;

/// Source tag for the static-page placeholder record.
pub const SOURCE_STATIC_PAGE: &str = "Static Page";

pub struct StaticPageStrategy {
    client: Client,
    config: CollectorConfig,
}

impl StaticPageStrategy {
    #[must_use]
    pub fn new(client: Client, config: CollectorConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait::async_trait]
impl ReviewStrategy for StaticPageStrategy {
    fn name(&self) -> &'static str {
        "static-page"
    }

    async fn attempt(&self, identity: &AppIdentity) -> Result<Vec<ReviewRecord>, ScraperError> {
        let url = identity.canonical_url(
            self.config.page_base_for(identity.store),
            &self.config.country,
        );
        tracing::info!(url, "fetching storefront page for the placeholder record");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, random_user_agent())
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml",
            )
            .send()
            .await;

        if let Err(e) = response {
            tracing::warn!(error = %e, "storefront page fetch failed");
            return Ok(Vec::new());
        }

        let record = ReviewRecord {
            id: "access_limited_1".to_owned(),
            title: "Storefront Access Limited".to_owned(),
            content: format!(
                "Direct programmatic access to reviews is restricted by the \
                 storefront. To read the actual reviews, visit {url}."
            ),
            rating: None,
            author: "System".to_owned(),
            date: chrono::Utc::now().to_rfc3339(),
            version: UNKNOWN_VERSION.to_owned(),
            source: SOURCE_STATIC_PAGE.to_owned(),
        };
        Ok(vec![record])
    }
}
