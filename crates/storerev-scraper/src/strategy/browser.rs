//! Interactive-session strategy: drives a headless browser through
//! WebDriver so the storefront's client-side script can render the
//! review cards, then extracts them from the live DOM.
//!
//! The session is the one resource in the system that must be released
//! on every path; `attempt` owns that discipline. A missing WebDriver
//! endpoint is the only error surfaced to the chain — everything that
//! goes wrong inside an established session degrades to zero records.

use std::time::Duration;

use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};
use storerev_core::{AppIdentity, CollectorConfig, ReviewRecord};

use crate::error::ScraperError;
use crate::normalize::normalize_browser_card;
use crate::strategy::ReviewStrategy;
use crate::types::BrowserCard;

const RATINGS_SUMMARY: &str = ".we-customer-ratings__averages";
const REVIEW_CARD: &str = ".we-customer-review";
const CARD_TITLE: &str = ".we-customer-review__title";
const CARD_BODY: &str = ".we-customer-review__body";
const CARD_RATING: &str = ".we-customer-review__rating";
const CARD_AUTHOR: &str = ".we-customer-review__user";
const CARD_DATE: &str = ".we-customer-review__date";

pub struct BrowserStrategy {
    config: CollectorConfig,
}

impl BrowserStrategy {
    #[must_use]
    pub fn new(config: CollectorConfig) -> Self {
        Self { config }
    }

    async fn scrape_page(
        &self,
        client: &Client,
        url: &str,
    ) -> Result<Vec<ReviewRecord>, ScraperError> {
        client
            .goto(url)
            .await
            .map_err(|e| ScraperError::Session(format!("navigation to {url} failed: {e}")))?;
        tracing::info!(url, "loaded storefront page");

        // Bounded wait for the ratings summary region; without it the
        // page either has no reviews or never finished rendering.
        let summary = client
            .wait()
            .at_most(Duration::from_secs(self.config.browser_wait_secs))
            .for_element(Locator::Css(RATINGS_SUMMARY))
            .await;
        if summary.is_err() {
            tracing::warn!("timed out waiting for ratings summary region");
            return Ok(Vec::new());
        }

        // Scroll to trigger lazy-loading of further review cards.
        for _ in 0..self.config.browser_scroll_count {
            client
                .execute("window.scrollBy(0, 500);", vec![])
                .await
                .map_err(|e| ScraperError::Session(format!("scroll script failed: {e}")))?;
            if self.config.browser_scroll_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.browser_scroll_delay_ms))
                    .await;
            }
        }

        let cards = client
            .find_all(Locator::Css(REVIEW_CARD))
            .await
            .map_err(|e| ScraperError::Session(format!("locating review cards failed: {e}")))?;
        if cards.is_empty() {
            tracing::warn!("no review card elements found; selector may be stale");
            return Ok(Vec::new());
        }

        let mut records = Vec::with_capacity(cards.len());
        for (index, card) in cards.into_iter().enumerate() {
            let raw = BrowserCard {
                title: sub_text(&card, CARD_TITLE).await,
                body: sub_text(&card, CARD_BODY).await,
                rating_label: sub_attr(&card, CARD_RATING, "aria-label").await,
                author: sub_text(&card, CARD_AUTHOR).await,
                date: sub_text(&card, CARD_DATE).await,
            };
            records.push(normalize_browser_card(index, raw));
        }
        Ok(records)
    }
}

#[async_trait::async_trait]
impl ReviewStrategy for BrowserStrategy {
    fn name(&self) -> &'static str {
        "browser-session"
    }

    async fn attempt(&self, identity: &AppIdentity) -> Result<Vec<ReviewRecord>, ScraperError> {
        let endpoint = self.config.webdriver_url.clone();
        let client = ClientBuilder::native()
            .connect(&endpoint)
            .await
            .map_err(|e| ScraperError::WebDriverUnavailable {
                endpoint,
                reason: e.to_string(),
            })?;

        let url = identity.canonical_url(
            self.config.page_base_for(identity.store),
            &self.config.country,
        );
        let outcome = self.scrape_page(&client, &url).await;

        // Tear the session down on every path before inspecting the result.
        if let Err(e) = client.close().await {
            tracing::debug!(error = %e, "webdriver session close failed");
        }

        match outcome {
            Ok(records) => {
                tracing::info!(count = records.len(), "extracted reviews from rendered page");
                Ok(records)
            }
            Err(e) => {
                tracing::warn!(error = %e, "browser session failed; yielding empty");
                Ok(Vec::new())
            }
        }
    }
}

/// Text of an optional sub-element, trimmed; `None` when absent or empty.
async fn sub_text(card: &Element, selector: &str) -> Option<String> {
    let element = card.find(Locator::Css(selector)).await.ok()?;
    element
        .text()
        .await
        .ok()
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty())
}

/// Attribute of an optional sub-element; `None` when absent.
async fn sub_attr(card: &Element, selector: &str, attr: &str) -> Option<String> {
    let element = card.find(Locator::Css(selector)).await.ok()?;
    element.attr(attr).await.ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_config, test_identity};

    #[tokio::test]
    async fn unreachable_webdriver_endpoint_is_a_missing_capability() {
        // Port 1 is never a WebDriver endpoint.
        let strategy = BrowserStrategy::new(test_config("http://127.0.0.1:1"));
        let err = strategy
            .attempt(&test_identity())
            .await
            .expect_err("connect must fail");
        assert!(err.is_missing_capability());
    }
}
