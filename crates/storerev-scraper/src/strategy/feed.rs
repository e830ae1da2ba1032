//! Public customer-reviews feed strategy.
//!
//! Iterates a small fixed set of locale codes, paging each one's feed.
//! The feed needs no authentication but its JSON rendering is quirky —
//! see [`crate::types`] for the shape notes. The first locale that
//! yields any entries wins; later locales are not tried.

use std::time::Duration;

use reqwest::Client;
use storerev_core::{AppIdentity, CollectorConfig, ReviewRecord, StoreKind};

use crate::error::ScraperError;
use crate::http::random_user_agent;
use crate::normalize::normalize_feed_entry;
use crate::strategy::ReviewStrategy;
use crate::types::{FeedEntry, FeedResponse};

pub struct FeedStrategy {
    client: Client,
    config: CollectorConfig,
}

impl FeedStrategy {
    #[must_use]
    pub fn new(client: Client, config: CollectorConfig) -> Self {
        Self { client, config }
    }

    /// Fetches one feed page and returns its entries, with the leading
    /// app-description record already dropped.
    async fn fetch_feed_page(
        &self,
        identity: &AppIdentity,
        country: &str,
        page: u32,
    ) -> Result<Vec<FeedEntry>, ScraperError> {
        let url = format!(
            "{}/{country}/rss/customerreviews",
            self.config.feed_base_url.trim_end_matches('/')
        );

        let page_param = page.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("id", identity.app_id.as_str()),
                ("page", page_param.as_str()),
                ("sortby", "mostrecent"),
                ("json", "true"),
            ])
            .header(reqwest::header::USER_AGENT, random_user_agent())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let parsed: FeedResponse =
            serde_json::from_str(&body).map_err(|e| ScraperError::Deserialize {
                context: format!("feed page {page} for {country}"),
                source: e,
            })?;

        let mut entries = parsed.feed.map(|f| f.entry).unwrap_or_default();
        if entries.first().is_some_and(FeedEntry::is_app_description) {
            tracing::debug!(country, page, "dropping leading app-description entry");
            entries.remove(0);
        }
        Ok(entries)
    }
}

#[async_trait::async_trait]
impl ReviewStrategy for FeedStrategy {
    fn name(&self) -> &'static str {
        "rss-feed"
    }

    async fn attempt(&self, identity: &AppIdentity) -> Result<Vec<ReviewRecord>, ScraperError> {
        if identity.store != StoreKind::AppleAppStore {
            tracing::debug!(store = %identity.store, "customer-reviews feed is Apple-only; yielding empty");
            return Ok(Vec::new());
        }

        let mut records: Vec<ReviewRecord> = Vec::new();

        'countries: for country in &self.config.feed_countries {
            for page in 1..=self.config.feed_pages {
                tracing::info!(country, page, "trying customer-reviews feed");
                match self.fetch_feed_page(identity, country, page).await {
                    Ok(entries) if entries.is_empty() => {
                        tracing::debug!(country, page, "feed page had no entries");
                    }
                    Ok(entries) => {
                        tracing::info!(country, page, count = entries.len(), "found feed entries");
                        records.extend(
                            entries
                                .into_iter()
                                .filter_map(|entry| normalize_feed_entry(entry, country)),
                        );
                    }
                    Err(e) => {
                        tracing::warn!(country, page, error = %e, "feed page skipped");
                    }
                }

                if self.config.pacing_delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(self.config.pacing_delay_ms)).await;
                }

                // The first page with entries settles this locale.
                if !records.is_empty() {
                    break;
                }
            }

            // One locale with data is enough.
            if !records.is_empty() {
                break 'countries;
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
