//! Token-authenticated storefront API strategy.
//!
//! Two phases: first a bearer token is scraped out of the public app
//! page (the page embeds it for its own client-side use), then the
//! review endpoint is paged with that token. No token means the whole
//! strategy yields empty without touching the review endpoint.

use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use storerev_core::{AppIdentity, CollectorConfig, ReviewRecord, StoreKind};

use crate::error::ScraperError;
use crate::http::random_user_agent;
use crate::normalize::normalize_storefront_review;
use crate::strategy::ReviewStrategy;
use crate::types::StorefrontReviewsResponse;

/// Embedded-token patterns, tried in order; first match wins. The page
/// sometimes carries the token URL-encoded and sometimes as plain JSON.
const TOKEN_PATTERNS: [&str; 2] = [r"token%22%3A%22([^%]+)%22", r#""token":"([^"]+)""#];

pub struct StorefrontApiStrategy {
    client: Client,
    config: CollectorConfig,
}

impl StorefrontApiStrategy {
    #[must_use]
    pub fn new(client: Client, config: CollectorConfig) -> Self {
        Self { client, config }
    }

    /// Fetches the public app page and extracts the embedded token.
    /// Returns `None` on request failure or when neither pattern matches.
    async fn extract_token(&self, identity: &AppIdentity) -> Option<String> {
        let url = identity.canonical_url(
            self.config.page_base_for(identity.store),
            &self.config.country,
        );
        tracing::info!(url, "fetching app page to extract token");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, random_user_agent())
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await;

        let body = match response {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read app page body");
                    return None;
                }
            },
            Ok(response) => {
                tracing::warn!(status = %response.status(), "app page returned non-success");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "app page request failed");
                return None;
            }
        };

        match find_token(&body) {
            Some(token) => {
                let prefix = token.get(..10).unwrap_or(token.as_str());
                tracing::info!(prefix, "extracted token");
                Some(token)
            }
            None => {
                tracing::warn!("could not extract token from app page");
                None
            }
        }
    }

    /// Fetches one page of the review endpoint.
    async fn fetch_reviews_page(
        &self,
        identity: &AppIdentity,
        token: &str,
        offset: u32,
    ) -> Result<StorefrontReviewsResponse, ScraperError> {
        let url = format!(
            "{}/v1/catalog/{}/apps/{}/reviews",
            self.config.amp_base_url.trim_end_matches('/'),
            self.config.country,
            identity.app_id
        );
        let referer = identity.canonical_url(
            self.config.page_base_for(identity.store),
            &self.config.country,
        );

        let offset_param = offset.to_string();
        let limit_param = self.config.storefront_page_size.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("l", "en-US"),
                ("offset", offset_param.as_str()),
                ("limit", limit_param.as_str()),
                ("platform", "web"),
                ("additionalPlatforms", "appletv,ipad,iphone,mac"),
            ])
            .header(reqwest::header::USER_AGENT, random_user_agent())
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::ORIGIN, "https://apps.apple.com")
            .header(reqwest::header::REFERER, referer)
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
        serde_json::from_str(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("storefront reviews at offset {offset}"),
            source: e,
        })
    }
}

#[async_trait::async_trait]
impl ReviewStrategy for StorefrontApiStrategy {
    fn name(&self) -> &'static str {
        "storefront-api"
    }

    async fn attempt(&self, identity: &AppIdentity) -> Result<Vec<ReviewRecord>, ScraperError> {
        if identity.store != StoreKind::AppleAppStore {
            tracing::debug!(store = %identity.store, "storefront API is Apple-only; yielding empty");
            return Ok(Vec::new());
        }

        let Some(token) = self.extract_token(identity).await else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        let step = self.config.storefront_page_size.max(1);

        for attempt in 0..self.config.storefront_attempts {
            let mut offset = 0;
            while offset < self.config.storefront_offset_limit {
                match self.fetch_reviews_page(identity, &token, offset).await {
                    Ok(page) => {
                        if page.data.is_empty() {
                            tracing::debug!(attempt, offset, "no reviews in this batch");
                        } else {
                            tracing::info!(attempt, offset, count = page.data.len(), "found reviews");
                            records.extend(
                                page.data.into_iter().filter_map(normalize_storefront_review),
                            );
                        }
                    }
                    Err(e @ (ScraperError::UnexpectedStatus { .. } | ScraperError::Deserialize { .. })) => {
                        tracing::warn!(attempt, offset, error = %e, "review page yielded nothing");
                    }
                    Err(e) => {
                        // Transport error: assumed transient, wait and carry on.
                        tracing::warn!(attempt, offset, error = %e, "transient error fetching reviews");
                        pause(self.config.transient_delay_ms).await;
                    }
                }

                pause(self.config.pacing_delay_ms).await;
                offset += step;
            }

            // The attempt grid is retry machinery for the empty case;
            // repeating it with data in hand would duplicate ids.
            if !records.is_empty() {
                break;
            }
        }

        Ok(records)
    }
}

/// Searches page HTML for an embedded token using the fixed pattern list.
fn find_token(html: &str) -> Option<String> {
    for pattern in TOKEN_PATTERNS {
        let Ok(re) = Regex::new(pattern) else { continue };
        if let Some(token) = re
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_owned())
        {
            return Some(token);
        }
    }
    None
}

async fn pause(millis: u64) {
    if millis > 0 {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}

#[cfg(test)]
#[path = "storefront_test.rs"]
mod tests;
