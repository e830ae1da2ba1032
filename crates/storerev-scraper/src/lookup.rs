//! Metadata fetcher against the iTunes lookup API.
//!
//! One GET, no retries. Every failure mode — zero results, non-2xx,
//! transport error, undecodable body — degrades to an empty map with a
//! warning, so a dead lookup endpoint never stops a collection run.

use reqwest::Client;
use serde::Deserialize;
use storerev_core::{AppIdentity, AppMetadata, CollectorConfig, StoreKind};

use crate::http::random_user_agent;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default, rename = "resultCount")]
    result_count: u32,
    #[serde(default)]
    results: Vec<AppMetadata>,
}

/// Fetches catalog metadata for the app, or an empty map when anything
/// goes wrong. The lookup API is Apple-only; Google Play identities skip
/// it outright.
pub async fn fetch_app_metadata(
    client: &Client,
    config: &CollectorConfig,
    identity: &AppIdentity,
) -> AppMetadata {
    if identity.store != StoreKind::AppleAppStore {
        tracing::debug!(store = %identity.store, "lookup API is Apple-only; skipping metadata");
        return AppMetadata::new();
    }

    let url = format!(
        "{}/lookup?id={}&country={}",
        config.lookup_base_url.trim_end_matches('/'),
        identity.app_id,
        config.country
    );
    tracing::info!(app_id = %identity.app_id, "fetching app metadata");

    let response = match client
        .get(&url)
        .header(reqwest::header::USER_AGENT, random_user_agent())
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "metadata lookup request failed");
            return AppMetadata::new();
        }
    };

    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), url, "metadata lookup returned non-success");
        return AppMetadata::new();
    }

    let parsed = match response.json::<LookupResponse>().await {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "metadata lookup body did not decode");
            return AppMetadata::new();
        }
    };

    if parsed.result_count == 0 {
        tracing::warn!(app_id = %identity.app_id, "no app metadata found");
        return AppMetadata::new();
    }

    parsed.results.into_iter().next().unwrap_or_default()
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
