//! Collector configuration, loaded from environment variables.
//!
//! Nothing is required: every knob has a production default, so a bare
//! `storerev collect ...` works without any environment at all. Base URLs
//! are configurable purely so tests can point the collector at a mock
//! server. The parsing core is decoupled from `std::env` via a lookup
//! function so tests never touch process-wide state.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Tunables for one collection run.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Per-request timeout for all plain HTTP calls.
    pub request_timeout_secs: u64,
    /// Storefront country code used for lookup, page URLs, and the
    /// storefront review API.
    pub country: String,

    /// Base of the iTunes lookup API (`{base}/lookup?...`).
    pub lookup_base_url: String,
    /// Base of the authenticated storefront review API.
    pub amp_base_url: String,
    /// Base of the public customer-reviews feed.
    pub feed_base_url: String,
    /// Base of the public app pages; tokens are scraped from here.
    pub apple_page_base_url: String,
    pub play_page_base_url: String,

    /// Fixed delay between paced requests, the self-throttle against the
    /// remote service.
    pub pacing_delay_ms: u64,
    /// Wait applied after a transport error before carrying on.
    pub transient_delay_ms: u64,

    /// Outer repeat count for the storefront review API.
    pub storefront_attempts: u32,
    /// Exclusive offset ceiling; offsets advance by `storefront_page_size`.
    pub storefront_offset_limit: u32,
    pub storefront_page_size: u32,

    /// Locale codes tried by the feed strategy, in order.
    pub feed_countries: Vec<String>,
    /// Pages 1..=N tried per feed locale.
    pub feed_pages: u32,

    /// WebDriver endpoint for the interactive-session strategy.
    pub webdriver_url: String,
    /// Bounded wait for the ratings summary region to render.
    pub browser_wait_secs: u64,
    pub browser_scroll_count: u32,
    pub browser_scroll_delay_ms: u64,

    /// Directory output files are written into.
    pub output_dir: PathBuf,
}

/// Load configuration from the process environment, reading `.env` first.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] when a set variable fails to
/// parse. Unset variables fall back to defaults.
pub fn load_collector_config() -> Result<CollectorConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_collector_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// This is the parsing/validation core, testable with a plain `HashMap`
/// lookup — no `set_var`/`remove_var` needed.
pub fn build_collector_config<F>(lookup: F) -> Result<CollectorConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let feed_countries: Vec<String> = or_default("STOREREV_FEED_COUNTRIES", "us,gb,ca,au")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if feed_countries.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREREV_FEED_COUNTRIES".to_string(),
            reason: "must name at least one country code".to_string(),
        });
    }

    Ok(CollectorConfig {
        request_timeout_secs: parse_u64("STOREREV_REQUEST_TIMEOUT_SECS", "30")?,
        country: or_default("STOREREV_COUNTRY", "us"),

        lookup_base_url: or_default("STOREREV_LOOKUP_BASE_URL", "https://itunes.apple.com"),
        amp_base_url: or_default("STOREREV_AMP_BASE_URL", "https://amp-api.apps.apple.com"),
        feed_base_url: or_default("STOREREV_FEED_BASE_URL", "https://itunes.apple.com"),
        apple_page_base_url: or_default("STOREREV_APPLE_PAGE_BASE_URL", "https://apps.apple.com"),
        play_page_base_url: or_default("STOREREV_PLAY_PAGE_BASE_URL", "https://play.google.com"),

        pacing_delay_ms: parse_u64("STOREREV_PACING_DELAY_MS", "1000")?,
        transient_delay_ms: parse_u64("STOREREV_TRANSIENT_DELAY_MS", "2000")?,

        storefront_attempts: parse_u32("STOREREV_STOREFRONT_ATTEMPTS", "3")?,
        storefront_offset_limit: parse_u32("STOREREV_STOREFRONT_OFFSET_LIMIT", "30")?,
        storefront_page_size: parse_u32("STOREREV_STOREFRONT_PAGE_SIZE", "10")?,

        feed_countries,
        feed_pages: parse_u32("STOREREV_FEED_PAGES", "3")?,

        webdriver_url: or_default("STOREREV_WEBDRIVER_URL", "http://localhost:4444"),
        browser_wait_secs: parse_u64("STOREREV_BROWSER_WAIT_SECS", "20")?,
        browser_scroll_count: parse_u32("STOREREV_BROWSER_SCROLL_COUNT", "10")?,
        browser_scroll_delay_ms: parse_u64("STOREREV_BROWSER_SCROLL_DELAY_MS", "2000")?,

        output_dir: PathBuf::from(or_default("STOREREV_OUTPUT_DIR", ".")),
    })
}

impl CollectorConfig {
    /// Page base for the given store, honoring the test overrides.
    #[must_use]
    pub fn page_base_for(&self, store: crate::identity::StoreKind) -> &str {
        match store {
            crate::identity::StoreKind::AppleAppStore => &self.apple_page_base_url,
            crate::identity::StoreKind::GooglePlay => &self.play_page_base_url,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
