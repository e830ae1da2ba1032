//! Shared helpers for the scraper's unit tests.

use storerev_core::{AppIdentity, CollectorConfig, StoreKind};

/// Config with every base URL pointed at `base` (a wiremock server) and
/// all pacing delays zeroed so tests run instantly.
pub(crate) fn test_config(base: &str) -> CollectorConfig {
    CollectorConfig {
        request_timeout_secs: 5,
        country: "us".to_owned(),
        lookup_base_url: base.to_owned(),
        amp_base_url: base.to_owned(),
        feed_base_url: base.to_owned(),
        apple_page_base_url: base.to_owned(),
        play_page_base_url: base.to_owned(),
        pacing_delay_ms: 0,
        transient_delay_ms: 0,
        storefront_attempts: 1,
        storefront_offset_limit: 10,
        storefront_page_size: 10,
        feed_countries: vec!["us".to_owned()],
        feed_pages: 1,
        webdriver_url: "http://127.0.0.1:1".to_owned(),
        browser_wait_secs: 1,
        browser_scroll_count: 0,
        browser_scroll_delay_ms: 0,
        output_dir: std::path::PathBuf::from("."),
    }
}

pub(crate) fn test_identity() -> AppIdentity {
    AppIdentity::new("6499447981", "one-pass", StoreKind::AppleAppStore)
}
