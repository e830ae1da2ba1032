use std::collections::HashMap;

use super::*;

fn lookup_from<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a {
    move |key: &str| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(std::env::VarError::NotPresent)
    }
}

#[test]
fn defaults_apply_when_env_is_empty() {
    let env = HashMap::new();
    let config = build_collector_config(lookup_from(&env)).expect("defaults are valid");

    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.country, "us");
    assert_eq!(config.lookup_base_url, "https://itunes.apple.com");
    assert_eq!(config.amp_base_url, "https://amp-api.apps.apple.com");
    assert_eq!(config.pacing_delay_ms, 1000);
    assert_eq!(config.storefront_attempts, 3);
    assert_eq!(config.storefront_offset_limit, 30);
    assert_eq!(config.storefront_page_size, 10);
    assert_eq!(config.feed_countries, vec!["us", "gb", "ca", "au"]);
    assert_eq!(config.feed_pages, 3);
    assert_eq!(config.webdriver_url, "http://localhost:4444");
    assert_eq!(config.browser_wait_secs, 20);
    assert_eq!(config.output_dir, std::path::PathBuf::from("."));
}

#[test]
fn explicit_values_override_defaults() {
    let mut env = HashMap::new();
    env.insert("STOREREV_COUNTRY", "de");
    env.insert("STOREREV_PACING_DELAY_MS", "0");
    env.insert("STOREREV_OUTPUT_DIR", "/tmp/reviews");
    let config = build_collector_config(lookup_from(&env)).expect("overrides are valid");

    assert_eq!(config.country, "de");
    assert_eq!(config.pacing_delay_ms, 0);
    assert_eq!(config.output_dir, std::path::PathBuf::from("/tmp/reviews"));
}

#[test]
fn invalid_numeric_value_is_a_typed_error() {
    let mut env = HashMap::new();
    env.insert("STOREREV_FEED_PAGES", "three");
    let err = build_collector_config(lookup_from(&env)).unwrap_err();

    assert!(
        matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "STOREREV_FEED_PAGES"),
        "expected InvalidEnvVar for STOREREV_FEED_PAGES, got: {err:?}"
    );
}

#[test]
fn feed_countries_parse_as_trimmed_list() {
    let mut env = HashMap::new();
    env.insert("STOREREV_FEED_COUNTRIES", "us, fr ,de");
    let config = build_collector_config(lookup_from(&env)).expect("list is valid");
    assert_eq!(config.feed_countries, vec!["us", "fr", "de"]);
}

#[test]
fn empty_feed_country_list_is_rejected() {
    let mut env = HashMap::new();
    env.insert("STOREREV_FEED_COUNTRIES", " , ");
    let err = build_collector_config(lookup_from(&env)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { .. }));
}

#[test]
fn page_base_for_store_honors_overrides() {
    let mut env = HashMap::new();
    env.insert("STOREREV_APPLE_PAGE_BASE_URL", "http://127.0.0.1:8080");
    let config = build_collector_config(lookup_from(&env)).expect("override is valid");

    assert_eq!(
        config.page_base_for(crate::identity::StoreKind::AppleAppStore),
        "http://127.0.0.1:8080"
    );
    assert_eq!(
        config.page_base_for(crate::identity::StoreKind::GooglePlay),
        "https://play.google.com"
    );
}
