//! Target-application identity: which app, on which storefront.
//!
//! An [`AppIdentity`] is pure configuration — it is supplied once per run
//! and never mutated. Everything that needs a storefront URL derives it
//! from here so the URL shape lives in exactly one place.

use serde::Serialize;

/// The storefront an app lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StoreKind {
    #[serde(rename = "app-store")]
    AppleAppStore,
    #[serde(rename = "google-play")]
    GooglePlay,
}

impl StoreKind {
    /// Production base URL for the storefront's public app pages.
    #[must_use]
    pub fn default_page_base(self) -> &'static str {
        match self {
            StoreKind::AppleAppStore => "https://apps.apple.com",
            StoreKind::GooglePlay => "https://play.google.com",
        }
    }

    /// Short token used in output file names (`appstore` / `googleplay`).
    #[must_use]
    pub fn file_slug(self) -> &'static str {
        match self {
            StoreKind::AppleAppStore => "appstore",
            StoreKind::GooglePlay => "googleplay",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::AppleAppStore => write!(f, "App Store"),
            StoreKind::GooglePlay => write!(f, "Google Play"),
        }
    }
}

/// Identity of the application being collected.
///
/// For the App Store, `app_id` is the numeric track id and `slug` the
/// human-readable path segment (e.g. `one-pass`). For Google Play,
/// `app_id` is the package name and the slug only drives file naming.
#[derive(Debug, Clone, Serialize)]
pub struct AppIdentity {
    #[serde(rename = "app_id")]
    pub app_id: String,
    #[serde(rename = "app_name")]
    pub slug: String,
    pub store: StoreKind,
}

impl AppIdentity {
    #[must_use]
    pub fn new(app_id: impl Into<String>, slug: impl Into<String>, store: StoreKind) -> Self {
        Self {
            app_id: app_id.into(),
            slug: slug.into(),
            store,
        }
    }

    /// Canonical public page for the app, built against `page_base` so
    /// tests can point it at a mock server.
    #[must_use]
    pub fn canonical_url(&self, page_base: &str, country: &str) -> String {
        let base = page_base.trim_end_matches('/');
        match self.store {
            StoreKind::AppleAppStore => {
                format!("{base}/{country}/app/{}/id{}", self.slug, self.app_id)
            }
            StoreKind::GooglePlay => {
                format!(
                    "{base}/store/apps/details?id={}&hl=en&gl={country}",
                    self.app_id
                )
            }
        }
    }

    /// Canonical page against the production storefront.
    #[must_use]
    pub fn store_url(&self, country: &str) -> String {
        self.canonical_url(self.store.default_page_base(), country)
    }
}
