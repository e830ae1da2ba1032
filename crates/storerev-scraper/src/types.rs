//! Raw payload types for the review retrieval surfaces.
//!
//! ## Observed shapes
//!
//! ### Storefront review API
//! `GET {amp}/v1/catalog/{country}/apps/{id}/reviews` returns
//! `{ "data": [ { "id": "...", "attributes": { ... } } ] }`. Every
//! attribute is optional in practice; records missing an `id` entirely
//! are dropped during normalization.
//!
//! ### Customer-reviews feed
//! The JSON rendering of the syndication feed nests every scalar under a
//! `label` key (`"title": {"label": "..."}`). Two quirks the parser must
//! absorb:
//! - `feed.entry` is an **object, not an array, when exactly one entry
//!   exists**. [`one_or_many`] coerces both shapes to a `Vec`.
//! - The first entry may be the app's own catalog record rather than a
//!   review; it is detected by the presence of `im:name` and dropped.
//!
//! ### Rendered storefront page
//! Review cards only exist after client-side script execution; the
//! browser strategy extracts each card's optional sub-elements into a
//! [`BrowserCard`] before normalization.

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Storefront review API
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StorefrontReviewsResponse {
    #[serde(default)]
    pub data: Vec<StorefrontReview>,
}

#[derive(Debug, Deserialize)]
pub struct StorefrontReview {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub attributes: StorefrontReviewAttributes,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorefrontReviewAttributes {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default, rename = "reviewerNickname")]
    pub reviewer_nickname: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "storeSortVersion")]
    pub store_sort_version: Option<String>,
}

// ---------------------------------------------------------------------------
// Customer-reviews feed (JSON-wrapped syndication structure)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub feed: Option<Feed>,
}

#[derive(Debug, Deserialize)]
pub struct Feed {
    #[serde(default, deserialize_with = "one_or_many")]
    pub entry: Vec<FeedEntry>,
}

/// A nested `{"label": "..."}` scalar from the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedEntry {
    #[serde(default)]
    pub id: Option<Label>,
    #[serde(default)]
    pub title: Option<Label>,
    #[serde(default)]
    pub content: Option<Label>,
    #[serde(default, rename = "im:rating")]
    pub rating: Option<Label>,
    #[serde(default)]
    pub author: Option<FeedAuthor>,
    #[serde(default)]
    pub updated: Option<Label>,
    #[serde(default, rename = "im:version")]
    pub version: Option<Label>,
    /// Present only on the app's own catalog record, never on a review.
    /// Its presence marks the entry for dropping.
    #[serde(default, rename = "im:name")]
    pub app_name: Option<Label>,
}

impl FeedEntry {
    /// `true` when this entry is the app description record, not a review.
    #[must_use]
    pub fn is_app_description(&self) -> bool {
        self.app_name.is_some()
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedAuthor {
    #[serde(default)]
    pub name: Option<Label>,
}

/// Coerces a JSON value that is either a single object or an array of
/// objects into a `Vec`. The feed emits the bare-object form whenever
/// exactly one entry exists.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        serde_json::Value::Null => Ok(Vec::new()),
        single => Ok(vec![
            serde_json::from_value(single).map_err(serde::de::Error::custom)?
        ]),
    }
}

// ---------------------------------------------------------------------------
// Rendered storefront page
// ---------------------------------------------------------------------------

/// Raw fields pulled from one rendered review card. Every field is
/// optional; defaults are substituted during normalization.
#[derive(Debug, Default)]
pub struct BrowserCard {
    pub title: Option<String>,
    pub body: Option<String>,
    /// Accessibility label of the rating element, e.g. `"4 out of 5"`.
    pub rating_label: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}
