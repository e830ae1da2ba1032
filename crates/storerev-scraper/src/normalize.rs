//! Normalization from raw strategy payloads to [`ReviewRecord`].
//!
//! One pure function per payload shape. Defaulting rules are fixed:
//! empty string for title/content, `"Anonymous"` author, `"N/A"` version,
//! `None` rating, today's date when the source has none. A record that
//! cannot supply even an id is dropped with a logged reason, never fatal
//! to the batch.

use chrono::Utc;
use storerev_core::review::{ReviewRecord, DEFAULT_AUTHOR, UNKNOWN_VERSION};

use crate::types::{BrowserCard, FeedEntry, StorefrontReview};

/// Source tag for records produced by the storefront review API.
pub const SOURCE_STOREFRONT_API: &str = "StoreFront API";

/// Source tag for records produced by the browser session.
pub const SOURCE_BROWSER: &str = "Browser Session";

/// Maps one storefront API review. Returns `None` (logged) when the
/// payload carries no id.
#[must_use]
pub fn normalize_storefront_review(review: StorefrontReview) -> Option<ReviewRecord> {
    if review.id.is_empty() {
        tracing::warn!("skipping storefront review with no id");
        return None;
    }
    let attributes = review.attributes;
    Some(ReviewRecord {
        id: review.id,
        title: attributes.title.unwrap_or_default(),
        content: attributes.review.unwrap_or_default(),
        rating: attributes.rating,
        author: attributes
            .reviewer_nickname
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
        date: attributes
            .date
            .filter(|s| !s.is_empty())
            .unwrap_or_else(today),
        version: attributes
            .store_sort_version
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_VERSION.to_owned()),
        source: SOURCE_STOREFRONT_API.to_owned(),
    })
}

/// Maps one feed entry. The `country` tags the record's source so mixed
/// output stays attributable. Returns `None` (logged) for entries with
/// no id label.
#[must_use]
pub fn normalize_feed_entry(entry: FeedEntry, country: &str) -> Option<ReviewRecord> {
    let id = entry.id.map(|l| l.label).filter(|s| !s.is_empty());
    let Some(id) = id else {
        tracing::warn!(country, "skipping feed entry with no id label");
        return None;
    };
    Some(ReviewRecord {
        id,
        title: entry.title.map(|l| l.label).unwrap_or_default(),
        content: entry.content.map(|l| l.label).unwrap_or_default(),
        rating: entry.rating.and_then(|l| l.label.trim().parse().ok()),
        author: entry
            .author
            .and_then(|a| a.name)
            .map(|l| l.label)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
        date: entry
            .updated
            .map(|l| l.label)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(today),
        version: entry
            .version
            .map(|l| l.label)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_VERSION.to_owned()),
        source: format!("RSS Feed ({country})"),
    })
}

/// Maps one rendered review card. Cards have no natural id, so a
/// strategy-scoped one is synthesized from the card's position.
#[must_use]
pub fn normalize_browser_card(index: usize, card: BrowserCard) -> ReviewRecord {
    ReviewRecord {
        id: format!("appstore_review_{}", index + 1),
        title: card.title.unwrap_or_else(|| "No Title".to_owned()),
        content: card.body.unwrap_or_else(|| "No Content".to_owned()),
        rating: card.rating_label.as_deref().and_then(parse_leading_rating),
        author: card.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
        date: card.date.unwrap_or_else(today),
        version: UNKNOWN_VERSION.to_owned(),
        source: SOURCE_BROWSER.to_owned(),
    }
}

/// Parses the leading integer out of an accessibility label such as
/// `"4 out of 5"`.
#[must_use]
pub fn parse_leading_rating(label: &str) -> Option<u8> {
    label.split_whitespace().next()?.parse().ok()
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
