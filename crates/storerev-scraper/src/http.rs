//! Shared HTTP plumbing: client construction and user-agent rotation.

use std::time::Duration;

use rand::prelude::IndexedRandom;
use reqwest::Client;

use crate::error::ScraperError;

/// Browser-like user agents rotated per request so repeated polling does
/// not present a single fingerprint to the storefront.
const USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.5 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1",
];

/// Picks one of the rotating user agents.
#[must_use]
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

/// Builds the `reqwest` client used by every plain-HTTP strategy.
///
/// No default `User-Agent` is set on the client; each request attaches
/// one from the rotating pool instead.
///
/// # Errors
///
/// Returns [`ScraperError::Http`] if the client cannot be constructed.
pub fn build_http_client(timeout_secs: u64) -> Result<Client, ScraperError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_user_agent_comes_from_the_pool() {
        for _ in 0..20 {
            let ua = random_user_agent();
            assert!(USER_AGENTS.contains(&ua));
        }
    }

    #[test]
    fn client_builds_with_small_timeout() {
        assert!(build_http_client(1).is_ok());
    }
}
