use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("WebDriver endpoint unavailable at {endpoint}: {reason}")]
    WebDriverUnavailable { endpoint: String, reason: String },

    #[error("browser session error: {0}")]
    Session(String),
}

impl ScraperError {
    /// `true` when the error means the rendering capability is missing
    /// entirely, as opposed to a failure inside an otherwise working
    /// session. The CLI exits non-zero on this when the browser family
    /// was explicitly requested.
    #[must_use]
    pub fn is_missing_capability(&self) -> bool {
        matches!(self, ScraperError::WebDriverUnavailable { .. })
    }
}
