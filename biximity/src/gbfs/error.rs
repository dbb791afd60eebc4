//! GBFS feed error types.

/// Errors that can occur when fetching a GBFS feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned an error status
    #[error("feed error {status} from {url}")]
    Status { status: u16, url: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client could not be built from the given configuration
    #[error("invalid feed configuration: {0}")]
    Config(String),
}
