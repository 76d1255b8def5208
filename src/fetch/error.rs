//! Errors raised while fetching posts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (DNS, connect, timeout)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not a JSON array of posts
    #[error("Failed to decode posts from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Short message for the footer.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Client(_) => "HTTP client unavailable".to_string(),
            FetchError::Request { source, .. } if source.is_timeout() => {
                "request timed out".to_string()
            }
            FetchError::Request { .. } => "network unreachable".to_string(),
            FetchError::Status { status, .. } => format!("server returned HTTP {status}"),
            FetchError::Decode { .. } => "response was not a list of posts".to_string(),
        }
    }
}
