//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A URL could not be constructed from the base URL and path.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request failed below the HTTP layer (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    /// A 2xx response body failed to parse as the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Pagination followed more `next` links than the configured cap allows.
    #[error("pagination exceeded {limit} pages")]
    TooManyPages { limit: usize },
}

impl Error {
    /// Whether a retry attempt may succeed where this failure did not.
    ///
    /// The open data API answers 429 when rate-limited and 503 during
    /// maintenance windows; both clear on their own. Transport-level
    /// timeouts and connect failures are equally transient. Every other
    /// status short-circuits the retry loop.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Status { status, .. } => *status == 429 || *status == 503,
            Error::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
