//! Error types for content fetching.

/// Error from content API operations.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body was not the expected JSON.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl ContentError {
    /// True for failures that never reached a server response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpRequest(_))
    }
}
