//! Error types for the Search Console client.

use serde::Deserialize;

/// Result type for client operations.
pub type SearchConsoleResult<T> = Result<T, SearchConsoleError>;

/// Error types that can occur when talking to the Search Console API.
#[derive(Debug, thiserror::Error)]
pub enum SearchConsoleError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response.
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        reason: Option<String>,
    },

    /// No valid Google credential could be acquired.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SearchConsoleError {
    /// Create an API error from a status code and response body.
    ///
    /// Google error bodies look like
    /// `{"error": {"code": 403, "message": "...", "status": "PERMISSION_DENIED"}}`;
    /// anything else is carried verbatim as the message.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            Self::Api {
                status,
                message: parsed.error.message,
                reason: parsed.error.status,
            }
        } else {
            Self::Api {
                status,
                message: body.to_string(),
                reason: None,
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
    #[serde(default)]
    status: Option<String>,
}
