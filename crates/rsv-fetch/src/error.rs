//! Error types for fetching reservation data.

use thiserror::Error;

/// Errors that can occur while fetching the reservation list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Body was valid JSON but not an array of records.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(String),
}

impl FetchError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => {
                "Could not reach the reservation server. Please check your connection."
            }
            Self::Status { status } if *status >= 500 => {
                "The reservation server is having trouble. Please try again later."
            }
            Self::Status { .. } => "The reservation server rejected the request.",
            Self::InvalidPayload(_) | Self::Json(_) => {
                "The reservation server returned data in an unexpected format."
            }
        }
    }

    /// Returns whether a manual reload may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status } => *status >= 500 || *status == 429,
            Self::InvalidPayload(_) | Self::Json(_) => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
            },
            None => Self::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
