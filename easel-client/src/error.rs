//! Error types for the relay client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the relay
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Relay answered with an error status
    ///
    /// `message` is the relay's `error` field when the body carries one,
    /// otherwise the raw body text.
    #[error("{message} (status {status})")]
    ApiError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// The relay's own error message, if this is an API error
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::ApiError { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the relay reported that no worker is connected
    pub fn is_unavailable(&self) -> bool {
        self.status() == Some(503)
    }
}
