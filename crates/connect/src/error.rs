//! Error types for the connect crate.

use thiserror::Error;

/// Result type alias for goals API operations.
pub type Result<T> = std::result::Result<T, ConnectError>;

/// Errors that can occur while talking to the goals API.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// HTTP client error (connection, DNS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication error (token not usable as a header value)
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl ConnectError {
    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }
}

impl From<ConnectError> for goalsaver_core::Error {
    fn from(e: ConnectError) -> Self {
        goalsaver_core::Error::Http(e.to_string())
    }
}
