//! Core error types for Goal Saver.
//!
//! These errors cover the infrastructure around the goal-creation workflow
//! (credential storage, serialization, transport). The workflow itself never
//! surfaces them to the user directly; it maps every failure onto an
//! [`Outcome`](crate::goals::Outcome).

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for Goal Saver.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Secret store error: {0}")]
    Secret(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl Error {
    /// Create a secret store error
    pub fn secret(message: impl Into<String>) -> Self {
        Self::Secret(message.into())
    }

    /// Create an HTTP error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }
}
