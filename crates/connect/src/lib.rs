//! Goal Saver Connect - HTTP client for the goals API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use goalsaver_connect::GoalApiClient;
//!
//! let client = GoalApiClient::new("https://api.example.com", Duration::from_secs(30))?;
//! let response = client.post_goal(&request, "access_token").await?;
//! ```

mod client;
mod error;

pub use client::{GoalApiClient, DEFAULT_TIMEOUT_SECS};
pub use error::{ConnectError, Result};
