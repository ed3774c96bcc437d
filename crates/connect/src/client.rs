//! HTTP client for the goals API.
//!
//! Unlike most API clients, non-2xx statuses are not turned into errors here:
//! the goal creation workflow decides what a status means, so every response
//! that arrives is handed back as an [`ApiResponse`].

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

use goalsaver_core::constants::CREATE_GOAL_PATH;
use goalsaver_core::goals::{ApiResponse, GoalApiClientTrait, GoalCreationRequest};

use crate::error::{ConnectError, Result};

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the goals REST API.
#[derive(Debug, Clone)]
pub struct GoalApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoalApiClient {
    /// Create a new goals API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the API (e.g., "https://api.example.com")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create headers for an authenticated JSON request.
    fn headers(&self, token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ConnectError::auth("Invalid access token format"))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(headers)
    }

    /// Read status and body, whatever the status is.
    ///
    /// JSON bodies are parsed; anything else is kept as a string, and an
    /// empty body becomes `null`.
    async fn read_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!("[GoalApi] Response ({}): {}", status, text);

        let body = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
        };

        Ok(ApiResponse::new(status, body))
    }

    /// Create a goal.
    ///
    /// POST /create/goal
    pub async fn post_goal(
        &self,
        request: &GoalCreationRequest,
        token: &str,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, CREATE_GOAL_PATH);
        debug!("[GoalApi] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers(token)?)
            .json(request)
            .send()
            .await?;

        Self::read_response(response).await
    }
}

#[async_trait]
impl GoalApiClientTrait for GoalApiClient {
    async fn create_goal(
        &self,
        request: &GoalCreationRequest,
        token: &str,
    ) -> goalsaver_core::Result<ApiResponse> {
        Ok(self.post_goal(request, token).await?)
    }
}
