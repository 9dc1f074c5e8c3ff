//! Easel HTTP Client
//!
//! Typed client for the relay's HTTP API, shared by the worker (to upload
//! rendered mockups) and the CLI.
//!
//! # Example
//!
//! ```no_run
//! use easel_client::RelayClient;
//!
//! # async fn example() -> easel_client::Result<()> {
//! let client = RelayClient::new("http://localhost:3001");
//! for category in client.list_categories().await? {
//!     println!("{}: {:?}", category.name, category.subcategories);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
mod jobs;
mod mockups;

pub use error::{ClientError, Result};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for the relay API
///
/// Methods are grouped by area:
/// - Health and job submission
/// - Template taxonomy and previews
/// - Result uploads
#[derive(Debug, Clone)]
pub struct RelayClient {
    /// Base URL of the relay (e.g., "http://localhost:3001")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl RelayClient {
    /// Create a new relay client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the relay API (e.g., "http://localhost:3001")
    ///
    /// # Example
    /// ```
    /// use easel_client::RelayClient;
    ///
    /// let client = RelayClient::new("http://localhost:3001/");
    /// assert_eq!(client.base_url(), "http://localhost:3001");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new relay client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    /// Keep in mind that `submit_job` may legitimately wait up to two
    /// minutes for the worker.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the relay API
    /// * `client` - A configured reqwest Client
    ///
    /// # Example
    /// ```
    /// use easel_client::RelayClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(150))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = RelayClient::with_client("http://localhost:3001", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the relay
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of `prefix` followed by each of `segments`, percent-encoded
    fn segment_url(&self, prefix: &str, segments: &[&str]) -> String {
        let mut url = self.url(prefix);
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-success statuses become `ClientError::ApiError` carrying the
    /// relay's `error` message.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is raw bytes (e.g., preview images)
    async fn handle_bytes(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::api_error(
        status.as_u16(),
        error_message(status, &body),
    ))
}

/// Pulls the `error` field out of a relay error body
///
/// Falls back to the raw text, or to the status reason when the body is empty.
fn error_message(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();
    }

    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = RelayClient::new("http://localhost:3001/");
        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(client.url("/health"), "http://localhost:3001/health");
    }

    #[test]
    fn test_client_with_custom_client() {
        let client = RelayClient::with_client("http://localhost:3001", Client::new());
        assert_eq!(client.base_url(), "http://localhost:3001");
    }

    #[test]
    fn test_segments_are_encoded() {
        let client = RelayClient::new("http://localhost:3001");
        assert_eq!(
            client.segment_url("/mockup-image", &["poster #1", "kids", "square"]),
            "http://localhost:3001/mockup-image/poster%20%231/kids/square"
        );
        assert_eq!(
            client.segment_url("/delete-mockup", &["a#b.jpg"]),
            "http://localhost:3001/delete-mockup/a%23b.jpg"
        );
    }

    #[test]
    fn test_error_message_prefers_error_field() {
        assert_eq!(
            error_message(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"success":false,"error":"Job timeout"}"#
            ),
            "Job timeout"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"message":"x"}"#),
            r#"{"message":"x"}"#
        );
    }

    #[test]
    fn test_empty_body_uses_status_reason() {
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, "  \n"),
            "Service Unavailable"
        );
    }
}
