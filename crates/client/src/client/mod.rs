//! HTTP client for the gymdesk member API.

pub mod members;

use std::time::Duration;

use gymdesk_core::storage::{check_content_type, status_to_store_error, StoreError};
use reqwest::{Method, RequestBuilder};

/// HTTP client for the gymdesk API.
///
/// One call is one request. Caching, coalescing and retries are layered on
/// top by [`crate::repository::MemberRepository`].
#[derive(Debug, Clone)]
pub struct GymdeskClient {
    client: reqwest::Client,
    base_url: String,
    request_timeout: Option<Duration>,
}

impl GymdeskClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: None,
        }
    }

    /// Bounds every request by `timeout` at the transport level.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request to `path`, applying the request timeout if set.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.request_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    /// Send a request, classifying transport-level failures.
    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, StoreError> {
        builder.send().await.map_err(|error| self.transport_error(error))
    }

    fn transport_error(&self, error: reqwest::Error) -> StoreError {
        if error.is_timeout() {
            let millis = self.request_timeout.map_or(0, |t| t.as_millis() as u64);
            StoreError::Timeout(millis)
        } else if error.is_decode() || error.is_body() {
            StoreError::InvalidResponse(error.to_string())
        } else {
            StoreError::NetworkUnreachable(error.to_string())
        }
    }

    /// Read a JSON body, mapping every failure to a [`StoreError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        target: &str,
    ) -> Result<T, StoreError> {
        let status = response.status();
        check_content_type(status.as_u16(), content_type(&response), status.is_success())?;

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StoreError::InvalidResponse(e.to_string()))
        } else {
            Err(self.error_from(response, target).await)
        }
    }

    /// Handle mutation responses (body ignored on success).
    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        target: &str,
    ) -> Result<(), StoreError> {
        let status = response.status();
        check_content_type(status.as_u16(), content_type(&response), false)?;

        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from(response, target).await)
        }
    }

    async fn error_from(&self, response: reqwest::Response, target: &str) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        status_to_store_error(status, &body, target)
    }
}

fn content_type(response: &reqwest::Response) -> Option<&str> {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}
