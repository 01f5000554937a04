//! REST client for the mockup provider, using [`reqwest`].

use async_trait::async_trait;
use prodgen_core::error::CoreError;
use prodgen_core::mockup::{MockupSource, RawMockup};
use serde::Deserialize;

/// Default base URL of the provider's v1 API.
pub const DEFAULT_API_URL: &str = "https://app.dynamicmockups.com/api/v1";

/// Header carrying the provider API key.
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the mockup provider.
pub struct MockupsApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Envelope returned by `GET /mockups`.
#[derive(Debug, Deserialize)]
pub struct MockupListResponse {
    #[serde(default)]
    pub data: Vec<RawMockup>,
}

/// Errors from the mockup provider API layer.
#[derive(Debug, thiserror::Error)]
pub enum MockupsApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Mockups API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl From<MockupsApiError> for CoreError {
    fn from(err: MockupsApiError) -> Self {
        CoreError::Upstream(err.to_string())
    }
}

impl MockupsApi {
    /// Create a client.
    ///
    /// * `api_url` - Base URL without trailing slash, e.g. [`DEFAULT_API_URL`].
    pub fn new(api_url: String, api_key: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, api_key)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// List all mockups available to the account.
    pub async fn list_mockups(&self) -> Result<Vec<RawMockup>, MockupsApiError> {
        let response = self
            .client
            .get(format!("{}/mockups", self.api_url))
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let body: MockupListResponse = Self::parse_response(response).await?;
        tracing::debug!(count = body.data.len(), "Fetched mockups");
        Ok(body.data)
    }

    // ---- private helpers ----

    /// Return the response unchanged on a 2xx status, or an
    /// [`MockupsApiError::ApiError`] with the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, MockupsApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MockupsApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, MockupsApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl MockupSource for MockupsApi {
    async fn fetch_mockups(&self) -> Result<Vec<RawMockup>, CoreError> {
        self.list_mockups().await.map_err(|e| {
            tracing::warn!(error = %e, "Mockup catalog fetch failed");
            CoreError::from(e)
        })
    }
}
