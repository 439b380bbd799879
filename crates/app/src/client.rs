//! HTTP client for the storefront API.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use sagal::orders::OrderRequest;

use crate::{
    orders::OrderEnvelope,
    status::{DebugInfo, HealthReport},
};

/// Base URL of the hosted storefront API.
pub const DEFAULT_BASE_URL: &str = "https://sagal-app.onrender.com/api";

/// Configuration for connecting to the storefront API.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// API root, e.g. `"https://sagal-app.onrender.com/api"`.
    pub base_url: String,

    /// Timeout for health and diagnostic requests.
    pub health_timeout: Duration,

    /// Timeout for order submission.
    pub order_timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            health_timeout: Duration::from_secs(10),
            order_timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the `/health`, `/debug` and `/orders` endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    http: Client,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("sagal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Probe `GET /health`.
    ///
    /// Any 2xx counts as healthy; the body is informational and may be absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the service is unreachable or answers with a
    /// non-success status.
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn health(&self) -> Result<HealthReport, ApiError> {
        let response = self
            .http
            .get(self.url("health"))
            .timeout(self.config.health_timeout)
            .send()
            .await?;

        let body = success_body(response).await?;

        debug!("health check succeeded");

        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    /// Fetch `GET /debug` diagnostics.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status or a body
    /// that is not JSON.
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn debug(&self) -> Result<DebugInfo, ApiError> {
        let response = self
            .http
            .get(self.url("debug"))
            .timeout(self.config.health_timeout)
            .send()
            .await?;

        decode(&success_body(response).await?)
    }

    /// Submit an order with `POST /orders`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status (carrying
    /// the body's `message` when there is one) or an undecodable body.
    #[instrument(skip_all, fields(base_url = %self.config.base_url, lines = order.items.len()))]
    pub async fn create_order(&self, order: &OrderRequest) -> Result<OrderEnvelope, ApiError> {
        let response = self
            .http
            .post(self.url("orders"))
            .timeout(self.config.order_timeout)
            .json(order)
            .send()
            .await?;

        decode(&success_body(response).await?)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }
}

async fn success_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        return Ok(text);
    }

    Err(ApiError::Status {
        status,
        message: server_message(&text),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(ApiError::Decode)
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Extract a non-blank `message` field from an error body, if present.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service could not be reached: connection refused, DNS failure or timeout.
    #[error("service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Any other HTTP transport error.
    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service responded with status {status}")]
    Status {
        /// Response status
        status: StatusCode,

        /// `message` field of the response body, if any
        message: Option<String>,
    },

    /// The response body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::Unreachable(error)
        } else {
            Self::Http(error)
        }
    }
}
