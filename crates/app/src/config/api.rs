//! API Config

use std::time::Duration;

use clap::Args;

use crate::client::{ApiClient, ApiClientConfig, ApiError, DEFAULT_BASE_URL};

/// Storefront API connection settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Storefront API base URL
    #[arg(long, env = "SAGAL_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_base_url: String,

    /// Timeout for health and diagnostic requests, in seconds
    #[arg(
        long,
        env = "SAGAL_HEALTH_TIMEOUT_SECONDS",
        default_value_t = 10u64,
        global = true
    )]
    pub health_timeout_seconds: u64,

    /// Timeout for order submission, in seconds
    #[arg(
        long,
        env = "SAGAL_ORDER_TIMEOUT_SECONDS",
        default_value_t = 30u64,
        global = true
    )]
    pub order_timeout_seconds: u64,
}

impl ApiConfig {
    /// Settings for an [`ApiClient`].
    #[must_use]
    pub fn client_config(&self) -> ApiClientConfig {
        ApiClientConfig {
            base_url: self.api_base_url.clone(),
            health_timeout: Duration::from_secs(self.health_timeout_seconds),
            order_timeout: Duration::from_secs(self.order_timeout_seconds),
        }
    }

    /// Build an [`ApiClient`] from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn client(&self) -> Result<ApiClient, ApiError> {
        ApiClient::new(self.client_config())
    }
}
