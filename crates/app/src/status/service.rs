//! Status service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    client::{ApiClient, ApiError},
    status::models::{DebugInfo, HealthReport},
};

/// Status service backed by the storefront HTTP API.
#[derive(Debug, Clone)]
pub struct HttpStatusService {
    client: ApiClient,
}

impl HttpStatusService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusService for HttpStatusService {
    async fn health(&self) -> Result<HealthReport, ApiError> {
        self.client.health().await
    }

    async fn debug(&self) -> Result<DebugInfo, ApiError> {
        self.client.debug().await
    }
}

#[automock]
#[async_trait]
pub trait StatusService: Send + Sync {
    /// Probe service health. Any success means the service is reachable.
    async fn health(&self) -> Result<HealthReport, ApiError>;

    /// Fetch service diagnostics.
    async fn debug(&self) -> Result<DebugInfo, ApiError>;
}
