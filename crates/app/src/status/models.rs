//! Status models.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of a healthy `GET /health` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HealthReport {
    /// Status string reported by the service, e.g. `"OK"`
    #[serde(default)]
    pub status: Option<String>,
}

/// Diagnostics returned by `GET /debug`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DebugInfo {
    /// Free-form message from the service
    #[serde(default)]
    pub message: Option<String>,

    /// Runtime environment details
    #[serde(default)]
    pub environment: Option<DebugEnvironment>,

    /// Any other fields the service includes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DebugInfo {
    /// The service's deployment environment name, if reported.
    pub fn node_env(&self) -> Option<&str> {
        self.environment
            .as_ref()
            .and_then(|environment| environment.node_env.as_deref())
    }
}

/// `environment` section of the debug response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DebugEnvironment {
    /// Deployment environment name, e.g. `"production"`
    #[serde(default)]
    pub node_env: Option<String>,

    /// Remaining environment entries
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
