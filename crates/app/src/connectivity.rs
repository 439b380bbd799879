//! Connectivity
//!
//! Tracks whether the storefront API is reachable. The status starts out
//! [`ConnectionStatus::Unknown`] and is published on a watch channel so any
//! number of observers can follow transitions.

use std::{fmt, sync::Arc};

use tokio::{sync::watch, task::JoinHandle};
use tracing::{info, warn};

use crate::status::StatusService;

/// Reachability of the storefront API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No probe has completed yet, or one is in flight.
    #[default]
    Unknown,

    /// The last health probe succeeded.
    Connected,

    /// The last health probe or submission could not reach the service.
    Offline,
}

impl ConnectionStatus {
    /// Short status label for display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Checking connection...",
            Self::Connected => "Connected",
            Self::Offline => "Offline",
        }
    }

    /// Whether orders may be submitted.
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Connected => "connected",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared connectivity state. Clones observe and update the same status.
#[derive(Debug, Clone)]
pub struct ConnectivityMonitor {
    status: Arc<watch::Sender<ConnectionStatus>>,
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityMonitor {
    /// Create a monitor in the [`ConnectionStatus::Unknown`] state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: Arc::new(watch::Sender::new(ConnectionStatus::Unknown)),
        }
    }

    /// The most recently published status.
    pub fn status(&self) -> ConnectionStatus {
        *self.status.borrow()
    }

    /// Subscribe to status transitions.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionStatus> {
        self.status.subscribe()
    }

    /// Publish `status`, notifying subscribers only when it changes.
    pub fn set(&self, status: ConnectionStatus) {
        let changed = self.status.send_if_modified(|current| {
            if *current == status {
                return false;
            }

            *current = status;
            true
        });

        if changed {
            info!(%status, "connection status changed");
        }
    }

    /// Record that the service could not be reached outside of a probe.
    pub fn mark_offline(&self) {
        self.set(ConnectionStatus::Offline);
    }

    /// Run one health probe and publish its outcome.
    pub async fn check(&self, service: &dyn StatusService) -> ConnectionStatus {
        self.set(ConnectionStatus::Unknown);

        let status = match service.health().await {
            Ok(_) => ConnectionStatus::Connected,
            Err(error) => {
                warn!(%error, "health check failed");
                ConnectionStatus::Offline
            }
        };

        self.set(status);

        status
    }

    /// Spawn a health probe in the background.
    pub fn probe(&self, service: Arc<dyn StatusService>) -> JoinHandle<ConnectionStatus> {
        let monitor = self.clone();

        tokio::spawn(async move { monitor.check(service.as_ref()).await })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use testresult::TestResult;

    use crate::{
        client::ApiError,
        status::{HealthReport, MockStatusService},
    };

    use super::*;

    fn healthy() -> MockStatusService {
        let mut service = MockStatusService::new();

        service
            .expect_health()
            .times(1)
            .returning(|| Ok(HealthReport::default()));

        service
    }

    fn unhealthy() -> MockStatusService {
        let mut service = MockStatusService::new();

        service.expect_health().times(1).returning(|| {
            Err(ApiError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: None,
            })
        });

        service
    }

    #[test]
    fn starts_unknown() {
        let monitor = ConnectivityMonitor::new();

        assert_eq!(monitor.status(), ConnectionStatus::Unknown);
        assert!(!monitor.status().is_connected());
    }

    #[tokio::test]
    async fn successful_probe_connects() {
        let monitor = ConnectivityMonitor::new();

        let status = monitor.check(&healthy()).await;

        assert_eq!(status, ConnectionStatus::Connected);
        assert_eq!(monitor.status(), ConnectionStatus::Connected);
    }

    #[tokio::test]
    async fn failed_probe_goes_offline() {
        let monitor = ConnectivityMonitor::new();

        monitor.check(&unhealthy()).await;

        assert_eq!(monitor.status(), ConnectionStatus::Offline);
    }

    #[tokio::test]
    async fn background_probe_notifies_subscribers() -> TestResult {
        let monitor = ConnectivityMonitor::new();
        let mut updates = monitor.subscribe();

        let status = monitor.probe(Arc::new(healthy())).await?;

        assert_eq!(status, ConnectionStatus::Connected);
        assert!(updates.has_changed()?, "subscriber should see the update");
        assert_eq!(*updates.borrow_and_update(), ConnectionStatus::Connected);

        Ok(())
    }

    #[test]
    fn clones_share_state() {
        let monitor = ConnectivityMonitor::new();
        let observer = monitor.clone();

        monitor.mark_offline();

        assert_eq!(observer.status(), ConnectionStatus::Offline);
    }

    #[test]
    fn unchanged_status_does_not_notify() {
        let monitor = ConnectivityMonitor::new();
        let updates = monitor.subscribe();

        monitor.set(ConnectionStatus::Unknown);

        assert_eq!(updates.has_changed().ok(), Some(false));
    }

    #[test]
    fn labels_and_display() {
        assert_eq!(ConnectionStatus::Connected.label(), "Connected");
        assert_eq!(ConnectionStatus::Offline.to_string(), "offline");
        assert_eq!(ConnectionStatus::default().to_string(), "unknown");
    }
}
