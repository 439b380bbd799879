//! Service status

pub mod models;
pub mod service;

pub use models::{DebugEnvironment, DebugInfo, HealthReport};
pub use service::*;
