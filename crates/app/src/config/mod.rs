//! Client configuration module

use clap::Args;

use crate::config::{api::ApiConfig, catalog::CatalogConfig, logging::LoggingConfig};

pub mod api;
pub mod catalog;
pub mod logging;

pub use logging::LogFormat;

/// Storefront client configuration
#[derive(Debug, Args)]
pub struct ClientConfig {
    /// Storefront API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Product catalog settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
