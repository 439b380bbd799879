//! Catalog Config

use std::path::PathBuf;

use clap::Args;
use sagal::catalog::{Catalog, CatalogError};
use tracing::debug;

/// Product catalog settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// YAML catalog to use instead of the bundled one
    #[arg(long = "catalog", env = "SAGAL_CATALOG", global = true)]
    pub catalog_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or is invalid.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => {
                debug!(path = %path.display(), "loading catalog");
                Catalog::from_path(path)
            }
            None => Catalog::bundled(),
        }
    }
}
