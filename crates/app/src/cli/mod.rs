use clap::{Parser, Subcommand};
use sagal_app::{config::ClientConfig, observability};

mod catalog;
mod debug;
mod health;
mod order;

#[derive(Debug, Parser)]
#[command(name = "sagal", about = "Sagal gas storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products in the catalog
    Catalog(catalog::CatalogArgs),

    /// Check whether the storefront API is reachable
    Health,

    /// Show the storefront API's diagnostic information
    Debug,

    /// Place a cash-on-delivery order
    Order(order::OrderArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.config.logging).map_err(|error| error.to_string())?;

        match self.command {
            Commands::Catalog(args) => catalog::run(&self.config, &args),
            Commands::Health => health::run(&self.config).await,
            Commands::Debug => debug::run(&self.config).await,
            Commands::Order(args) => order::run(&self.config, args).await,
        }
    }
}
