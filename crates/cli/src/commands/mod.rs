//! CLI subcommands.

pub mod navigations;
pub mod resolve;

use shoebox_storefront::catalog::CatalogClient;
use shoebox_storefront::config::{CatalogConfig, ConfigError};

/// Build a catalog client from `CATALOG_GRAPHQL_URL` and
/// `CATALOG_ACCESS_TOKEN`.
fn catalog_client() -> Result<CatalogClient, ConfigError> {
    let config = CatalogConfig::from_env()?;
    tracing::info!("Using catalog at {}", config.graphql_url);
    Ok(CatalogClient::new(&config))
}
