//! Resolve a products path the way the storefront does.
//!
//! # Environment Variables
//!
//! - `CATALOG_GRAPHQL_URL` - Catalog GraphQL endpoint
//! - `CATALOG_ACCESS_TOKEN` - Optional bearer token

use shoebox_core::{PRODUCTS_ROUTE, PathError, ProductsPath, SortOrder};
use shoebox_storefront::catalog::CatalogError;
use shoebox_storefront::config::ConfigError;
use shoebox_storefront::resolver::{ProductListPage, Resolution, resolve_product_list_page};
use thiserror::Error;

/// Errors that can occur while resolving a path.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid products path: {0}")]
    Path(#[from] PathError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Could not serialize page props: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolve `path` and print the outcome to stdout.
///
/// # Errors
///
/// Returns `ResolveError` if configuration is missing, the path is
/// malformed, or a catalog query fails.
pub async fn run(path: &str, order: Option<&str>) -> Result<(), ResolveError> {
    let client = super::catalog_client()?;
    let path = parse_path(path)?;
    let order = SortOrder::from_query(order);

    tracing::info!(
        navigation = %path.navigation_uid,
        segment = %path.segment,
        ?order,
        "Resolving products path"
    );

    let resolution = resolve_product_list_page(&client, &path, order).await?;
    print_output(&render(&resolution)?);
    Ok(())
}

/// Accept a full products URL path or just the part after it.
fn parse_path(input: &str) -> Result<ProductsPath, PathError> {
    let trimmed = input.trim().trim_start_matches('/');
    let route = PRODUCTS_ROUTE.trim_start_matches('/');
    let tail = trimmed
        .strip_prefix(route)
        .filter(|rest| rest.is_empty() || rest.starts_with('/'))
        .unwrap_or(trimmed);
    ProductsPath::parse(tail)
}

fn render(resolution: &Resolution<ProductListPage>) -> Result<String, serde_json::Error> {
    Ok(match resolution {
        Resolution::Page(page) => serde_json::to_string_pretty(page)?,
        Resolution::Redirect(canonical) => format!("redirect -> {}", canonical.to_url()),
        Resolution::NotFound => "not found".to_string(),
    })
}

#[allow(clippy::print_stdout)]
fn print_output(output: &str) {
    println!("{output}");
}
