//! Print the navigation tree.

use std::fmt::Write;

use shoebox_core::{Navigation, ProductsPath};
use shoebox_storefront::catalog::{CatalogError, CatalogGateway};
use shoebox_storefront::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while listing navigations.
#[derive(Debug, Error)]
pub enum NavigationsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fetch every navigation and print one line per entry.
///
/// # Errors
///
/// Returns `NavigationsError` if configuration is missing or the catalog
/// query fails.
pub async fn run() -> Result<(), NavigationsError> {
    let client = super::catalog_client()?;
    let list = client.navigation_list().await?;
    tracing::info!("Fetched {} top-level navigations", list.len());

    print_output(&render_tree(&list));
    Ok(())
}

/// Indented `title  url  [filter ids]` lines. Entries without a canonical
/// path cannot be linked and are marked instead.
fn render_tree(list: &[Navigation]) -> String {
    let mut out = String::new();
    write_level(&mut out, list, 0);
    out
}

fn write_level(out: &mut String, list: &[Navigation], depth: usize) {
    for navigation in list {
        let url = if navigation.has_canonical_path() {
            ProductsPath::for_navigation(navigation).to_url()
        } else {
            "(no canonical path)".to_string()
        };
        let _ = writeln!(
            out,
            "{:indent$}{}  {}  [{}]",
            "",
            navigation.title,
            url,
            navigation.filter_id_list.join(","),
            indent = depth * 2
        );
        write_level(out, &navigation.children, depth + 1);
    }
}

#[allow(clippy::print_stdout)]
fn print_output(output: &str) {
    print!("{output}");
}
