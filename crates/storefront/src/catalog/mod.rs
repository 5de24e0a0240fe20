//! Catalog backend access (the query gateway).
//!
//! # Architecture
//!
//! - Six named, parameterized GraphQL operations, one per [`CatalogGateway`] method
//! - The backend is source of truth - no local sync, no response caching
//! - Handlers and resolvers depend on the trait, never on the HTTP client,
//!   so tests can substitute an in-memory gateway
//!
//! # Operations
//!
//! | Method                 | Operation              |
//! |------------------------|------------------------|
//! | `navigation`           | `NAVIGATION_DEEP`      |
//! | `navigation_list`      | `NAVIGATION_LIST_DEEP` |
//! | `category_list`        | `CATEGORY_LIST`        |
//! | `filter_option_list`   | `FILTER_OPTION_LIST`   |
//! | `product_list`         | `PRODUCT_LIST`         |
//! | `product_aggregate`    | `PRODUCT_AGGREGATE`    |
//!
//! # Example
//!
//! ```rust,ignore
//! use shoebox_storefront::catalog::{CatalogClient, CatalogGateway};
//!
//! let client = CatalogClient::new(&config.catalog);
//! let navigation = client.navigation(&NavigationUid::new("nav123")).await?;
//! ```

mod client;
#[cfg(test)]
pub(crate) mod fake;
pub mod queries;

pub use client::CatalogClient;

use async_trait::async_trait;
use shoebox_core::{
    Category, FilterOption, Navigation, NavigationUid, Product, ProductAggregate, ProductFilter,
    SortOrder,
};
use thiserror::Error;

/// Errors that can occur when talking to the catalog backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// A GraphQL error returned by the catalog backend.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

impl GraphQLError {
    /// An error with only a message, for failures detected client-side.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: vec![],
        }
    }
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.message.is_empty() {
            "(no message)"
        } else {
            &self.message
        })?;
        if !self.path.is_empty() {
            let segments: Vec<String> = self
                .path
                .iter()
                .map(|segment| match segment {
                    serde_json::Value::String(field) => field.clone(),
                    index => index.to_string(),
                })
                .collect();
            write!(f, " at {}", segments.join("."))?;
        }
        if let Some(location) = self.locations.first() {
            write!(f, " (line {}, column {})", location.line, location.column)?;
        }
        Ok(())
    }
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(none reported)".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// The named data-fetch operations a page resolution needs.
///
/// Absent data is normalized before it leaves the gateway: lists come back
/// empty, the aggregate comes back with a zero count. Only `navigation`
/// distinguishes "no record" with `None`.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// `NAVIGATION_DEEP(uid)`: one navigation with its children and layout cards.
    async fn navigation(&self, uid: &NavigationUid) -> Result<Option<Navigation>, CatalogError>;

    /// `NAVIGATION_LIST_DEEP()`: the top-level menu tree.
    async fn navigation_list(&self) -> Result<Vec<Navigation>, CatalogError>;

    /// `CATEGORY_LIST(navigationUid)`.
    async fn category_list(
        &self,
        navigation_uid: &NavigationUid,
    ) -> Result<Vec<Category>, CatalogError>;

    /// `FILTER_OPTION_LIST(navigationUid)`: filters and options, flat.
    async fn filter_option_list(
        &self,
        navigation_uid: &NavigationUid,
    ) -> Result<Vec<FilterOption>, CatalogError>;

    /// `PRODUCT_LIST(filterPredicate, orderBy)`.
    async fn product_list(
        &self,
        filter: &ProductFilter,
        order: SortOrder,
    ) -> Result<Vec<Product>, CatalogError>;

    /// `PRODUCT_AGGREGATE(filterPredicate)`.
    async fn product_aggregate(
        &self,
        filter: &ProductFilter,
    ) -> Result<ProductAggregate, CatalogError>;
}
