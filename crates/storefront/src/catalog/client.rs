//! HTTP implementation of the catalog gateway.
//!
//! Uses `graphql_client` request/response envelopes with `reqwest` 0.13 for
//! HTTP. Nothing is cached: every call is a fresh network round-trip, and
//! timeouts are left to the transport defaults.

use std::sync::Arc;

use async_trait::async_trait;
use graphql_client::{GraphQLQuery, Response};
use secrecy::{ExposeSecret, SecretString};
use shoebox_core::{
    Category, FilterOption, Navigation, NavigationUid, Product, ProductAggregate, ProductFilter,
    SortOrder,
};
use tracing::{debug, instrument};

use super::queries::{
    CategoryList, FilterOptionList, NavigationDeep, NavigationListDeep, ProductAggregateQuery,
    ProductList, category_list, filter_option_list, navigation_deep, navigation_list_deep,
    product_aggregate, product_list,
};
use super::{CatalogError, CatalogGateway, GraphQLError, GraphQLErrorLocation};
use crate::config::CatalogConfig;

/// Maximum number of response-body characters copied into logs and errors.
const BODY_EXCERPT_CHARS: usize = 500;

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the catalog GraphQL backend.
///
/// Cheaply cloneable; clones share one connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<SecretString>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint: config.graphql_url.clone(),
                access_token: config.access_token.clone(),
            }),
        }
    }

    /// The GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Execute a GraphQL operation.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, CatalogError> {
        let request_body = Q::build_query(variables);

        let mut request = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("Content-Type", "application/json")
            .json(&request_body);
        if let Some(token) = &self.inner.access_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(CatalogError::RateLimited(retry_after));
        }

        // Body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                operation = request_body.operation_name,
                body = %excerpt(&response_text, BODY_EXCERPT_CHARS),
                "Catalog backend returned non-success status"
            );
            return Err(CatalogError::GraphQL(vec![GraphQLError::message(format!(
                "HTTP {status}: {}",
                excerpt(&response_text, 200)
            ))]));
        }

        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    operation = request_body.operation_name,
                    body = %excerpt(&response_text, BODY_EXCERPT_CHARS),
                    "Failed to parse catalog GraphQL response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            debug!(errors = ?errors, "GraphQL errors in response");
            return Err(CatalogError::GraphQL(
                errors.into_iter().map(convert_graphql_error).collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                operation = request_body.operation_name,
                body = %excerpt(&response_text, BODY_EXCERPT_CHARS),
                "Catalog GraphQL response has no data and no errors"
            );
            CatalogError::GraphQL(vec![GraphQLError::message("No data in response")])
        })
    }
}

#[async_trait]
impl CatalogGateway for CatalogClient {
    #[instrument(skip(self), fields(uid = %uid))]
    async fn navigation(&self, uid: &NavigationUid) -> Result<Option<Navigation>, CatalogError> {
        let variables = navigation_deep::Variables {
            uid: uid.to_string(),
        };
        let data = self.execute::<NavigationDeep>(variables).await?;
        if data.navigation.is_none() {
            debug!("Navigation not found");
        }
        Ok(data.navigation)
    }

    #[instrument(skip(self))]
    async fn navigation_list(&self) -> Result<Vec<Navigation>, CatalogError> {
        let data = self
            .execute::<NavigationListDeep>(navigation_list_deep::Variables::default())
            .await?;
        Ok(data.navigation_list.unwrap_or_default())
    }

    #[instrument(skip(self), fields(navigation_uid = %navigation_uid))]
    async fn category_list(
        &self,
        navigation_uid: &NavigationUid,
    ) -> Result<Vec<Category>, CatalogError> {
        let variables = category_list::Variables {
            navigation_uid: navigation_uid.to_string(),
        };
        let data = self.execute::<CategoryList>(variables).await?;
        Ok(data.category_list.unwrap_or_default())
    }

    #[instrument(skip(self), fields(navigation_uid = %navigation_uid))]
    async fn filter_option_list(
        &self,
        navigation_uid: &NavigationUid,
    ) -> Result<Vec<FilterOption>, CatalogError> {
        let variables = filter_option_list::Variables {
            navigation_uid: navigation_uid.to_string(),
        };
        let data = self.execute::<FilterOptionList>(variables).await?;
        Ok(data.filter_option_list.unwrap_or_default())
    }

    #[instrument(skip(self, filter), fields(clauses = filter.clauses().len(), order = ?order))]
    async fn product_list(
        &self,
        filter: &ProductFilter,
        order: SortOrder,
    ) -> Result<Vec<Product>, CatalogError> {
        let variables = product_list::Variables {
            and: filter.clone(),
            order_by: order.order_by(),
        };
        let data = self.execute::<ProductList>(variables).await?;
        Ok(data.product_list.unwrap_or_default())
    }

    #[instrument(skip(self, filter), fields(clauses = filter.clauses().len()))]
    async fn product_aggregate(
        &self,
        filter: &ProductFilter,
    ) -> Result<ProductAggregate, CatalogError> {
        let variables = product_aggregate::Variables {
            where_and: filter.clone(),
        };
        let data = self.execute::<ProductAggregateQuery>(variables).await?;
        Ok(data
            .products_aggregate
            .and_then(|a| a.aggregate)
            .unwrap_or_default())
    }
}

fn convert_graphql_error(e: graphql_client::Error) -> GraphQLError {
    GraphQLError {
        message: e.message,
        locations: e.locations.map_or_else(Vec::new, |locs| {
            locs.into_iter()
                .map(|l| GraphQLErrorLocation {
                    line: i64::from(l.line),
                    column: i64::from(l.column),
                })
                .collect()
        }),
        path: e.path.map_or_else(Vec::new, |p| {
            p.into_iter()
                .map(|fragment| match fragment {
                    graphql_client::PathFragment::Key(s) => serde_json::Value::String(s),
                    graphql_client::PathFragment::Index(i) => serde_json::Value::Number(i.into()),
                })
                .collect()
        }),
    }
}

fn excerpt(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}
