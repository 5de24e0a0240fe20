//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness check
//! GET  /static/*                     - Static assets
//!
//! # Products
//! GET  /products/{*path}?order=      - Product listing page (HTML)
//!
//! # API
//! GET  /api/products/{*path}         - Navigation page props (JSON)
//! GET  /api/filter-state             - Session filter selection (JSON)
//! POST /api/filter-state             - Navigation click (product grid fragment)
//! ```
//!
//! `{*path}` is `<segment>/<navigation-id>[/<comma-separated-filter-ids>]`.

pub mod api;
pub mod products;

use std::path::Path;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Directory served under `/static`, relative to the storefront crate.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create the API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products/{*path}", get(api::navigation_props))
        .route(
            "/filter-state",
            get(api::show_filter_state).post(api::update_filter_state),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products/{*path}", get(products::index))
        .nest("/api", api_routes())
}

/// Build the complete application: routes, static files and the middleware
/// stack.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(Path::new(STATIC_DIR)))
        .layer(session_layer)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the catalog backend.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, header},
        response::Response,
    };
    use tower::ServiceExt;

    use crate::catalog::fake::FakeCatalog;
    use crate::config::{CatalogConfig, LogFormat, StorefrontConfig};
    use crate::state::AppState;

    pub fn test_config() -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            site_name: "Shoebox".to_string(),
            image_base_url: None,
            log_format: LogFormat::Text,
            catalog: CatalogConfig {
                graphql_url: "http://catalog.invalid/graphql".to_string(),
                access_token: None,
            },
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    pub fn test_app(catalog: FakeCatalog) -> Router {
        super::app(AppState::with_gateway(test_config(), Arc::new(catalog)))
    }

    pub async fn request(
        app: &Router,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        form: Option<&str>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    pub async fn get(app: &Router, uri: &str) -> Response {
        request(app, "GET", uri, None, None).await
    }

    pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> Response {
        request(app, "GET", uri, Some(cookie), None).await
    }

    pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
        request(app, "POST", uri, None, Some(form)).await
    }

    /// `name=value` of the session cookie set by a response.
    pub fn session_cookie(response: &Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    pub async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
