//! Integration test harness for the Shoebox storefront.
//!
//! Each [`TestContext`] starts the full storefront application on an
//! ephemeral port, wired to a wiremock server standing in for the catalog
//! GraphQL backend. Requests go over real HTTP with a cookie-keeping client
//! that does not follow redirects, so 308 responses can be asserted.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shoebox-integration-tests
//! ```
//!
//! No external services are needed.

use reqwest::{Client, redirect};
use serde_json::{Value, json};
use shoebox_storefront::config::{CatalogConfig, LogFormat, StorefrontConfig};
use shoebox_storefront::routes;
use shoebox_storefront::state::AppState;
use tokio::net::TcpListener;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A running storefront plus its mock catalog.
pub struct TestContext {
    pub catalog: MockServer,
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Start a mock catalog and a storefront pointed at it.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind or the HTTP client cannot be built.
    pub async fn start() -> Self {
        let catalog = MockServer::start().await;

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let base_url = format!("http://{addr}");

        let config = StorefrontConfig {
            host: addr.ip(),
            port: addr.port(),
            base_url: base_url.clone(),
            site_name: "Shoebox".to_string(),
            image_base_url: None,
            log_format: LogFormat::Text,
            catalog: CatalogConfig {
                graphql_url: format!("{}/graphql", catalog.uri()),
                access_token: None,
            },
            sentry_dsn: None,
            sentry_environment: None,
        };
        let app = routes::app(AppState::new(config));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            catalog,
            client,
            base_url,
        }
    }

    /// Absolute URL for a storefront path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Answer every request for `operation` with `data`.
    pub async fn mount_operation(&self, operation: &str, data: Value) {
        mount(
            &self.catalog,
            json!({ "operationName": operation }),
            ResponseTemplate::new(200).set_body_json(json!({ "data": data })),
        )
        .await;
    }

    /// Answer `NavigationDeep` for one navigation uid.
    pub async fn mount_navigation(&self, uid: &str, navigation: Value) {
        mount(
            &self.catalog,
            json!({ "operationName": "NavigationDeep", "variables": { "uid": uid } }),
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "navigation": navigation } })),
        )
        .await;
    }

    /// A small catalog: the `shoes` navigation (`nav123`, pre-filtered on
    /// `men`), a sibling navigation, sidebar data and two products.
    pub async fn mount_shoe_catalog(&self) {
        let shoes = json!({
            "uid": "nav123",
            "title": "Running Shoes",
            "urlPath": "shoes",
            "filterIdList": ["men"],
            "children": [],
            "layoutCards": []
        });

        self.mount_navigation("nav123", shoes.clone()).await;
        self.mount_navigation("missing", Value::Null).await;
        self.mount_operation(
            "NavigationListDeep",
            json!({ "navigationList": [
                shoes,
                { "uid": "nav456", "title": "Kids", "urlPath": "kids", "filterIdList": ["kids"] }
            ]}),
        )
        .await;
        self.mount_operation(
            "CategoryList",
            json!({ "categoryList": [
                { "uid": "c1", "title": "Trail", "navigationUid": "nav123", "urlPath": "trail" }
            ]}),
        )
        .await;
        self.mount_operation(
            "FilterOptionList",
            json!({ "filterOptionList": [
                { "uid": "colour", "title": "Colour", "level": "filter", "navigationUid": "nav123" },
                { "uid": "red", "title": "Red", "level": "option", "parentUid": "colour", "navigationUid": "nav123" }
            ]}),
        )
        .await;
        self.mount_operation(
            "ProductList",
            json!({ "productList": [
                product("p1", "Pegasus"),
                product("p2", "Vomero")
            ]}),
        )
        .await;
        self.mount_operation(
            "ProductAggregate",
            json!({ "productsAggregate": { "aggregate": { "count": 2 } } }),
        )
        .await;
    }
}

async fn mount(server: &MockServer, body: Value, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(body))
        .respond_with(response)
        .mount(server)
        .await;
}

/// A product record as the catalog returns it.
#[must_use]
pub fn product(uid: &str, title: &str) -> Value {
    json!({
        "uid": uid,
        "title": title,
        "subTitle": "Road Running Shoe",
        "price": { "currentPrice": 120, "fullPrice": 150, "currencyCode": "USD" },
        "images": { "squarishURL": format!("https://img.test/{uid}.jpg") },
        "productAnotherColors": null,
        "label": "IN_STOCK"
    })
}
