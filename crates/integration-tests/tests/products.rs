//! End-to-end tests for product listing pages.
//!
//! The storefront runs in-process against a mock catalog; see
//! `shoebox_integration_tests::TestContext`.

#![allow(clippy::unwrap_used)]

use reqwest::{StatusCode, header};
use serde_json::{Value, json};
use shoebox_integration_tests::TestContext;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, ResponseTemplate};

async fn context() -> TestContext {
    let ctx = TestContext::start().await;
    ctx.mount_shoe_catalog().await;
    ctx
}

#[tokio::test]
async fn test_canonical_path_renders_page() {
    let ctx = context().await;

    let resp = ctx
        .client
        .get(ctx.url("/products/shoes/nav123"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("<title>Running Shoes. Shoebox</title>"));
    assert!(html.contains("Pegasus"));
    assert!(html.contains("Vomero"));
    assert!(html.contains("2 Results"));
    assert!(html.contains("Kids"));
    assert!(html.contains("Trail"));
    assert!(html.contains("Red"));
}

#[tokio::test]
async fn test_misspelled_segment_redirects_to_canonical() {
    let ctx = context().await;

    let resp = ctx
        .client
        .get(ctx.url("/products/shoess/nav123"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/products/shoes/nav123"
    );
}

#[tokio::test]
async fn test_redirect_keeps_filter_string() {
    let ctx = context().await;

    let resp = ctx
        .client
        .get(ctx.url("/products/old-name/nav123/red,wide"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/products/shoes/nav123/red,wide"
    );
}

#[tokio::test]
async fn test_unknown_navigation_is_404() {
    let ctx = context().await;

    let resp = ctx
        .client
        .get(ctx.url("/products/shoes/missing"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_products_are_queried_with_layered_filter_ids() {
    let ctx = TestContext::start().await;
    // Mounted first so it wins over the catch-all product mock below
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "ProductList",
            "variables": {
                "_and": [
                    { "filters": { "_regex": "men" } },
                    { "filters": { "_regex": "red" } }
                ],
                "order_by": { "current_price": "asc" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "productList": [shoebox_integration_tests::product("p9", "Filtered Runner")] }
        })))
        .expect(1)
        .mount(&ctx.catalog)
        .await;
    ctx.mount_shoe_catalog().await;

    let resp = ctx
        .client
        .get(ctx.url("/products/shoes/nav123/red?order=price-asc"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Filtered Runner"));
}

#[tokio::test]
async fn test_props_endpoint_returns_navigation_data() {
    let ctx = context().await;

    let resp = ctx
        .client
        .get(ctx.url("/api/products/shoes/nav123/red"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let props: Value = resp.json().await.unwrap();
    assert_eq!(props["navigation"]["uid"], "nav123");
    assert_eq!(props["filterIdList"], json!(["men", "red"]));
    assert_eq!(props["navigationList"].as_array().unwrap().len(), 2);
    assert_eq!(props["categoryList"][0]["title"], "Trail");
    assert_eq!(props["filterOptionList"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_navigation_click_then_page_load() {
    let ctx = context().await;

    // Click: the session takes the clicked ids before the page is resolved
    let resp = ctx
        .client
        .post(ctx.url("/api/filter-state"))
        .form(&[("filter_ids", "kids")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fragment = resp.text().await.unwrap();
    assert!(fragment.contains(r#"data-filter-ids="kids""#));
    assert!(fragment.contains("Pegasus"));

    let state: Value = ctx
        .client
        .get(ctx.url("/api/filter-state"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state["filterIdList"], json!(["kids"]));
    assert_eq!(state["origin"], "navigation");

    // Page load: the resolved effective list replaces the optimistic one
    let resp = ctx
        .client
        .get(ctx.url("/products/shoes/nav123/red"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let state: Value = ctx
        .client
        .get(ctx.url("/api/filter-state"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state["filterIdList"], json!(["men", "red"]));
    assert_eq!(state["origin"], "resolved");
    assert_eq!(state["revision"], 2);
}

#[tokio::test]
async fn test_catalog_outage_is_502() {
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&ctx.catalog)
        .await;

    let resp = ctx
        .client
        .get(ctx.url("/products/shoes/nav123"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(resp.text().await.unwrap(), "External service error");
}

#[tokio::test]
async fn test_graphql_errors_are_502() {
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "field 'navigation' not found" }]
        })))
        .mount(&ctx.catalog)
        .await;

    let resp = ctx
        .client
        .get(ctx.url("/api/products/shoes/nav123"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
