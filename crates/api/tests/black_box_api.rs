use std::sync::Arc;

use catalog_products::Catalog;
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    catalog: Arc<Catalog>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, seed catalog, ephemeral port.
        let catalog = Arc::new(Catalog::seed().expect("seed catalog must load"));
        let app = catalog_api::app::build_app(Arc::clone(&catalog));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, catalog, handle }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(format!("{}{}", self.base_url, path)).await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn root_lists_the_three_endpoint_templates() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body["endpoints"],
        json!({
            "all_products": "/products",
            "product_by_id": "/products/<id>",
            "filter_by_category": "/products?category=<category>"
        })
    );
}

#[tokio::test]
async fn products_without_query_returns_full_catalog_in_order() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/products").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::to_value(srv.catalog.all()).unwrap());
}

#[tokio::test]
async fn category_filter_ignores_case() {
    let srv = TestServer::spawn().await;

    let upper: Value = srv.get("/products?category=Electronics").await.json().await.unwrap();
    let lower: Value = srv.get("/products?category=electronics").await.json().await.unwrap();

    assert_eq!(upper, lower);
    let items = upper.as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items
        .iter()
        .all(|p| p["category"].as_str().unwrap().eq_ignore_ascii_case("electronics")));
    assert_eq!(items.len(), srv.catalog.filter_by_category("Electronics").len());
}

#[tokio::test]
async fn unmatched_category_is_empty_not_an_error() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/products?category=Gardening").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn every_stored_product_round_trips_by_id() {
    let srv = TestServer::spawn().await;

    for product in srv.catalog.all() {
        let id = product.id_typed();
        let res = srv.get(&format!("/products/{id}")).await;
        assert_eq!(res.status(), StatusCode::OK, "product {id}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, serde_json::to_value(product).unwrap(), "product {id}");
    }
}

#[tokio::test]
async fn absent_id_is_404_with_error_body() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/products/9999").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Product not found" }));
}

#[tokio::test]
async fn non_integer_id_is_a_routing_miss() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/products/widget").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn repeated_category_key_still_answers_json_200() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/products?category=Electronics&category=Kitchen").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::to_value(srv.catalog.filter_by_category("Electronics")).unwrap());
}
