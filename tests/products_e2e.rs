use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_servers::api::product_router;
use mock_servers::models::product::Product;
use mock_servers::AppState;
use std::sync::Arc;
use tower::ServiceExt;

fn build_test_app() -> Router {
    product_router(Arc::new(AppState::load().unwrap()))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn fetch_products(uri: &str) -> Vec<Product> {
    let response = build_test_app().oneshot(get_request(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn e2e_products_returns_fixed_records() {
    let products = fetch_products("/products").await;

    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["B08J5F3G18", "B08H95Y452"]);
    assert_eq!(products[1].title, "Wireless Gaming Mouse");
    assert_eq!(
        products[1].image,
        "https://cdns3.thecosmicbyte.com/wp-content/uploads/0-6532980b2eec0.jpg"
    );
}

#[tokio::test]
async fn e2e_root_ignores_product_query() {
    let all = fetch_products("/products").await;

    assert_eq!(fetch_products("/").await, all);
    assert_eq!(fetch_products("/?product=B08J5F3G18").await, all);
    assert_eq!(fetch_products("/?product=unknown").await, all);
}

#[tokio::test]
async fn e2e_unmatched_path_serves_catalog() {
    let all = fetch_products("/products").await;

    assert_eq!(fetch_products("/anything/else").await, all);
}

#[tokio::test]
async fn e2e_unparseable_query_still_serves_catalog() {
    let all = fetch_products("/products").await;

    assert_eq!(fetch_products("/?product=a&product=b").await, all);
    assert_eq!(fetch_products("/?product=%ZZ").await, all);
}
