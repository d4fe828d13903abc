mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{buyer_token, response_json, test_app};

#[tokio::test]
async fn test_product_listing_is_public() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/products?q=bike&page=1&limit=20")
        .body(Body::empty())
        .unwrap();

    // No token required; the anonymous request runs all the way to the
    // unreachable database.
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_product_detail_is_public() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/products/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_product_detail_rejects_malformed_id() {
    let app = test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/products/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_requires_token() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": "Vintage bicycle",
                "price_cents": 12500
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Authentication required");
}

#[tokio::test]
async fn test_create_product_rejects_empty_title() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("authorization", format!("Bearer {}", buyer_token()))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": "",
                "price_cents": 12500
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Title must be between 1 and 200 characters");
}

#[tokio::test]
async fn test_create_product_rejects_non_positive_price() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("authorization", format!("Bearer {}", buyer_token()))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": "Free stuff",
                "price_cents": 0
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Price must be a positive amount of cents");
}

#[tokio::test]
async fn test_create_product_with_valid_body_reaches_database() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("authorization", format!("Bearer {}", buyer_token()))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "title": "Vintage bicycle",
                "description": "Three gears, some rust, lots of character.",
                "price_cents": 12500
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Internal server error");
}
