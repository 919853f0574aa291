//! End-to-end tests for the receipt endpoints.
//!
//! Each test builds its own router around a fresh store and drives it with
//! `tower::ServiceExt::oneshot`, so no socket is involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tally_api::{build_router, AppState};
use tally_store::ReceiptStore;

fn test_router() -> Router {
    build_router(AppState::new(ReceiptStore::new()))
}

async fn post_json(router: &Router, uri: &str, body: String) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Submits a receipt and returns its assigned id.
async fn submit(router: &Router, receipt: Value) -> String {
    let response = post_json(router, "/receipts/process", receipt.to_string()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"},
            {"shortDescription": "Gatorade", "price": "2.25"}
        ],
        "total": "9.00"
    })
}

#[tokio::test]
async fn process_returns_created_with_id() {
    let router = test_router();

    let response = post_json(&router, "/receipts/process", target_receipt().to_string()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let id = json["id"].as_str().expect("id should be a string");
    assert_eq!(id.len(), 36, "id should be a uuid: {id}");
}

#[tokio::test]
async fn points_for_target_receipt() {
    let router = test_router();
    let id = submit(&router, target_receipt()).await;

    let response = get(&router, &format!("/receipts/{id}/points")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"points": "28"}));
}

#[tokio::test]
async fn points_for_corner_market_receipt() {
    let router = test_router();
    let id = submit(&router, corner_market_receipt()).await;

    let response = get(&router, &format!("/receipts/{id}/points")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"points": "109"}));
}

#[tokio::test]
async fn points_lookup_is_repeatable() {
    let router = test_router();
    let id = submit(&router, target_receipt()).await;

    for _ in 0..2 {
        let response = get(&router, &format!("/receipts/{id}/points")).await;
        assert_eq!(body_json(response).await["points"], "28");
    }
}

#[tokio::test]
async fn list_returns_receipts_in_submission_order() {
    let router = test_router();
    let first = submit(&router, target_receipt()).await;
    let second = submit(&router, corner_market_receipt()).await;

    let response = get(&router, "/receipts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let receipts = json.as_array().expect("response should be an array");
    assert_eq!(receipts.len(), 2);

    assert_eq!(receipts[0]["id"], Value::String(first));
    assert_eq!(receipts[0]["retailer"], "Target");
    assert_eq!(receipts[0]["purchaseDate"], "2022-01-01");
    assert_eq!(receipts[0]["items"][0]["shortDescription"], "Mountain Dew 12PK");

    assert_eq!(receipts[1]["id"], Value::String(second));
    assert_eq!(receipts[1]["retailer"], "M&M Corner Market");
}

#[tokio::test]
async fn list_on_empty_store_is_empty_array() {
    let router = test_router();

    let response = get(&router, "/receipts").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn points_for_unknown_id_is_404_with_exact_body() {
    let router = test_router();
    submit(&router, target_receipt()).await;

    let response = get(&router, "/receipts/no-such-receipt/points").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The body carries exactly one key; clients match on this message.
    assert_eq!(
        body_json(response).await,
        json!({"message": "Receipt not found!"})
    );
}

#[tokio::test]
async fn malformed_json_body_is_rejected() {
    let router = test_router();

    let response = post_json(&router, "/receipts/process", "{not json".to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let message = json["message"].as_str().expect("message should be a string");
    assert!(!message.is_empty());
}

#[tokio::test]
async fn wrong_field_type_is_rejected() {
    let router = test_router();

    let body = json!({"retailer": "Target", "total": 35.35}).to_string();
    let response = post_json(&router, "/receipts/process", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored.
    let response = get(&router, "/receipts").await;
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn missing_fields_are_tolerated_and_score_zero() {
    let router = test_router();
    let id = submit(&router, json!({})).await;

    let response = get(&router, &format!("/receipts/{id}/points")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"points": "0"}));
}

#[tokio::test]
async fn health_reports_receipt_count() {
    let router = test_router();

    let response = get(&router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "ok", "receipts": 0})
    );

    submit(&router, target_receipt()).await;

    let response = get(&router, "/health").await;
    assert_eq!(
        body_json(response).await,
        json!({"status": "ok", "receipts": 1})
    );
}
