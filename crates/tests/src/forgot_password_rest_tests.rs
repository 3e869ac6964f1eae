use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, CustomerRecoverPayload};

use crate::common;

const ENDPOINT: &str = "/api/v1/auth/forgot-password";

#[tokio::test]
async fn forgot_password_success_returns_empty_user_errors() {
    let fake = common::fake_storefront(StatusCode::OK, common::recover_response(&[])).await;
    let app = common::test_app(&fake);

    let body = serde_json::json!({ "email": "  jane@example.com  " });
    let (status, response) = common::post_json(&app, ENDPOINT, &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let payload: CustomerRecoverPayload = serde_json::from_value(response).unwrap();
    assert!(payload.is_success());

    // Surrounding whitespace is trimmed before it reaches the storefront.
    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body["variables"]["email"], "jane@example.com");
}

#[tokio::test]
async fn forgot_password_passes_user_errors_through() {
    let fake = common::fake_storefront(
        StatusCode::OK,
        common::recover_response(&["Could not find customer"]),
    )
    .await;
    let app = common::test_app(&fake);

    let body = serde_json::json!({ "email": "nobody@example.com" });
    let (status, response) = common::post_json(&app, ENDPOINT, &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["customerUserErrors"][0]["message"],
        "Could not find customer"
    );
}

#[tokio::test]
async fn forgot_password_blank_email_is_rejected_before_upstream() {
    let fake = common::fake_storefront(StatusCode::OK, common::recover_response(&[])).await;
    let app = common::test_app(&fake);

    let body = serde_json::json!({ "email": "   " });
    let (status, response) = common::post_json(&app, ENDPOINT, &body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_value(response).unwrap();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors.get("email").unwrap(), "Email is required");
    assert!(fake.requests().is_empty(), "no request should reach the storefront");
}

#[tokio::test]
async fn forgot_password_graphql_error_is_bad_gateway() {
    let fake = common::fake_storefront(
        StatusCode::OK,
        common::graphql_error_response("Customer not found"),
    )
    .await;
    let app = common::test_app(&fake);

    let body = serde_json::json!({ "email": "jane@example.com" });
    let (status, response) = common::post_json(&app, ENDPOINT, &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let err: AppError = serde_json::from_value(response).unwrap();
    assert_eq!(err.message, "Customer not found");
}

#[tokio::test]
async fn forgot_password_throttled_is_too_many_requests() {
    let fake =
        common::fake_storefront(StatusCode::TOO_MANY_REQUESTS, serde_json::json!({})).await;
    let app = common::test_app(&fake);

    let body = serde_json::json!({ "email": "jane@example.com" });
    let (status, _) = common::post_json(&app, ENDPOINT, &body.to_string()).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn forgot_password_without_storefront_is_unavailable() {
    let app = common::test_app_unconfigured();

    let body = serde_json::json!({ "email": "jane@example.com" });
    let (status, response) = common::post_json(&app, ENDPOINT, &body.to_string()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let err: AppError = serde_json::from_value(response).unwrap();
    assert_eq!(err.kind, AppErrorKind::Unavailable);
}

#[tokio::test]
async fn forgot_password_over_http() {
    let fake = common::fake_storefront(StatusCode::OK, common::recover_response(&[])).await;
    let app = common::test_app(&fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let response = reqwest::Client::new()
        .post(format!("http://{addr}{ENDPOINT}"))
        .json(&serde_json::json!({ "email": "jane@example.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let payload: CustomerRecoverPayload = response.json().await.unwrap();
    assert!(payload.is_success());
}
