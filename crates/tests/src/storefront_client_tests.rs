use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;
use std::time::Duration;

use crate::common;

#[tokio::test]
async fn customer_recover_sends_mutation_with_token() {
    let fake = common::fake_storefront(StatusCode::OK, common::recover_response(&[])).await;

    let payload = fake.client().customer_recover("jane@example.com").await.unwrap();
    assert!(payload.is_success());

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].access_token.as_deref(), Some(common::TEST_TOKEN));
    assert_eq!(requests[0].body["variables"]["email"], "jane@example.com");
    let query = requests[0].body["query"].as_str().unwrap();
    assert!(query.contains("customerRecover"), "unexpected query: {query}");
}

#[tokio::test]
async fn customer_recover_returns_user_errors_in_payload() {
    let fake = common::fake_storefront(
        StatusCode::OK,
        common::recover_response(&["Could not find customer", "second"]),
    )
    .await;

    let payload = fake.client().customer_recover("nobody@example.com").await.unwrap();
    assert_eq!(payload.customer_user_errors.len(), 2);
    assert_eq!(payload.first_error_message(), Some("Could not find customer"));
}

#[tokio::test]
async fn customer_recover_maps_graphql_errors() {
    let fake = common::fake_storefront(
        StatusCode::OK,
        common::graphql_error_response("Customer not found"),
    )
    .await;

    let err = fake.client().customer_recover("jane@example.com").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::UpstreamError);
    assert_eq!(err.message, "Customer not found");
}

#[tokio::test]
async fn customer_recover_maps_throttling() {
    let fake =
        common::fake_storefront(StatusCode::TOO_MANY_REQUESTS, serde_json::json!({})).await;

    let err = fake.client().customer_recover("jane@example.com").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::RateLimited);
}

#[tokio::test]
async fn customer_recover_maps_server_errors() {
    let fake = common::fake_storefront(
        StatusCode::INTERNAL_SERVER_ERROR,
        serde_json::json!({ "error": "boom" }),
    )
    .await;

    let err = fake.client().customer_recover("jane@example.com").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unavailable);
}

#[tokio::test]
async fn customer_recover_times_out_as_unavailable() {
    let fake = common::fake_storefront_with_delay(
        StatusCode::OK,
        common::recover_response(&[]),
        Duration::from_millis(500),
    )
    .await;

    let err = fake
        .client_with_timeout(Duration::from_millis(50))
        .customer_recover("jane@example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unavailable);
}

#[tokio::test]
async fn customer_recover_unreachable_host_is_unavailable() {
    let client = server::storefront::StorefrontClient::new(
        "http://127.0.0.1:9/graphql",
        common::TEST_TOKEN,
        Duration::from_secs(2),
    )
    .unwrap();

    let err = client.customer_recover("jane@example.com").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unavailable);
}
