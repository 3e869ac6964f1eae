use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn health_reports_storefront_configured() {
    let fake = common::fake_storefront(StatusCode::OK, common::recover_response(&[])).await;
    let app = common::test_app(&fake);

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storefront_configured"], true);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_reports_storefront_missing() {
    let app = common::test_app_unconfigured();

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["storefront_configured"], false);
}
