use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use server::state::AppState;
use server::storefront::StorefrontClient;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Access token the fake storefront expects.
pub const TEST_TOKEN: &str = "test-storefront-token";

/// A request received by the fake storefront.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub access_token: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: Value,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the storefront GraphQL endpoint.
pub struct FakeStorefront {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeStorefront {
    /// Snapshot of every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    /// Client pointed at this fake with a generous timeout.
    pub fn client(&self) -> StorefrontClient {
        self.client_with_timeout(Duration::from_secs(5))
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> StorefrontClient {
        StorefrontClient::new(&self.url, TEST_TOKEN, timeout).expect("Failed to build client")
    }
}

async fn graphql(
    State(fake): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let access_token = headers
        .get("x-shopify-storefront-access-token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    fake.requests
        .lock()
        .expect("requests lock poisoned")
        .push(RecordedRequest { access_token, body });

    if !fake.delay.is_zero() {
        tokio::time::sleep(fake.delay).await;
    }
    (fake.status, Json(fake.body))
}

/// Start a fake storefront that answers every mutation with `status` and `body`.
pub async fn fake_storefront(status: StatusCode, body: Value) -> FakeStorefront {
    fake_storefront_with_delay(status, body, Duration::ZERO).await
}

pub async fn fake_storefront_with_delay(
    status: StatusCode,
    body: Value,
    delay: Duration,
) -> FakeStorefront {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = FakeState {
        status,
        body,
        delay,
        requests: requests.clone(),
    };
    let router = Router::new()
        .route("/graphql", post(graphql))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake storefront");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    FakeStorefront {
        url: format!("http://{addr}/graphql"),
        requests,
    }
}

/// Storefront response with the given user error messages.
pub fn recover_response(user_errors: &[&str]) -> Value {
    let errors: Vec<Value> = user_errors
        .iter()
        .map(|m| serde_json::json!({ "code": "UNIDENTIFIED_CUSTOMER", "field": ["email"], "message": m }))
        .collect();
    serde_json::json!({ "data": { "customerRecover": { "customerUserErrors": errors } } })
}

/// Storefront response carrying top-level GraphQL errors.
pub fn graphql_error_response(message: &str) -> Value {
    serde_json::json!({ "data": null, "errors": [{ "message": message }] })
}

/// Build the REST router backed by the fake storefront.
pub fn test_app(fake: &FakeStorefront) -> Router {
    server::openapi::api_router(AppState::with_storefront(fake.client()))
}

/// Build the REST router with no storefront configured.
pub fn test_app_unconfigured() -> Router {
    server::openapi::api_router(AppState::default())
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}
