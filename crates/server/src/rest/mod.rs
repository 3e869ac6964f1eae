pub mod auth;

use axum::{routing::post, Router};

use crate::state::AppState;

// Re-export handlers so openapi.rs can reference them at rest::*
pub use auth::*;

/// All v1 API routes, relative to the `/api/v1` nest.
fn api_v1_routes() -> Router<AppState> {
    Router::new().route("/auth/forgot-password", post(forgot_password))
}

/// Build the REST API router.
pub fn rest_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}
