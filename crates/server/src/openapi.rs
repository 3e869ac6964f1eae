use axum::Router;
use shared_types::{
    AppError, AppErrorKind, CustomerRecoverPayload, CustomerUserError, ForgotPasswordRequest,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health::{self, HealthResponse};
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(rest::forgot_password, health::health_check),
    components(schemas(
        ForgotPasswordRequest,
        CustomerRecoverPayload,
        CustomerUserError,
        AppError,
        AppErrorKind,
        HealthResponse,
    )),
    tags(
        (name = "auth", description = "Password reset endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Storefront Account API",
        description = "Password reset requests relayed to the storefront",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`,
/// the REST API at `/api/v1/*`, and `/health`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::rest_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
