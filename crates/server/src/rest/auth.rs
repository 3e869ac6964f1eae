use axum::{extract::State, Json};
use shared_types::{AppError, CustomerRecoverPayload, ForgotPasswordRequest};

use crate::error_convert::ValidateRequest;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/auth/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Storefront accepted the request; user errors, if any, are in the payload", body = CustomerRecoverPayload),
        (status = 422, description = "Email is missing", body = AppError),
        (status = 429, description = "Storefront is throttling requests", body = AppError),
        (status = 502, description = "Storefront reported a GraphQL error", body = AppError),
        (status = 503, description = "Storefront unreachable or not configured", body = AppError)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(state, payload))]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> Result<Json<CustomerRecoverPayload>, AppError> {
    let req = ForgotPasswordRequest::from_input(&payload.email);
    req.validate_request()?;

    let result = crate::storefront::send_reset_email(state.storefront.as_deref(), &req).await?;
    Ok(Json(result))
}
