use dioxus::prelude::*;
use shared_types::CustomerRecoverPayload;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

// ── Password Reset Server Functions ───────────────────

/// Ask the storefront to email a password reset link.
///
/// User errors reported by the storefront (unknown customer, malformed
/// address) come back inside the payload. Transport and GraphQL failures come
/// back as an `AppError` serialized into the `ServerFnError`.
#[cfg_attr(feature = "server", tracing::instrument(skip(email)))]
#[server]
pub async fn forgot_password(email: String) -> Result<CustomerRecoverPayload, ServerFnError> {
    use shared_types::ForgotPasswordRequest;

    let req = ForgotPasswordRequest::from_input(&email);
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let client = crate::state::storefront();
    crate::storefront::send_reset_email(client.as_deref(), &req)
        .await
        .map_err(|e| e.into_server_fn_error())
}
