use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert an AppError into a ServerFnError by serializing as JSON.
///
/// The client recovers the structured error with
/// `AppError::from_server_error`.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Convert a reqwest transport failure into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::unavailable("The store took too long to respond. Please try again.")
    } else if err.is_decode() {
        AppError::upstream("The store sent a response we could not read.")
    } else {
        AppError::unavailable("Could not reach the store. Check your connection and try again.")
    }
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        tracing::warn!(error = %self, "Storefront request failed");
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
