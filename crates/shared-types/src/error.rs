use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Fallback shown to the user when an error carries no readable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
    UpstreamError,
    Unavailable,
    RateLimited,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::UpstreamError => write!(f, "UpstreamError"),
            AppErrorKind::Unavailable => write!(f, "Unavailable"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error used across server and client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// The storefront answered, but reported a GraphQL-level error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::UpstreamError, message)
    }

    /// The storefront could not be reached or is not configured.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unavailable, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::RateLimited, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Parse an AppError from a ServerFnError message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"UpstreamError",...} (details: None)`
    /// This method extracts the embedded JSON and parses it.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Extract a user-friendly error message from a `ServerFnError.to_string()`.
    ///
    /// Falls back to [`GENERIC_ERROR_MESSAGE`] if parsing fails or the
    /// embedded message is blank.
    pub fn friendly_message(error_string: &str) -> String {
        Self::from_server_error(error_string)
            .map(|e| e.display_message())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }

    /// The message to put in front of a user. A validation error prefers the
    /// first field error, which is more specific than the summary.
    pub fn display_message(&self) -> String {
        let field = if self.kind == AppErrorKind::ValidationError {
            let mut keys: Vec<&String> = self.field_errors.keys().collect();
            keys.sort();
            keys.first()
                .and_then(|k| self.field_errors.get(*k))
                .filter(|m| !m.trim().is_empty())
                .cloned()
        } else {
            None
        };

        match field {
            Some(message) => message,
            None if self.message.trim().is_empty() => GENERIC_ERROR_MESSAGE.to_string(),
            None => self.message.clone(),
        }
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::RateLimited => 429,
            AppErrorKind::InternalError => 500,
            AppErrorKind::UpstreamError => 502,
            AppErrorKind::Unavailable => 503,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}
