use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for triggering a password reset email.
///
/// Only presence is checked here; the storefront validates the format.
/// Build it with [`ForgotPasswordRequest::from_input`] so a blank email
/// fails the length check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ForgotPasswordRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Email is required"))
    )]
    pub email: String,
}

impl ForgotPasswordRequest {
    /// Build a request from raw form input, trimming surrounding whitespace.
    pub fn from_input(email: &str) -> Self {
        Self {
            email: email.trim().to_string(),
        }
    }
}
