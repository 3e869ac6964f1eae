use serde::{Deserialize, Serialize};

/// A validation failure the storefront reports alongside an otherwise
/// successful `customerRecover` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CustomerUserError {
    /// Storefront error code, e.g. `UNIDENTIFIED_CUSTOMER`.
    #[serde(default)]
    pub code: Option<String>,
    /// Path to the offending input field, e.g. `["email"]`.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

/// Result of the `customerRecover` mutation.
///
/// An empty `customer_user_errors` list means the reset email was sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecoverPayload {
    #[serde(default)]
    pub customer_user_errors: Vec<CustomerUserError>,
}

impl CustomerRecoverPayload {
    /// Message of the first user error, if any.
    pub fn first_error_message(&self) -> Option<&str> {
        self.customer_user_errors.first().map(|e| e.message.as_str())
    }

    pub fn is_success(&self) -> bool {
        self.customer_user_errors.is_empty()
    }
}
