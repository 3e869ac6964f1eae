//! Client for the storefront GraphQL API.
//!
//! Only the `customerRecover` mutation is used: it asks the storefront to
//! email the customer a password reset link.

use serde::{Deserialize, Serialize};
use shared_types::{AppError, CustomerRecoverPayload, ForgotPasswordRequest, StorefrontSettings};
use std::time::Duration;

use crate::error_convert::ReqwestErrorExt;

const CUSTOMER_RECOVER_MUTATION: &str = "mutation customerRecover($email: String!) { customerRecover(email: $email) { customerUserErrors { code field message } } }";

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

// --- Environment helpers ---

fn storefront_domain() -> Result<String, String> {
    std::env::var("STOREFRONT_DOMAIN").map_err(|_| "STOREFRONT_DOMAIN is not configured".to_string())
}

fn storefront_access_token() -> Result<String, String> {
    std::env::var("STOREFRONT_ACCESS_TOKEN")
        .map_err(|_| "STOREFRONT_ACCESS_TOKEN is not configured".to_string())
}

/// GraphQL endpoint: `STOREFRONT_API_URL` if set, otherwise built from the
/// shop domain and API version.
fn storefront_endpoint(api_version: &str) -> Result<String, String> {
    match std::env::var("STOREFRONT_API_URL") {
        Ok(url) if !url.is_empty() => Ok(url),
        _ => Ok(format!(
            "https://{}/api/{}/graphql.json",
            storefront_domain()?,
            api_version
        )),
    }
}

// --- Wire types ---

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Serialize)]
struct EmailVariables<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct CustomerRecoverData {
    #[serde(rename = "customerRecover")]
    customer_recover: Option<CustomerRecoverPayload>,
}

// --- Client ---

/// Storefront GraphQL client. Cheap to clone; the underlying connection
/// pool is shared.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl StorefrontClient {
    pub fn new(
        endpoint: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            access_token: access_token.into(),
        })
    }

    /// Build a client from environment variables. Returns an error naming the
    /// missing variable when the storefront is not configured.
    pub fn from_env(settings: &StorefrontSettings) -> Result<Self, String> {
        let endpoint = storefront_endpoint(&settings.api_version)?;
        let token = storefront_access_token()?;
        Self::new(endpoint, token, Duration::from_secs(settings.timeout_secs))
            .map_err(|e| e.message)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run the `customerRecover` mutation for `email`.
    ///
    /// User errors come back inside the payload; transport failures and
    /// GraphQL-level errors come back as `AppError`.
    #[tracing::instrument(skip(self, email), fields(endpoint = %self.endpoint))]
    pub async fn customer_recover(&self, email: &str) -> Result<CustomerRecoverPayload, AppError> {
        let body = GraphQlRequest {
            query: CUSTOMER_RECOVER_MUTATION,
            variables: EmailVariables { email },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| e.into_app_error())?;

        let result = interpret_response(status, &text);
        match &result {
            Ok(payload) => tracing::info!(
                user_errors = payload.customer_user_errors.len(),
                "customerRecover completed"
            ),
            Err(e) => tracing::warn!(status, error = %e, "customerRecover failed"),
        }
        result
    }
}

/// Map a raw storefront HTTP response to the mutation result.
fn interpret_response(status: u16, body: &str) -> Result<CustomerRecoverPayload, AppError> {
    if status == 429 {
        return Err(AppError::rate_limited(
            "Too many reset requests. Please wait a moment and try again.",
        ));
    }
    if !(200..300).contains(&status) {
        return Err(AppError::unavailable(
            "Password reset is not available right now.",
        ));
    }

    let parsed: GraphQlResponse<CustomerRecoverData> = serde_json::from_str(body)
        .map_err(|_| AppError::upstream("The store sent a response we could not read."))?;

    if let Some(first) = parsed.errors.into_iter().next() {
        return Err(AppError::upstream(first.message));
    }

    Ok(parsed
        .data
        .and_then(|d| d.customer_recover)
        .unwrap_or_default())
}

/// Send a reset email through the storefront, or report it unavailable
/// when no client is configured.
pub async fn send_reset_email(
    client: Option<&StorefrontClient>,
    request: &ForgotPasswordRequest,
) -> Result<CustomerRecoverPayload, AppError> {
    match client {
        Some(client) => client.customer_recover(&request.email).await,
        None => Err(AppError::unavailable(
            "Password reset is not available right now.",
        )),
    }
}
