use std::sync::{Arc, OnceLock};

use crate::storefront::StorefrontClient;

/// Shared application state passed to Axum handlers via `State`.
#[derive(Clone, Default)]
pub struct AppState {
    /// `None` when the storefront feature is off or its secrets are missing.
    pub storefront: Option<Arc<StorefrontClient>>,
}

impl AppState {
    /// Build state from the loaded config and environment.
    pub fn from_env() -> Self {
        Self {
            storefront: storefront(),
        }
    }

    pub fn with_storefront(client: StorefrontClient) -> Self {
        Self {
            storefront: Some(Arc::new(client)),
        }
    }
}

static STOREFRONT: OnceLock<Option<Arc<StorefrontClient>>> = OnceLock::new();

fn init_storefront() -> Option<Arc<StorefrontClient>> {
    if !crate::config::feature_flags().storefront {
        tracing::info!("Storefront feature disabled, password reset requests will be refused");
        return None;
    }

    // Load .env file if present (ignored in production where env vars are set directly).
    let _ = dotenvy::dotenv();

    match StorefrontClient::from_env(&crate::config::storefront_settings()) {
        Ok(client) => {
            tracing::info!(endpoint = client.endpoint(), "Storefront client configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Storefront enabled but not configured");
            None
        }
    }
}

/// Get or initialize the process-wide storefront client.
///
/// Used by Dioxus server functions (`api`), which have no Axum state.
/// REST handlers use `State<AppState>` instead.
pub fn storefront() -> Option<Arc<StorefrontClient>> {
    STOREFRONT.get_or_init(init_storefront).clone()
}
