use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and read on the server only.
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Call the storefront `customerRecover` mutation. When off, reset
    /// requests are answered as unavailable.
    #[serde(default)]
    pub storefront: bool,
    #[serde(default)]
    pub telemetry: bool,
}

/// Tunables for the storefront GraphQL client. Secrets (domain, access
/// token) come from the environment, not from this file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontSettings {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_version() -> String {
    "2024-07".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub storefront: StorefrontSettings,
}
