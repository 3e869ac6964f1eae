use shared_types::{AppConfig, FeatureFlags, StorefrontSettings};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse `config.toml` contents. Unparseable input yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` and store it in the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, every flag is off and storefront
/// settings take their defaults.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            eprintln!("[config] Feature flags: {:?}", config.features);
            config
        }
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}), defaulting all flags off");
            AppConfig::default()
        }
    });
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_config()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags {
        storefront: false,
        telemetry: false,
    };
    CONFIG.get().map(|c| &c.features).unwrap_or(&DEFAULT)
}

/// Storefront client tunables from the loaded config.
pub fn storefront_settings() -> StorefrontSettings {
    CONFIG
        .get()
        .map(|c| c.storefront.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_config_reads_sections() {
        let config = parse_config(
            r#"
            [features]
            storefront = true
            telemetry = false

            [storefront]
            api_version = "2025-01"
            "#,
        );
        assert!(config.features.storefront);
        assert_eq!(config.storefront.api_version, "2025-01");
        assert_eq!(config.storefront.timeout_secs, 10);
    }

    #[test]
    fn parse_config_falls_back_on_garbage() {
        assert_eq!(parse_config("features = ["), AppConfig::default());
    }
}
