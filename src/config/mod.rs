//! Configuration for carrier services

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Main settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Keep original request/response on successful results
    #[serde(default)]
    pub debug: bool,
    /// Use carrier sandbox endpoints where a carrier has one
    #[serde(default)]
    pub test_mode: bool,
    /// Per-carrier overrides keyed by carrier code
    #[serde(default)]
    pub carriers: HashMap<String, CarrierSettings>,
}

/// Per-carrier configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarrierSettings {
    pub base_url: Option<String>,
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration priority (highest to lowest):
    /// 1. Environment variables (prefixed with CARRIER_BRIDGE_)
    /// 2. config/local.toml (gitignored)
    /// 3. config/default.toml
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        let builder = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // CARRIER_BRIDGE_DEBUG, CARRIER_BRIDGE_CARRIERS__RL__BASE_URL, etc.
            .add_source(
                Environment::with_prefix("CARRIER_BRIDGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Configured base URL override for a carrier
    pub fn base_url_for(&self, code: &str) -> Option<&str> {
        self.carriers.get(code).and_then(|c| c.base_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_override() {
        let mut settings = Settings::default();
        settings.carriers.insert(
            "rl".to_string(),
            CarrierSettings {
                base_url: Some("http://localhost:9000".to_string()),
            },
        );

        assert_eq!(settings.base_url_for("rl"), Some("http://localhost:9000"));
        assert_eq!(settings.base_url_for("ups"), None);
    }

    #[test]
    fn test_deserialize_from_toml_source() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "debug = true\n[carriers.usps]\nbase_url = \"http://usps.test\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(settings.debug);
        assert!(!settings.test_mode);
        assert_eq!(settings.base_url_for("usps"), Some("http://usps.test"));
    }
}
