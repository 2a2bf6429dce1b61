//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the auction
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CorsConfig, FeeConfig, RateLimitConfig, ServerConfig, Settings};

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENV: &str = "AUCTION_CONFIG";

/// Settings file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./config/auction.yaml";

/// Loads and provides access to the auction settings.
///
/// The settings file has four optional sections:
/// ```text
/// server:      # bind_address
/// fees:        # fee parameters used by the calculator
/// cors:        # allowed_origins
/// rate_limit:  # window_secs, permit_limit, queue_limit
/// ```
///
/// # Example
///
/// ```no_run
/// use auction_fees::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/auction.yaml")?;
/// println!("Storage fee: {}", loader.fees().storage_fee);
/// # Ok::<(), auction_fees::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: Settings,
}

impl ConfigLoader {
    /// Loads settings from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The fee or rate limit parameters fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses settings from an in-memory YAML document.
    ///
    /// An empty document yields the default settings.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// Creates a loader around already-built settings, validating them.
    pub fn from_settings(settings: Settings) -> EngineResult<Self> {
        settings.fees.validate()?;
        settings.rate_limit.validate()?;
        Ok(Self { settings })
    }

    fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        let settings = if content.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str::<Settings>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::from_settings(settings)
    }

    /// Returns the full settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the fee parameters.
    pub fn fees(&self) -> &FeeConfig {
        &self.settings.fees
    }

    /// Returns the listener settings.
    pub fn server(&self) -> &ServerConfig {
        &self.settings.server
    }

    /// Returns the cross-origin policy.
    pub fn cors(&self) -> &CorsConfig {
        &self.settings.cors
    }

    /// Returns the admission control settings.
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.settings.rate_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/auction.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.fees(), &FeeConfig::default());
        assert_eq!(loader.rate_limit(), &RateLimitConfig::default());
        assert_eq!(loader.cors().allowed_origins.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load("/nonexistent/auction.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let loader = ConfigLoader::from_yaml_str("").unwrap();
        assert_eq!(loader.settings(), &Settings::default());
    }

    #[test]
    fn test_overrides_fee_parameters() {
        let yaml = r#"
fees:
  storage_fee: 120
  base_fee_percentage: 0.12
  luxury_base_fee_max: 250
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(loader.fees().storage_fee, dec("120"));
        assert_eq!(loader.fees().base_fee_percentage, dec("0.12"));
        assert_eq!(loader.fees().luxury_base_fee_max, dec("250"));
        assert_eq!(loader.fees().common_base_fee_min, dec("10"));
    }

    #[test]
    fn test_overrides_server_and_rate_limit() {
        let yaml = r#"
server:
  bind_address: "0.0.0.0:8080"
rate_limit:
  window_secs: 1
  permit_limit: 3
  queue_limit: 0
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(loader.server().bind_address.port(), 8080);
        assert_eq!(loader.rate_limit().permit_limit, 3);
        assert_eq!(loader.rate_limit().queue_limit, 0);
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("fees: [not, a, map");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("fees:\n  storage_fee: lots\n");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_inverted_bounds_fail_validation() {
        let yaml = "fees:\n  common_base_fee_min: 60\n";
        let result = ConfigLoader::from_yaml_str(yaml);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
