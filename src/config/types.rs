//! Configuration types for the auction fee engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML settings file. Every field carries a
//! default, so a partial (or empty) file yields a usable configuration.

use std::net::SocketAddr;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::VehicleType;

/// Fee parameters consumed by the calculator.
///
/// Percentages are fractions of the vehicle price (0.10 is ten percent).
///
/// # Example
///
/// ```
/// use auction_fees::config::FeeConfig;
/// use rust_decimal::Decimal;
///
/// let config = FeeConfig::default();
/// assert_eq!(config.storage_fee, Decimal::from(100));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeeConfig {
    /// Flat storage fee charged on every vehicle.
    pub storage_fee: Decimal,
    /// Fraction of the price charged as base fee before clamping.
    pub base_fee_percentage: Decimal,
    /// Lower clamp bound for the Common base fee.
    pub common_base_fee_min: Decimal,
    /// Upper clamp bound for the Common base fee.
    pub common_base_fee_max: Decimal,
    /// Lower clamp bound for the Luxury base fee.
    pub luxury_base_fee_min: Decimal,
    /// Upper clamp bound for the Luxury base fee.
    pub luxury_base_fee_max: Decimal,
    /// Fraction of the price charged as special fee on Common vehicles.
    pub common_special_fee_percentage: Decimal,
    /// Fraction of the price charged as special fee on Luxury vehicles.
    pub luxury_special_fee_percentage: Decimal,
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            storage_fee: Decimal::from(100),
            base_fee_percentage: Decimal::new(10, 2),
            common_base_fee_min: Decimal::from(10),
            common_base_fee_max: Decimal::from(50),
            luxury_base_fee_min: Decimal::from(25),
            luxury_base_fee_max: Decimal::from(200),
            common_special_fee_percentage: Decimal::new(2, 2),
            luxury_special_fee_percentage: Decimal::new(4, 2),
        }
    }
}

impl FeeConfig {
    /// Returns the inclusive `(min, max)` base fee bounds for a vehicle type.
    pub fn base_fee_bounds(&self, vehicle_type: VehicleType) -> (Decimal, Decimal) {
        match vehicle_type {
            VehicleType::Common => (self.common_base_fee_min, self.common_base_fee_max),
            VehicleType::Luxury => (self.luxury_base_fee_min, self.luxury_base_fee_max),
        }
    }

    /// Returns the special fee percentage for a vehicle type.
    pub fn special_fee_percentage(&self, vehicle_type: VehicleType) -> Decimal {
        match vehicle_type {
            VehicleType::Common => self.common_special_fee_percentage,
            VehicleType::Luxury => self.luxury_special_fee_percentage,
        }
    }

    /// Checks that the parameters describe a usable fee schedule.
    ///
    /// Clamp bounds must be ordered and no fee or percentage may be negative.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative = [
            ("storage_fee", self.storage_fee),
            ("base_fee_percentage", self.base_fee_percentage),
            ("common_base_fee_min", self.common_base_fee_min),
            ("luxury_base_fee_min", self.luxury_base_fee_min),
            (
                "common_special_fee_percentage",
                self.common_special_fee_percentage,
            ),
            (
                "luxury_special_fee_percentage",
                self.luxury_special_fee_percentage,
            ),
        ];
        if let Some((field, value)) = non_negative.iter().find(|(_, v)| v.is_sign_negative()) {
            return Err(EngineError::InvalidConfig {
                field: field.to_string(),
                message: format!("must not be negative (got {})", value),
            });
        }

        for (min_field, min, max_field, max) in [
            (
                "common_base_fee_min",
                self.common_base_fee_min,
                "common_base_fee_max",
                self.common_base_fee_max,
            ),
            (
                "luxury_base_fee_min",
                self.luxury_base_fee_min,
                "luxury_base_fee_max",
                self.luxury_base_fee_max,
            ),
        ] {
            if min > max {
                return Err(EngineError::InvalidConfig {
                    field: min_field.to_string(),
                    message: format!("{} exceeds {} ({})", min, max_field, max),
                });
            }
        }

        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the API listens on.
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

/// Cross-origin policy for browser callers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API. `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:5174".to_string(),
                "http://localhost:5175".to_string(),
            ],
        }
    }
}

impl CorsConfig {
    /// Returns true if any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Per-caller admission control settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Length of a rate limit window in seconds.
    pub window_secs: u64,
    /// Requests accepted per caller in each window.
    pub permit_limit: u32,
    /// Excess requests held per caller until a later window opens.
    pub queue_limit: u32,
}

/// Longest accepted rate limit window: one day.
pub const MAX_WINDOW_SECS: u64 = 86_400;

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 10,
            permit_limit: 10,
            queue_limit: 2,
        }
    }
}

impl RateLimitConfig {
    /// Returns the window length as a [`Duration`].
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    /// Checks the limiter can admit at least one request per window and that
    /// the window is at most [`MAX_WINDOW_SECS`] long.
    pub fn validate(&self) -> EngineResult<()> {
        if self.window_secs == 0 {
            return Err(EngineError::InvalidConfig {
                field: "window_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.window_secs > MAX_WINDOW_SECS {
            return Err(EngineError::InvalidConfig {
                field: "window_secs".to_string(),
                message: format!("must not exceed {MAX_WINDOW_SECS}"),
            });
        }
        if self.permit_limit == 0 {
            return Err(EngineError::InvalidConfig {
                field: "permit_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// The complete settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Fee parameters.
    pub fees: FeeConfig,
    /// Cross-origin policy.
    pub cors: CorsConfig,
    /// Admission control settings.
    pub rate_limit: RateLimitConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fee_defaults() {
        let config = FeeConfig::default();
        assert_eq!(config.storage_fee, dec("100"));
        assert_eq!(config.base_fee_percentage, dec("0.10"));
        assert_eq!(config.base_fee_bounds(VehicleType::Common), (dec("10"), dec("50")));
        assert_eq!(config.base_fee_bounds(VehicleType::Luxury), (dec("25"), dec("200")));
        assert_eq!(config.special_fee_percentage(VehicleType::Common), dec("0.02"));
        assert_eq!(config.special_fee_percentage(VehicleType::Luxury), dec("0.04"));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = FeeConfig {
            luxury_base_fee_min: dec("300"),
            ..FeeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidConfig { ref field, .. } if field == "luxury_base_fee_min")
        );
    }

    #[test]
    fn test_validate_rejects_negative_percentage() {
        let config = FeeConfig {
            common_special_fee_percentage: dec("-0.02"),
            ..FeeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_equal_bounds() {
        let config = FeeConfig {
            common_base_fee_min: dec("50"),
            ..FeeConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cors_wildcard() {
        let config = CorsConfig {
            allowed_origins: vec!["*".to_string()],
        };
        assert!(config.allows_any_origin());
        assert!(!CorsConfig::default().allows_any_origin());
    }

    #[test]
    fn test_rate_limit_validation() {
        assert!(RateLimitConfig::default().validate().is_ok());
        let zero_permits = RateLimitConfig {
            permit_limit: 0,
            ..RateLimitConfig::default()
        };
        assert!(zero_permits.validate().is_err());
        let zero_window = RateLimitConfig {
            window_secs: 0,
            ..RateLimitConfig::default()
        };
        assert!(zero_window.validate().is_err());
    }

    #[test]
    fn test_rate_limit_window_upper_bound() {
        let one_day = RateLimitConfig {
            window_secs: MAX_WINDOW_SECS,
            ..RateLimitConfig::default()
        };
        assert!(one_day.validate().is_ok());

        let huge_window = RateLimitConfig {
            window_secs: u64::MAX,
            ..RateLimitConfig::default()
        };
        let err = huge_window.validate().unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidConfig { ref field, .. } if field == "window_secs")
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings: Settings = serde_yaml::from_str("fees:\n  storage_fee: 150\n").unwrap();
        assert_eq!(settings.fees.storage_fee, dec("150"));
        assert_eq!(settings.fees.common_base_fee_max, dec("50"));
        assert_eq!(settings.rate_limit, RateLimitConfig::default());
    }
}
