//! Error types for the auction fee engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! calculating fees.

use rust_decimal::Decimal;
use thiserror::Error;

/// Message returned when a vehicle price is zero or negative.
pub const INVALID_PRICE_MESSAGE: &str = "Vehicle price must be greater than zero";

/// The main error type for the auction fee engine.
///
/// # Example
///
/// ```
/// use auction_fees::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/auction.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/auction.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the calculator cannot use.
    #[error("Invalid fee configuration '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// The vehicle price was zero or negative.
    #[error("Vehicle price must be greater than zero")]
    InvalidPrice {
        /// The rejected price.
        price: Decimal,
    },

    /// The fees for a price overflowed the decimal range.
    #[error("Vehicle price is too large to calculate fees")]
    AmountOverflow {
        /// The price whose fees could not be represented.
        price: Decimal,
    },

    /// A raw value could not be mapped onto a known vehicle type.
    #[error("Unknown vehicle type: {value}")]
    UnknownVehicleType {
        /// The unrecognized value.
        value: String,
    },
}

impl EngineError {
    /// Returns true if the error was caused by caller-supplied input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidPrice { .. }
                | EngineError::AmountOverflow { .. }
                | EngineError::UnknownVehicleType { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
