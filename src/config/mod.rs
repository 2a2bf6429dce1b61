//! Configuration loading and management for the auction fee engine.
//!
//! This module provides functionality to load the fee schedule and the HTTP
//! boundary settings (listener, CORS, rate limiting) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use auction_fees::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/auction.yaml").unwrap();
//! println!("Storage fee: {}", config.fees().storage_fee);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{CorsConfig, FeeConfig, MAX_WINDOW_SECS, RateLimitConfig, ServerConfig, Settings};
