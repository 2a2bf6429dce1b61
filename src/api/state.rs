//! Application state for the auction fee API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, FeeConfig};

use super::rate_limit::RateLimiter;

/// Shared application state.
///
/// Holds the loaded settings and the admission control state shared by
/// every request.
#[derive(Clone)]
pub struct AppState {
    /// The loaded settings.
    config: Arc<ConfigLoader>,
    /// Per-caller admission control.
    limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let limiter = RateLimiter::new(config.rate_limit());
        Self {
            config: Arc::new(config),
            limiter: Arc::new(limiter),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the fee parameters used by the calculator.
    pub fn fees(&self) -> &FeeConfig {
        self.config.fees()
    }

    /// Returns the shared rate limiter.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}
