//! HTTP API module for the auction fee engine.
//!
//! This module provides the REST endpoints for calculating auction fees,
//! along with the CORS policy and per-caller admission control wrapped
//! around them.

mod cors;
mod handlers;
mod rate_limit;
mod request;
mod response;
mod state;

pub use cors::build_cors_layer;
pub use handlers::{CALCULATE_PATH, HEALTH_PATH, create_router};
pub use rate_limit::{Admission, RateLimiter};
pub use request::CalculateRequest;
pub use response::{
    ApiError, ApiErrorResponse, HealthResponse, TOO_MANY_REQUESTS_MESSAGE,
    UNEXPECTED_ERROR_MESSAGE,
};
pub use state::AppState;
