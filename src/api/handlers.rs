//! HTTP request handlers for the auction fee API.
//!
//! This module contains the handler functions for all API endpoints.

use std::any::Any;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_fees;

use super::cors::build_cors_layer;
use super::rate_limit::rate_limit;
use super::request::CalculateRequest;
use super::response::{ApiErrorResponse, HealthResponse};
use super::state::AppState;

/// Path of the fee calculation endpoint.
pub const CALCULATE_PATH: &str = "/api/auction/calculate";

/// Path of the health check endpoint.
pub const HEALTH_PATH: &str = "/api/auction/health";

/// Creates the API router with all endpoints.
///
/// Admission control applies to the calculation endpoint only; the panic,
/// CORS and trace layers wrap every route.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route(CALCULATE_PATH, post(calculate_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .route(HEALTH_PATH, get(health_handler));

    with_layers(routes, state)
}

fn with_layers(routes: Router<AppState>, state: AppState) -> Router {
    let cors = build_cors_layer(state.config().cors());

    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Turns a handler panic into the generic 500 response.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "Request handler panicked");
    ApiErrorResponse::unexpected().into_response()
}

/// Handler for POST /api/auction/calculate.
///
/// Accepts a vehicle price and type and returns the fee breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::JsonDataError(err)) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid calculation request"
            );
            return ApiErrorResponse::bad_request(body_text).into_response();
        }
        Err(rejection) => {
            error!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Unreadable calculation request"
            );
            return ApiErrorResponse::unexpected().into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        vehicle_type = %request.vehicle_type,
        vehicle_price = %request.vehicle_price,
        "Calculating fees"
    );

    let start_time = Instant::now();
    match calculate_fees(request.vehicle_price, request.vehicle_type, state.fees()) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                grand_total = %breakdown.grand_total,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Calculation complete"
            );
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /api/auction/health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
