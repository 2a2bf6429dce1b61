//! HTTP client for the fee calculation endpoint.
//!
//! Posts a [`CalculateRequest`] to a running API and parses the returned
//! [`FeeBreakdown`].

use std::env;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::api::{CALCULATE_PATH, CalculateRequest};
use crate::models::FeeBreakdown;

/// Environment variable holding the API base URL.
pub const API_BASE_URL_ENV: &str = "AUCTION_API_BASE_URL";

/// Errors returned by [`FeeApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// No base URL was configured.
    #[error("AUCTION_API_BASE_URL is not defined in your environment")]
    MissingBaseUrl,

    /// The API answered with a non-success status.
    #[error("Failed to calculate fees (status {status})")]
    Status {
        /// The HTTP status returned.
        status: StatusCode,
    },

    /// The request could not be sent or the response could not be decoded.
    #[error("Failed to reach the fee API: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the auction fee API.
///
/// # Example
///
/// ```no_run
/// use auction_fees::api::CalculateRequest;
/// use auction_fees::client::FeeApiClient;
/// use auction_fees::models::VehicleType;
/// use rust_decimal::Decimal;
///
/// # async fn run() -> Result<(), auction_fees::client::ClientError> {
/// let client = FeeApiClient::new("http://localhost:5000/");
/// let breakdown = client
///     .calculate_fees(&CalculateRequest {
///         vehicle_price: Decimal::from(1800),
///         vehicle_type: VehicleType::Luxury,
///     })
///     .await?;
/// println!("Grand total: {}", breakdown.grand_total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FeeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl FeeApiClient {
    /// Creates a client for the API at `base_url`. Trailing slashes are trimmed.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client from the [`API_BASE_URL_ENV`] environment variable.
    pub fn from_env() -> Result<Self, ClientError> {
        match env::var(API_BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url.trim())),
            _ => Err(ClientError::MissingBaseUrl),
        }
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Calculates the fees for a vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] if the API answers with a non-2xx
    /// status, or [`ClientError::Transport`] if the call fails.
    pub async fn calculate_fees(
        &self,
        request: &CalculateRequest,
    ) -> Result<FeeBreakdown, ClientError> {
        let url = format!("{}{}", self.base_url, CALCULATE_PATH);
        debug!(url = %url, "Posting fee calculation request");

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status });
        }

        Ok(response.json::<FeeBreakdown>().await?)
    }
}
