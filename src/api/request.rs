//! Request types for the auction fee API.
//!
//! This module defines the JSON request structure for the
//! `/api/auction/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::VehicleType;

/// Request body for the `/api/auction/calculate` endpoint.
///
/// # Example
///
/// ```
/// use auction_fees::api::CalculateRequest;
/// use auction_fees::models::VehicleType;
///
/// let request: CalculateRequest =
///     serde_json::from_str(r#"{ "vehiclePrice": 398.0, "vehicleType": "Common" }"#).unwrap();
/// assert_eq!(request.vehicle_type, VehicleType::Common);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// The sale price of the vehicle. Must be greater than zero.
    #[serde(with = "crate::models::money")]
    pub vehicle_price: Decimal,
    /// The type of vehicle.
    pub vehicle_type: VehicleType,
}
