//! Base buyer fee calculation.
//!
//! The base fee is a percentage of the vehicle price, clamped to bounds that
//! depend on the vehicle type.

use rust_decimal::Decimal;

use crate::config::FeeConfig;
use crate::models::VehicleType;

/// Calculates the unrounded base fee for a vehicle.
///
/// The raw fee is `price * base_fee_percentage`, clamped inclusively to the
/// vehicle type's `[min, max]` bounds. A raw value already inside the bounds
/// passes through unchanged. An inverted `[min, max]` pair yields `max`.
///
/// Returns `None` if the product overflows.
///
/// # Examples
///
/// ```
/// use auction_fees::calculation::calculate_base_fee;
/// use auction_fees::config::FeeConfig;
/// use auction_fees::models::VehicleType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = FeeConfig::default();
/// let fee = calculate_base_fee(Decimal::from(398), VehicleType::Common, &config);
/// assert_eq!(fee, Some(Decimal::from_str("39.8").unwrap()));
///
/// // 10% of 501 is 50.10, above the Common cap of 50
/// let capped = calculate_base_fee(Decimal::from(501), VehicleType::Common, &config);
/// assert_eq!(capped, Some(Decimal::from(50)));
/// ```
pub fn calculate_base_fee(
    price: Decimal,
    vehicle_type: VehicleType,
    config: &FeeConfig,
) -> Option<Decimal> {
    let (min, max) = config.base_fee_bounds(vehicle_type);
    let raw = price.checked_mul(config.base_fee_percentage)?;
    Some(raw.max(min).min(max))
}
