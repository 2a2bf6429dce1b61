//! Special seller fee calculation.

use rust_decimal::Decimal;

use crate::config::FeeConfig;
use crate::models::VehicleType;

/// Calculates the unrounded special fee: the vehicle type's percentage of the
/// price, without clamping. Returns `None` if the product overflows.
///
/// # Examples
///
/// ```
/// use auction_fees::calculation::calculate_special_fee;
/// use auction_fees::config::FeeConfig;
/// use auction_fees::models::VehicleType;
/// use rust_decimal::Decimal;
///
/// let fee = calculate_special_fee(Decimal::from(1800), VehicleType::Luxury, &FeeConfig::default());
/// assert_eq!(fee, Some(Decimal::from(72)));
/// ```
pub fn calculate_special_fee(
    price: Decimal,
    vehicle_type: VehicleType,
    config: &FeeConfig,
) -> Option<Decimal> {
    price.checked_mul(config.special_fee_percentage(vehicle_type))
}
