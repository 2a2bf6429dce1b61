//! Full fee breakdown calculation.
//!
//! Combines the base, special, association and storage fees for a vehicle into
//! a [`FeeBreakdown`]. The calculation is pure: it reads only its arguments
//! and performs no I/O, so it can be called concurrently without coordination.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::FeeConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{FeeBreakdown, VehicleType};

use super::association_fee::calculate_association_fee;
use super::base_fee::calculate_base_fee;
use super::rounding::round_currency;
use super::special_fee::calculate_special_fee;

/// Calculates the complete fee breakdown for a vehicle sold at auction.
///
/// All intermediate arithmetic is exact. `base_fee`, `special_fee`,
/// `total_fees` and `grand_total` are rounded to cents only when the breakdown
/// is built, and the totals are summed from the unrounded fees.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPrice`] if `price` is zero or negative, and
/// [`EngineError::AmountOverflow`] if a fee or total exceeds the decimal range.
/// No partial breakdown is produced.
///
/// # Examples
///
/// ```
/// use auction_fees::calculation::calculate_fees;
/// use auction_fees::config::FeeConfig;
/// use auction_fees::models::VehicleType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = calculate_fees(
///     Decimal::from_str("398.00").unwrap(),
///     VehicleType::Common,
///     &FeeConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(breakdown.base_fee, Decimal::from_str("39.80").unwrap());
/// assert_eq!(breakdown.special_fee, Decimal::from_str("7.96").unwrap());
/// assert_eq!(breakdown.association_fee, Decimal::from(5));
/// assert_eq!(breakdown.grand_total, Decimal::from_str("550.76").unwrap());
/// ```
pub fn calculate_fees(
    price: Decimal,
    vehicle_type: VehicleType,
    config: &FeeConfig,
) -> EngineResult<FeeBreakdown> {
    if price <= Decimal::ZERO {
        return Err(EngineError::InvalidPrice { price });
    }

    let overflow = || EngineError::AmountOverflow { price };

    let base_fee = calculate_base_fee(price, vehicle_type, config).ok_or_else(overflow)?;
    let special_fee = calculate_special_fee(price, vehicle_type, config).ok_or_else(overflow)?;
    let association_fee = calculate_association_fee(price);
    let storage_fee = config.storage_fee;

    let total_fees = base_fee
        .checked_add(special_fee)
        .and_then(|sum| sum.checked_add(association_fee))
        .and_then(|sum| sum.checked_add(storage_fee))
        .ok_or_else(overflow)?;
    let grand_total = price.checked_add(total_fees).ok_or_else(overflow)?;

    debug!(
        %vehicle_type,
        %price,
        %base_fee,
        %special_fee,
        %association_fee,
        %storage_fee,
        %total_fees,
        "Fees calculated"
    );

    Ok(FeeBreakdown {
        base_fee: round_currency(base_fee),
        special_fee: round_currency(special_fee),
        association_fee,
        storage_fee,
        total_fees: round_currency(total_fees),
        grand_total: round_currency(grand_total),
    })
}
