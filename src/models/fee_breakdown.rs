//! Fee breakdown model.
//!
//! This module contains the [`FeeBreakdown`] type returned by the fee
//! calculator and serialised as the body of a successful calculation response.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Serde adapter that moves `Decimal` amounts as JSON numbers.
///
/// Serialisation goes through the decimal's string form so the emitted number
/// is the shortest float that reads back as the same amount. Deserialisation
/// accepts JSON numbers and numeric strings.
pub(crate) mod money {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer, ser};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let number: f64 = value
            .normalize()
            .to_string()
            .parse()
            .map_err(|e| {
                <S::Error as ser::Error>::custom(format!("amount {value} is not a number: {e}"))
            })?;
        serializer.serialize_f64(number)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer)
    }
}

/// The complete set of fees charged on a vehicle sold at auction.
///
/// Monetary fields travel as JSON numbers, with field names in camelCase.
/// `base_fee`, `special_fee`, `total_fees` and `grand_total` carry at most two
/// decimal places; `association_fee` is always a whole amount.
///
/// # Example
///
/// ```
/// use auction_fees::models::FeeBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = FeeBreakdown {
///     base_fee: Decimal::from_str("39.80").unwrap(),
///     special_fee: Decimal::from_str("7.96").unwrap(),
///     association_fee: Decimal::from(5),
///     storage_fee: Decimal::from(100),
///     total_fees: Decimal::from_str("152.76").unwrap(),
///     grand_total: Decimal::from_str("550.76").unwrap(),
/// };
/// let json = serde_json::to_value(&breakdown).unwrap();
/// assert_eq!(json["grandTotal"].as_f64(), Some(550.76));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    /// Base buyer fee, clamped to the vehicle type's bounds.
    #[serde(with = "money")]
    pub base_fee: Decimal,
    /// Special seller fee.
    #[serde(with = "money")]
    pub special_fee: Decimal,
    /// Association fee from the price band table.
    #[serde(with = "money")]
    pub association_fee: Decimal,
    /// Fixed storage fee.
    #[serde(with = "money")]
    pub storage_fee: Decimal,
    /// Sum of all fees.
    #[serde(with = "money")]
    pub total_fees: Decimal,
    /// Vehicle price plus all fees.
    #[serde(with = "money")]
    pub grand_total: Decimal,
}

impl FeeBreakdown {
    /// Returns the sum of the individual fee components.
    ///
    /// Because components are rounded independently this may differ from
    /// `total_fees` by up to a cent.
    pub fn component_sum(&self) -> Decimal {
        self.base_fee + self.special_fee + self.association_fee + self.storage_fee
    }
}
