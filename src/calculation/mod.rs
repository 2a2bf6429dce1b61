//! Calculation logic for the auction fee engine.
//!
//! This module contains the fee calculator and the individual steps it is
//! built from: the clamped base fee, the special fee, the banded association
//! fee lookup and currency rounding.

mod association_fee;
mod base_fee;
mod fee_calculator;
mod rounding;
mod special_fee;

pub use association_fee::{
    ASSOCIATION_FEE_BANDS, ASSOCIATION_FEE_TOP_BAND, calculate_association_fee,
};
pub use base_fee::calculate_base_fee;
pub use fee_calculator::calculate_fees;
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use special_fee::calculate_special_fee;
