//! Association fee lookup.
//!
//! The association fee is a flat amount picked from a price band table. It is
//! the same for every vehicle type.

use rust_decimal::Decimal;

/// Price bands as `(inclusive upper bound, fee)`, in ascending order.
///
/// Prices above the last bound pay [`ASSOCIATION_FEE_TOP_BAND`].
pub const ASSOCIATION_FEE_BANDS: [(u32, u32); 3] = [(500, 5), (1000, 10), (3000, 15)];

/// Fee charged on prices above every band in [`ASSOCIATION_FEE_BANDS`].
pub const ASSOCIATION_FEE_TOP_BAND: u32 = 20;

/// Looks up the association fee for a raw (unrounded) vehicle price.
///
/// Each band includes its upper bound, so exactly 500 pays 5 while 500.01
/// pays 10.
///
/// # Examples
///
/// ```
/// use auction_fees::calculation::calculate_association_fee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(calculate_association_fee(Decimal::from(500)), Decimal::from(5));
/// assert_eq!(calculate_association_fee(Decimal::from_str("500.01").unwrap()), Decimal::from(10));
/// assert_eq!(calculate_association_fee(Decimal::from(3001)), Decimal::from(20));
/// ```
pub fn calculate_association_fee(price: Decimal) -> Decimal {
    let fee = ASSOCIATION_FEE_BANDS
        .iter()
        .find(|(upper, _)| price <= Decimal::from(*upper))
        .map(|(_, fee)| *fee)
        .unwrap_or(ASSOCIATION_FEE_TOP_BAND);
    Decimal::from(fee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fee_for(price: &str) -> Decimal {
        calculate_association_fee(dec(price))
    }

    #[test]
    fn test_lowest_band() {
        assert_eq!(fee_for("0.01"), dec("5"));
        assert_eq!(fee_for("398"), dec("5"));
        assert_eq!(fee_for("500"), dec("5"));
    }

    #[test]
    fn test_second_band() {
        assert_eq!(fee_for("500.01"), dec("10"));
        assert_eq!(fee_for("501"), dec("10"));
        assert_eq!(fee_for("1000"), dec("10"));
    }

    #[test]
    fn test_third_band() {
        assert_eq!(fee_for("1000.01"), dec("15"));
        assert_eq!(fee_for("1001"), dec("15"));
        assert_eq!(fee_for("3000"), dec("15"));
    }

    #[test]
    fn test_top_band() {
        assert_eq!(fee_for("3000.01"), dec("20"));
        assert_eq!(fee_for("3001"), dec("20"));
        assert_eq!(fee_for("1000000"), dec("20"));
    }

    #[test]
    fn test_fee_is_whole_number() {
        for price in ["1", "750", "2999.99", "10000"] {
            let fee = fee_for(price);
            assert_eq!(fee, fee.trunc());
        }
    }
}
