//! Vehicle classification.
//!
//! Defines the closed set of vehicle types the fee engine understands and the
//! conversions from raw wire values into it.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents the type of vehicle sold at auction.
///
/// The wire encoding accepts either the variant name (case-insensitive) or
/// its ordinal, so both `"Luxury"` and `1` decode to [`VehicleType::Luxury`].
///
/// # Example
///
/// ```
/// use auction_fees::models::VehicleType;
///
/// let vehicle_type: VehicleType = "luxury".parse().unwrap();
/// assert_eq!(vehicle_type, VehicleType::Luxury);
/// assert!("truck".parse::<VehicleType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VehicleType {
    /// Common/ordinary vehicle.
    Common,
    /// Luxury vehicle.
    Luxury,
}

impl VehicleType {
    /// All vehicle types, in ordinal order.
    pub const ALL: [VehicleType; 2] = [VehicleType::Common, VehicleType::Luxury];

    /// Returns the canonical name of the vehicle type.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Common => "Common",
            VehicleType::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let trimmed = s.trim();
        VehicleType::ALL
            .into_iter()
            .find(|vt| vt.as_str().eq_ignore_ascii_case(trimmed))
            .or_else(|| {
                trimmed
                    .parse::<i64>()
                    .ok()
                    .and_then(|ordinal| VehicleType::try_from(ordinal).ok())
            })
            .ok_or_else(|| EngineError::UnknownVehicleType {
                value: s.to_string(),
            })
    }
}

impl TryFrom<i64> for VehicleType {
    type Error = EngineError;

    fn try_from(ordinal: i64) -> EngineResult<Self> {
        match ordinal {
            0 => Ok(VehicleType::Common),
            1 => Ok(VehicleType::Luxury),
            other => Err(EngineError::UnknownVehicleType {
                value: other.to_string(),
            }),
        }
    }
}

struct VehicleTypeVisitor;

impl Visitor<'_> for VehicleTypeVisitor {
    type Value = VehicleType;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a vehicle type name (\"Common\" or \"Luxury\") or ordinal (0 or 1)")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<VehicleType, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<VehicleType, E> {
        VehicleType::try_from(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<VehicleType, E> {
        i64::try_from(value)
            .map_err(|_| EngineError::UnknownVehicleType {
                value: value.to_string(),
            })
            .and_then(VehicleType::try_from)
            .map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for VehicleType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(VehicleTypeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Common".parse::<VehicleType>().unwrap(), VehicleType::Common);
        assert_eq!("COMMON".parse::<VehicleType>().unwrap(), VehicleType::Common);
        assert_eq!(" luxury ".parse::<VehicleType>().unwrap(), VehicleType::Luxury);
    }

    #[test]
    fn test_parse_accepts_ordinal_strings() {
        assert_eq!("0".parse::<VehicleType>().unwrap(), VehicleType::Common);
        assert_eq!("1".parse::<VehicleType>().unwrap(), VehicleType::Luxury);
    }

    #[test]
    fn test_parse_unknown_value_fails() {
        let err = "Truck".parse::<VehicleType>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownVehicleType { ref value } if value == "Truck"));
        assert_eq!(err.to_string(), "Unknown vehicle type: Truck");
    }

    #[test]
    fn test_try_from_ordinal() {
        assert_eq!(VehicleType::try_from(0).unwrap(), VehicleType::Common);
        assert_eq!(VehicleType::try_from(1).unwrap(), VehicleType::Luxury);
        assert!(VehicleType::try_from(2).is_err());
        assert!(VehicleType::try_from(-1).is_err());
    }

    #[test]
    fn test_deserialize_from_name_and_ordinal() {
        let common: VehicleType = serde_json::from_str("\"Common\"").unwrap();
        let luxury: VehicleType = serde_json::from_str("1").unwrap();
        assert_eq!(common, VehicleType::Common);
        assert_eq!(luxury, VehicleType::Luxury);
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        let err = serde_json::from_str::<VehicleType>("\"Truck\"").unwrap_err();
        assert!(err.to_string().contains("Unknown vehicle type: Truck"));
        assert!(serde_json::from_str::<VehicleType>("5").is_err());
        assert!(serde_json::from_str::<VehicleType>("true").is_err());
    }

    #[test]
    fn test_serialize_uses_variant_name() {
        assert_eq!(
            serde_json::to_string(&VehicleType::Luxury).unwrap(),
            "\"Luxury\""
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(VehicleType::Common.to_string(), "Common");
    }
}
