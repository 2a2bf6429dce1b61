//! Domain models for the auction fee engine.
//!
//! This module contains the core data structures used throughout the engine
//! for representing vehicles and the fees charged on them.

mod fee_breakdown;
mod vehicle_type;

pub(crate) use fee_breakdown::money;
pub use fee_breakdown::FeeBreakdown;
pub use vehicle_type::VehicleType;
