//! Auction Fee Engine
//!
//! This crate calculates the fees charged on a vehicle sold at auction (base,
//! special, association and storage fees) and serves the calculation over an
//! HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
