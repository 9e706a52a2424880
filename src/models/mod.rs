//! Core data models for the calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod fuel;
mod sacrifice;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use fuel::{FuelComparisonInput, FuelComparisonResult, VehicleCost};
pub use sacrifice::{FortnightBalance, SalarySacrificeInput, SalarySacrificeResult};
