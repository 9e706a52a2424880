//! Fuel cost comparison models.
//!
//! This module contains the input and result records for the fuel cost
//! comparator. Both are transient value records, recomputed on every
//! invocation and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for a fuel cost comparison between two vehicles.
///
/// All fields are expected to be non-negative; validation happens before
/// any arithmetic is performed.
///
/// # Example
///
/// ```
/// use fincalc_engine::models::FuelComparisonInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = FuelComparisonInput {
///     one_way_distance_km: Decimal::from_str("933").unwrap(),
///     fuel_price_per_litre: Decimal::from_str("1.98").unwrap(),
///     vehicle_1_consumption: Decimal::from_str("5.5").unwrap(),
///     vehicle_2_consumption: Decimal::from_str("8.5").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelComparisonInput {
    /// One-way trip distance in kilometres.
    pub one_way_distance_km: Decimal,
    /// Fuel price per litre.
    pub fuel_price_per_litre: Decimal,
    /// Vehicle 1 fuel consumption in litres per 100 km.
    pub vehicle_1_consumption: Decimal,
    /// Vehicle 2 fuel consumption in litres per 100 km.
    pub vehicle_2_consumption: Decimal,
}

/// Fuel usage and cost for a single vehicle over the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleCost {
    /// Litres of fuel used over the round trip.
    pub fuel_used_litres: Decimal,
    /// Cost of that fuel at the given price per litre.
    pub fuel_cost: Decimal,
}

/// The result of a fuel cost comparison.
///
/// `cost_difference` is signed: positive means vehicle 2 costs more than
/// vehicle 1 for the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelComparisonResult {
    /// Round-trip distance in kilometres (one-way distance doubled).
    pub round_trip_km: Decimal,
    /// Fuel usage and cost for vehicle 1.
    pub vehicle_1: VehicleCost,
    /// Fuel usage and cost for vehicle 2.
    pub vehicle_2: VehicleCost,
    /// Vehicle 2 cost minus vehicle 1 cost.
    pub cost_difference: Decimal,
}
