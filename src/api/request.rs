//! Request types for the calculation engine API.
//!
//! This module defines the JSON request structures for the calculator
//! endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FuelComparisonInput, SalarySacrificeInput};

/// Request body for the `/fuel/compare` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelComparisonRequest {
    /// One-way trip distance in kilometres.
    pub one_way_distance_km: Decimal,
    /// Fuel price per litre.
    pub fuel_price_per_litre: Decimal,
    /// Vehicle 1 fuel consumption in litres per 100 km.
    pub vehicle_1_consumption: Decimal,
    /// Vehicle 2 fuel consumption in litres per 100 km.
    pub vehicle_2_consumption: Decimal,
}

/// Request body for the `/sacrifice/project` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SacrificeProjectionRequest {
    /// Fortnightly take-home pay after tax.
    pub after_tax_pay: Decimal,
    /// Number of fortnights the sacrifice is spread over.
    pub sacrifice_periods: u32,
    /// Flat tax rate in the half-open interval [0, 1).
    pub tax_rate: Decimal,
    /// Product price including GST.
    pub product_price: Decimal,
    /// One-time packaging setup fee.
    pub setup_fee: Decimal,
}

impl From<FuelComparisonRequest> for FuelComparisonInput {
    fn from(req: FuelComparisonRequest) -> Self {
        FuelComparisonInput {
            one_way_distance_km: req.one_way_distance_km,
            fuel_price_per_litre: req.fuel_price_per_litre,
            vehicle_1_consumption: req.vehicle_1_consumption,
            vehicle_2_consumption: req.vehicle_2_consumption,
        }
    }
}

impl From<SacrificeProjectionRequest> for SalarySacrificeInput {
    fn from(req: SacrificeProjectionRequest) -> Self {
        SalarySacrificeInput {
            after_tax_pay: req.after_tax_pay,
            sacrifice_periods: req.sacrifice_periods,
            tax_rate: req.tax_rate,
            product_price: req.product_price,
            setup_fee: req.setup_fee,
        }
    }
}
