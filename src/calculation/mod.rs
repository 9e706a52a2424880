//! Calculation logic for the engine.
//!
//! This module contains all the calculation rules for the two calculators:
//! input range validation, the fuel cost comparison, the after-tax to gross
//! salary gross-up, GST removal, the fortnightly cash-flow projection, and
//! the salary sacrifice orchestration that ties the projection rules together.

mod cash_flow;
mod fuel_comparison;
mod gross_salary;
mod gst;
mod sacrifice_projection;
mod validation;

pub use cash_flow::{CashFlowProjection, LUMP_SUM_WARNING_CODE, project_cash_flow};
pub use fuel_comparison::{
    FuelComparisonCalc, calculate_fuel_comparison, consumption_basis_km, round_trip_legs,
};
pub use gross_salary::{GrossSalaryResult, estimate_gross_salary};
pub use gst::{GstRemovalResult, remove_gst};
pub use sacrifice_projection::{SacrificeProjection, calculate_sacrifice_projection};
pub use validation::{require_non_negative, validate_sacrifice_periods, validate_tax_rate};
