//! Salary sacrifice projection models.
//!
//! This module contains the input and result records for the salary
//! sacrifice projector, including the fortnightly cumulative-balance
//! series used for line-chart rendering.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for a salary sacrifice savings projection.
///
/// The flat tax rate is a simplification for illustration; real savings
/// depend on the full marginal tax schedule.
///
/// # Example
///
/// ```
/// use fincalc_engine::models::SalarySacrificeInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = SalarySacrificeInput {
///     after_tax_pay: Decimal::from_str("2000").unwrap(),
///     sacrifice_periods: 6,
///     tax_rate: Decimal::from_str("0.30").unwrap(),
///     product_price: Decimal::from_str("2600").unwrap(),
///     setup_fee: Decimal::from_str("10").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySacrificeInput {
    /// Fortnightly take-home pay after tax.
    pub after_tax_pay: Decimal,
    /// Number of fortnights the sacrifice is spread over (1..=26).
    pub sacrifice_periods: u32,
    /// Flat tax rate in the half-open interval [0, 1).
    pub tax_rate: Decimal,
    /// Product price including GST.
    pub product_price: Decimal,
    /// One-time packaging setup fee.
    pub setup_fee: Decimal,
}

/// Cumulative take-home balances at the end of one fortnight.
///
/// One row per fortnight of the year, ordered by `fortnight` ascending,
/// suitable for direct line-chart rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortnightBalance {
    /// Fortnight index, 1-based.
    pub fortnight: u32,
    /// Cumulative take-home pay with salary sacrifice.
    pub with_sacrifice: Decimal,
    /// Cumulative take-home pay without salary sacrifice.
    pub without_sacrifice: Decimal,
}

/// The result of a salary sacrifice projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySacrificeResult {
    /// Net annual savings (with-sacrifice total minus without-sacrifice total).
    pub savings: Decimal,
    /// Net cost of the product under sacrifice (GST-exclusive price minus
    /// tax saved, plus the setup fee).
    pub net_cost: Decimal,
    /// Tax saved on the pre-tax value of the product.
    pub tax_savings: Decimal,
    /// Product price with GST removed.
    pub gst_exclusive_price: Decimal,
    /// Pre-tax amount sacrificed each pay period.
    pub sacrifice_per_period: Decimal,
    /// Estimated gross fortnightly salary, grossed up from after-tax pay.
    pub gross_salary: Decimal,
    /// After-tax pay during a sacrifice fortnight.
    pub take_home_with_sacrifice: Decimal,
    /// Final with-sacrifice balance after the year-end adjustments.
    pub total_with_sacrifice: Decimal,
    /// Final without-sacrifice balance after the year-end adjustments.
    pub total_without_sacrifice: Decimal,
    /// Cumulative balance per fortnight, one row per fortnight of the year.
    pub balances: Vec<FortnightBalance>,
}
