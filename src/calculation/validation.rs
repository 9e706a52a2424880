//! Input range validation shared by both calculators.
//!
//! Every entry point validates before computing, so no out-of-range value
//! can reach a division or accumulate into a result.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::error::{CalcError, CalcResult};

/// Rejects negative monetary and rate inputs.
pub fn require_non_negative(field: &str, value: Decimal) -> CalcResult<()> {
    if value < Decimal::ZERO {
        return Err(CalcError::NegativeInput {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

/// Validates that a flat tax rate lies in the half-open interval [0, 1).
///
/// A rate of exactly 1 is rejected because the gross-up divides by
/// `1 - tax_rate`.
pub fn validate_tax_rate(rate: Decimal) -> CalcResult<()> {
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(CalcError::TaxRateOutOfRange { rate });
    }
    Ok(())
}

/// Validates the sacrifice period count against the policy bounds.
pub fn validate_sacrifice_periods(periods: u32, policy: &PolicyConfig) -> CalcResult<()> {
    let min = policy.min_sacrifice_periods();
    let max = policy.max_sacrifice_periods();
    if periods < min || periods > max {
        return Err(CalcError::SacrificePeriodsOutOfRange { periods, min, max });
    }
    Ok(())
}
