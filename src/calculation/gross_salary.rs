//! Gross salary estimation functionality.
//!
//! This module grosses up an after-tax fortnightly pay to an estimated
//! gross figure using a flat tax rate. It is an approximation: actual
//! gross pay depends on the full marginal tax schedule.

use rust_decimal::Decimal;

use crate::error::CalcResult;
use crate::models::AuditStep;

use super::validation::{require_non_negative, validate_tax_rate};

/// The result of a gross salary estimate, including the audit step.
#[derive(Debug, Clone)]
pub struct GrossSalaryResult {
    /// The estimated gross fortnightly salary.
    pub gross_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Estimates gross fortnightly salary from after-tax pay and a flat tax rate.
///
/// Computes `gross = after_tax / (1 - tax_rate)`. The tax rate is validated
/// against the half-open interval [0, 1) before the division, so full
/// taxation (`tax_rate = 1`) is a domain error rather than a division by
/// zero.
///
/// # Arguments
///
/// * `after_tax_pay` - Fortnightly take-home pay, must be non-negative
/// * `tax_rate` - Flat tax rate in [0, 1)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use fincalc_engine::calculation::estimate_gross_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = estimate_gross_salary(
///     Decimal::from_str("2000").unwrap(),
///     Decimal::from_str("0.30").unwrap(),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.gross_salary.round_dp(2), Decimal::from_str("2857.14").unwrap());
/// ```
pub fn estimate_gross_salary(
    after_tax_pay: Decimal,
    tax_rate: Decimal,
    step_number: u32,
) -> CalcResult<GrossSalaryResult> {
    require_non_negative("after_tax_pay", after_tax_pay)?;
    validate_tax_rate(tax_rate)?;

    let retained_fraction = Decimal::ONE - tax_rate;
    let gross_salary = after_tax_pay / retained_fraction;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Salary Estimate".to_string(),
        input: serde_json::json!({
            "after_tax_pay": after_tax_pay.to_string(),
            "tax_rate": tax_rate.to_string()
        }),
        output: serde_json::json!({
            "gross_salary": gross_salary.normalize().to_string()
        }),
        reasoning: format!(
            "${} / (1 - {}) = ${}",
            after_tax_pay.normalize(),
            tax_rate.normalize(),
            gross_salary.round_dp(2)
        ),
    };

    Ok(GrossSalaryResult {
        gross_salary,
        audit_step,
    })
}
