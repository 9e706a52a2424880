//! Fortnightly cash-flow projection functionality.
//!
//! This module simulates a full year of fortnights and accumulates two
//! parallel running totals of take-home pay: one with salary sacrifice in
//! effect for the first `sacrifice_periods` fortnights, one without. The
//! loop exists so callers can chart the full trajectory, not just the
//! year-end delta.
//!
//! One-time amounts are deducted from the final fortnight's balance only:
//! the setup fee on the with-sacrifice side, and the full GST-inclusive
//! product price on the without-sacrifice side. The sacrificed amount is
//! already reflected fortnight-by-fortnight in reduced take-home pay,
//! whereas the non-sacrifice path buys the product as a year-end lump sum.
//! This is a deliberate simplification, flagged as an audit warning rather
//! than silently reproduced.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::error::{CalcError, CalcResult};
use crate::models::{AuditStep, AuditWarning, FortnightBalance};

/// The warning code attached to every projection for the year-end lump sum.
pub const LUMP_SUM_WARNING_CODE: &str = "LUMP_SUM_AT_YEAR_END";

/// The result of a cash-flow projection, including the audit step.
#[derive(Debug, Clone)]
pub struct CashFlowProjection {
    /// Cumulative balances, one row per fortnight, ordered ascending.
    pub balances: Vec<FortnightBalance>,
    /// Final with-sacrifice balance after the year-end adjustments.
    pub total_with_sacrifice: Decimal,
    /// Final without-sacrifice balance after the year-end adjustments.
    pub total_without_sacrifice: Decimal,
    /// The audit step recording this projection.
    pub audit_step: AuditStep,
    /// The lump-sum simplification warning.
    pub warning: AuditWarning,
}

/// Projects cumulative take-home balances over a year of fortnights.
///
/// For each fortnight `f` in `1..=fortnights_per_year`:
/// - the with-sacrifice total adds `take_home_with_sacrifice` while
///   `f <= sacrifice_periods`, then the unmodified `after_tax_pay`;
/// - the without-sacrifice total always adds `after_tax_pay`.
///
/// The final row is then adjusted: setup fee off the with-sacrifice
/// balance, full product price off the without-sacrifice balance.
///
/// Callers are expected to have validated the inputs already; this
/// function only guards against an empty projection (a policy with zero
/// fortnights per year).
pub fn project_cash_flow(
    after_tax_pay: Decimal,
    take_home_with_sacrifice: Decimal,
    sacrifice_periods: u32,
    setup_fee: Decimal,
    product_price: Decimal,
    policy: &PolicyConfig,
    step_number: u32,
) -> CalcResult<CashFlowProjection> {
    let fortnights = policy.fortnights_per_year();
    if fortnights == 0 {
        return Err(CalcError::CalculationError {
            message: "policy defines zero fortnights per year".to_string(),
        });
    }

    let mut balances = Vec::with_capacity(fortnights as usize);
    let mut running_with = Decimal::ZERO;
    let mut running_without = Decimal::ZERO;

    for fortnight in 1..=fortnights {
        if fortnight <= sacrifice_periods {
            running_with += take_home_with_sacrifice;
        } else {
            running_with += after_tax_pay;
        }
        running_without += after_tax_pay;

        balances.push(FortnightBalance {
            fortnight,
            with_sacrifice: running_with,
            without_sacrifice: running_without,
        });
    }

    // Year-end adjustments apply to the final row only.
    let last = balances
        .last_mut()
        .ok_or_else(|| CalcError::CalculationError {
            message: "empty balance series".to_string(),
        })?;
    last.with_sacrifice -= setup_fee;
    last.without_sacrifice -= product_price;

    let total_with_sacrifice = last.with_sacrifice;
    let total_without_sacrifice = last.without_sacrifice;

    let audit_step = AuditStep {
        step_number,
        rule_id: "cash_flow_projection".to_string(),
        rule_name: "Fortnightly Cash Flow Projection".to_string(),
        input: serde_json::json!({
            "after_tax_pay": after_tax_pay.to_string(),
            "take_home_with_sacrifice": take_home_with_sacrifice.normalize().to_string(),
            "sacrifice_periods": sacrifice_periods,
            "setup_fee": setup_fee.to_string(),
            "product_price": product_price.to_string(),
            "fortnights_per_year": fortnights
        }),
        output: serde_json::json!({
            "total_with_sacrifice": total_with_sacrifice.normalize().to_string(),
            "total_without_sacrifice": total_without_sacrifice.normalize().to_string()
        }),
        reasoning: format!(
            "{} reduced fortnights then {} at full pay; setup fee and product \
             price deducted from the final fortnight",
            sacrifice_periods,
            fortnights - sacrifice_periods.min(fortnights)
        ),
    };

    let warning = AuditWarning {
        code: LUMP_SUM_WARNING_CODE.to_string(),
        message: "Setup fee and product price are modelled as year-end lump sums \
                  deducted from the final cumulative balance, not as dated cash events"
            .to_string(),
        severity: "low".to_string(),
    };

    Ok(CashFlowProjection {
        balances,
        total_with_sacrifice,
        total_without_sacrifice,
        audit_step,
        warning,
    })
}
