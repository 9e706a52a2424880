//! Salary sacrifice projection orchestration.
//!
//! Sequences the individual rules (gross-up, GST removal, per-period
//! sacrifice, reduced take-home, cash-flow projection, savings summary)
//! and assembles the final result with a complete audit trail.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::error::CalcResult;
use crate::models::{AuditStep, AuditWarning, SalarySacrificeInput, SalarySacrificeResult};

use super::cash_flow::project_cash_flow;
use super::gross_salary::estimate_gross_salary;
use super::gst::remove_gst;
use super::validation::{require_non_negative, validate_sacrifice_periods};

/// The result of a sacrifice projection, including the audit trail parts.
#[derive(Debug, Clone)]
pub struct SacrificeProjection {
    /// The computed projection.
    pub result: SalarySacrificeResult,
    /// The audit steps recording each rule application, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised during the projection.
    pub warnings: Vec<AuditWarning>,
}

/// Projects the annual savings from salary-sacrificing a product purchase.
///
/// The projection runs these rules in order:
///
/// 1. Gross up after-tax pay: `gross = after_tax / (1 - tax_rate)`.
/// 2. Remove GST from the product price using the policy rate.
/// 3. Spread the GST-exclusive price over the sacrifice periods.
/// 4. Reduce take-home pay: `(gross - sacrifice) * (1 - tax_rate)`.
/// 5. Project cumulative balances over the year's fortnights, with the
///    year-end lump-sum adjustments.
/// 6. Derive the summary: `savings = total_with - total_without`,
///    `tax_savings = gst_exclusive * tax_rate`,
///    `net_cost = gst_exclusive - tax_savings + setup_fee`.
///
/// All inputs are validated before any arithmetic. The computation is a
/// pure function of `input` and `policy`: identical arguments always
/// produce identical results.
///
/// # Examples
///
/// ```
/// use fincalc_engine::calculation::calculate_sacrifice_projection;
/// use fincalc_engine::config::ConfigLoader;
/// use fincalc_engine::models::SalarySacrificeInput;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// # fn main() -> Result<(), fincalc_engine::error::CalcError> {
/// let loader = ConfigLoader::load("./config/policy")?;
/// let input = SalarySacrificeInput {
///     after_tax_pay: Decimal::from_str("2000").unwrap(),
///     sacrifice_periods: 6,
///     tax_rate: Decimal::from_str("0.30").unwrap(),
///     product_price: Decimal::from_str("2600").unwrap(),
///     setup_fee: Decimal::from_str("10").unwrap(),
/// };
///
/// let projection = calculate_sacrifice_projection(&input, loader.config())?;
/// assert_eq!(
///     projection.result.tax_savings.round_dp(2),
///     Decimal::from_str("709.09").unwrap()
/// );
/// # Ok(())
/// # }
/// ```
pub fn calculate_sacrifice_projection(
    input: &SalarySacrificeInput,
    policy: &PolicyConfig,
) -> CalcResult<SacrificeProjection> {
    validate_sacrifice_periods(input.sacrifice_periods, policy)?;
    require_non_negative("setup_fee", input.setup_fee)?;

    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    let gross = estimate_gross_salary(input.after_tax_pay, input.tax_rate, step_number)?;
    audit_steps.push(gross.audit_step);
    step_number += 1;

    let gst = remove_gst(input.product_price, policy, step_number)?;
    audit_steps.push(gst.audit_step);
    step_number += 1;

    // Periods are validated to be at least 1, so the division is safe.
    let sacrifice_per_period = gst.gst_exclusive_price / Decimal::from(input.sacrifice_periods);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "sacrifice_per_period".to_string(),
        rule_name: "Per-Period Sacrifice Amount".to_string(),
        input: serde_json::json!({
            "gst_exclusive_price": gst.gst_exclusive_price.normalize().to_string(),
            "sacrifice_periods": input.sacrifice_periods
        }),
        output: serde_json::json!({
            "sacrifice_per_period": sacrifice_per_period.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} fortnights = ${}",
            gst.gst_exclusive_price.round_dp(2),
            input.sacrifice_periods,
            sacrifice_per_period.round_dp(2)
        ),
    });
    step_number += 1;

    let retained_fraction = Decimal::ONE - input.tax_rate;
    let take_home_with_sacrifice =
        (gross.gross_salary - sacrifice_per_period) * retained_fraction;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "reduced_take_home".to_string(),
        rule_name: "Take-Home Pay During Sacrifice".to_string(),
        input: serde_json::json!({
            "gross_salary": gross.gross_salary.normalize().to_string(),
            "sacrifice_per_period": sacrifice_per_period.normalize().to_string(),
            "tax_rate": input.tax_rate.to_string()
        }),
        output: serde_json::json!({
            "take_home_with_sacrifice": take_home_with_sacrifice.normalize().to_string()
        }),
        reasoning: format!(
            "(${} - ${}) x (1 - {}) = ${}",
            gross.gross_salary.round_dp(2),
            sacrifice_per_period.round_dp(2),
            input.tax_rate.normalize(),
            take_home_with_sacrifice.round_dp(2)
        ),
    });
    step_number += 1;

    let projection = project_cash_flow(
        input.after_tax_pay,
        take_home_with_sacrifice,
        input.sacrifice_periods,
        input.setup_fee,
        input.product_price,
        policy,
        step_number,
    )?;
    audit_steps.push(projection.audit_step.clone());
    step_number += 1;

    let savings = projection.total_with_sacrifice - projection.total_without_sacrifice;
    let tax_savings = gst.gst_exclusive_price * input.tax_rate;
    let net_cost = gst.gst_exclusive_price - tax_savings + input.setup_fee;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "savings_summary".to_string(),
        rule_name: "Savings Summary".to_string(),
        input: serde_json::json!({
            "total_with_sacrifice": projection.total_with_sacrifice.normalize().to_string(),
            "total_without_sacrifice": projection.total_without_sacrifice.normalize().to_string(),
            "gst_exclusive_price": gst.gst_exclusive_price.normalize().to_string(),
            "tax_rate": input.tax_rate.to_string(),
            "setup_fee": input.setup_fee.to_string()
        }),
        output: serde_json::json!({
            "savings": savings.normalize().to_string(),
            "tax_savings": tax_savings.normalize().to_string(),
            "net_cost": net_cost.normalize().to_string()
        }),
        reasoning: format!(
            "Savings ${} = with-sacrifice total minus without; tax saved ${}; \
             net cost of the product ${}",
            savings.round_dp(2),
            tax_savings.round_dp(2),
            net_cost.round_dp(2)
        ),
    });

    Ok(SacrificeProjection {
        result: SalarySacrificeResult {
            savings,
            net_cost,
            tax_savings,
            gst_exclusive_price: gst.gst_exclusive_price,
            sacrifice_per_period,
            gross_salary: gross.gross_salary,
            take_home_with_sacrifice,
            total_with_sacrifice: projection.total_with_sacrifice,
            total_without_sacrifice: projection.total_without_sacrifice,
            balances: projection.balances,
        },
        audit_steps,
        warnings: vec![projection.warning],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PolicyConfig, PolicyFile};
    use crate::error::CalcError;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_policy() -> PolicyConfig {
        PolicyConfig::new(
            PolicyFile {
                gst_rate: dec("0.10"),
                fortnights_per_year: 26,
                min_sacrifice_periods: 1,
            },
            HashMap::new(),
        )
    }

    fn create_test_input() -> SalarySacrificeInput {
        SalarySacrificeInput {
            after_tax_pay: dec("2000"),
            sacrifice_periods: 6,
            tax_rate: dec("0.30"),
            product_price: dec("2600"),
            setup_fee: dec("10"),
        }
    }

    /// SP-001: worked example from the form defaults
    #[test]
    fn test_worked_example() {
        let policy = create_test_policy();
        let projection =
            calculate_sacrifice_projection(&create_test_input(), &policy).unwrap();
        let result = &projection.result;

        assert_eq!(result.gst_exclusive_price.round_dp(2), dec("2363.64"));
        assert_eq!(result.sacrifice_per_period.round_dp(2), dec("393.94"));
        assert_eq!(result.gross_salary.round_dp(2), dec("2857.14"));
        assert_eq!(result.take_home_with_sacrifice.round_dp(2), dec("1724.24"));
        assert_eq!(result.tax_savings.round_dp(2), dec("709.09"));
        assert_eq!(result.net_cost.round_dp(2), dec("1664.55"));
        assert_eq!(result.total_without_sacrifice, dec("49400"));
        assert_eq!(result.savings.round_dp(2), dec("935.45"));
    }

    /// SP-002: savings equals the difference of the final totals
    #[test]
    fn test_savings_is_difference_of_totals() {
        let policy = create_test_policy();
        let projection =
            calculate_sacrifice_projection(&create_test_input(), &policy).unwrap();
        let result = &projection.result;

        assert_eq!(
            result.savings,
            result.total_with_sacrifice - result.total_without_sacrifice
        );
    }

    /// SP-003: savings also equals product price minus net cost
    #[test]
    fn test_savings_identity_with_net_cost() {
        let policy = create_test_policy();
        let input = create_test_input();
        let projection = calculate_sacrifice_projection(&input, &policy).unwrap();
        let result = &projection.result;

        assert_eq!(
            result.savings.round_dp(6),
            (input.product_price - result.net_cost).round_dp(6)
        );
    }

    /// SP-004: closed-form pre-adjustment totals
    #[test]
    fn test_closed_form_totals() {
        let policy = create_test_policy();
        let input = create_test_input();
        let projection = calculate_sacrifice_projection(&input, &policy).unwrap();
        let result = &projection.result;

        let expected_with = Decimal::from(6) * result.take_home_with_sacrifice
            + Decimal::from(20) * input.after_tax_pay
            - input.setup_fee;
        assert_eq!(result.total_with_sacrifice.round_dp(6), expected_with.round_dp(6));

        let expected_without = Decimal::from(26) * input.after_tax_pay - input.product_price;
        assert_eq!(result.total_without_sacrifice, expected_without);
    }

    /// SP-005: full-year sacrifice reduces every fortnight
    #[test]
    fn test_boundary_26_periods() {
        let policy = create_test_policy();
        let mut input = create_test_input();
        input.sacrifice_periods = 26;

        let projection = calculate_sacrifice_projection(&input, &policy).unwrap();
        let result = &projection.result;

        // Every increment on the with-sacrifice side uses the reduced pay.
        assert_eq!(
            result.balances[0].with_sacrifice,
            result.take_home_with_sacrifice
        );
        let expected_with = Decimal::from(26) * result.take_home_with_sacrifice
            - input.setup_fee;
        assert_eq!(result.total_with_sacrifice.round_dp(6), expected_with.round_dp(6));
    }

    /// SP-006: single-period sacrifice reduces only the first fortnight
    #[test]
    fn test_boundary_1_period() {
        let policy = create_test_policy();
        let mut input = create_test_input();
        input.sacrifice_periods = 1;

        let projection = calculate_sacrifice_projection(&input, &policy).unwrap();
        let result = &projection.result;

        assert_eq!(
            result.balances[0].with_sacrifice,
            result.take_home_with_sacrifice
        );
        assert_eq!(
            result.balances[1].with_sacrifice,
            result.take_home_with_sacrifice + input.after_tax_pay
        );
    }

    /// SP-007: tax rate of 1 is rejected before any arithmetic
    #[test]
    fn test_full_taxation_rejected() {
        let policy = create_test_policy();
        let mut input = create_test_input();
        input.tax_rate = Decimal::ONE;

        let result = calculate_sacrifice_projection(&input, &policy);
        assert!(matches!(
            result.unwrap_err(),
            CalcError::TaxRateOutOfRange { .. }
        ));
    }

    /// SP-008: zero and excess periods are rejected
    #[test]
    fn test_period_bounds_rejected() {
        let policy = create_test_policy();

        let mut input = create_test_input();
        input.sacrifice_periods = 0;
        assert!(matches!(
            calculate_sacrifice_projection(&input, &policy).unwrap_err(),
            CalcError::SacrificePeriodsOutOfRange { .. }
        ));

        input.sacrifice_periods = 27;
        assert!(matches!(
            calculate_sacrifice_projection(&input, &policy).unwrap_err(),
            CalcError::SacrificePeriodsOutOfRange { .. }
        ));
    }

    /// SP-009: recomputation is bit-identical
    #[test]
    fn test_idempotent() {
        let policy = create_test_policy();
        let input = create_test_input();

        let first = calculate_sacrifice_projection(&input, &policy).unwrap();
        let second = calculate_sacrifice_projection(&input, &policy).unwrap();
        assert_eq!(first.result, second.result);
    }

    #[test]
    fn test_audit_steps_cover_every_rule_in_order() {
        let policy = create_test_policy();
        let projection =
            calculate_sacrifice_projection(&create_test_input(), &policy).unwrap();

        let rule_ids: Vec<&str> = projection
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "gross_salary",
                "gst_removal",
                "sacrifice_per_period",
                "reduced_take_home",
                "cash_flow_projection",
                "savings_summary"
            ]
        );

        let numbers: Vec<u32> = projection
            .audit_steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_projection_carries_lump_sum_warning() {
        let policy = create_test_policy();
        let projection =
            calculate_sacrifice_projection(&create_test_input(), &policy).unwrap();

        assert_eq!(projection.warnings.len(), 1);
        assert_eq!(projection.warnings[0].code, "LUMP_SUM_AT_YEAR_END");
    }
}
