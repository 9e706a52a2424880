//! GST removal functionality.
//!
//! Salary sacrifice uses the GST-exclusive cost of the product, so the
//! GST component is stripped from the quoted price using the policy rate.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::error::CalcResult;
use crate::models::AuditStep;

use super::validation::require_non_negative;

/// The result of removing GST from a price, including the audit step.
#[derive(Debug, Clone)]
pub struct GstRemovalResult {
    /// The price with GST removed.
    pub gst_exclusive_price: Decimal,
    /// The GST component that was removed.
    pub gst_component: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Removes GST from a GST-inclusive price.
///
/// Computes `exclusive = inclusive / (1 + gst_rate)` with the rate taken
/// from policy configuration, not from user input.
pub fn remove_gst(
    price_inc_gst: Decimal,
    policy: &PolicyConfig,
    step_number: u32,
) -> CalcResult<GstRemovalResult> {
    require_non_negative("product_price", price_inc_gst)?;

    let gst_exclusive_price = price_inc_gst / policy.gst_divisor();
    let gst_component = price_inc_gst - gst_exclusive_price;

    let audit_step = AuditStep {
        step_number,
        rule_id: "gst_removal".to_string(),
        rule_name: "GST Removal".to_string(),
        input: serde_json::json!({
            "price_inc_gst": price_inc_gst.to_string(),
            "gst_rate": policy.gst_rate().to_string()
        }),
        output: serde_json::json!({
            "gst_exclusive_price": gst_exclusive_price.normalize().to_string(),
            "gst_component": gst_component.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} = ${}",
            price_inc_gst.normalize(),
            policy.gst_divisor().normalize(),
            gst_exclusive_price.round_dp(2)
        ),
    };

    Ok(GstRemovalResult {
        gst_exclusive_price,
        gst_component,
        audit_step,
    })
}
