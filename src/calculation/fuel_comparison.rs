//! Fuel cost comparison calculation functionality.
//!
//! This module compares the round-trip fuel cost of two vehicles given a
//! one-way distance, a fuel price, and each vehicle's consumption rate.

use rust_decimal::Decimal;

use crate::error::CalcResult;
use crate::models::{AuditStep, FuelComparisonInput, FuelComparisonResult, VehicleCost};

use super::validation::require_non_negative;

/// Returns the distance basis consumption rates are quoted against (100 km).
pub fn consumption_basis_km() -> Decimal {
    Decimal::ONE_HUNDRED
}

/// Returns the number of legs in a round trip.
pub fn round_trip_legs() -> Decimal {
    Decimal::TWO
}

/// The result of a fuel comparison, including the audit steps.
#[derive(Debug, Clone)]
pub struct FuelComparisonCalc {
    /// The computed comparison.
    pub result: FuelComparisonResult,
    /// The audit steps recording this calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Compares the round-trip fuel cost of two vehicles.
///
/// The computation is a pure function of its input:
///
/// - `round_trip = one_way_distance * 2`
/// - `fuel_used[i] = consumption[i] / 100 * round_trip`
/// - `cost[i] = fuel_used[i] * price`
/// - `difference = cost[2] - cost[1]` (signed, positive when vehicle 2
///   costs more)
///
/// # Arguments
///
/// * `input` - The distances, price, and consumption rates to compare
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `FuelComparisonCalc` containing the result and audit steps,
/// or `CalcError::NegativeInput` if any input is negative. No other error
/// condition exists.
///
/// # Examples
///
/// ```
/// use fincalc_engine::calculation::calculate_fuel_comparison;
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
///
/// let calc = calculate_fuel_comparison(&input, 1).unwrap();
/// assert_eq!(calc.result.round_trip_km, Decimal::from_str("1866").unwrap());
/// assert_eq!(
///     calc.result.vehicle_1.fuel_used_litres,
///     Decimal::from_str("102.630").unwrap()
/// );
/// ```
pub fn calculate_fuel_comparison(
    input: &FuelComparisonInput,
    step_number: u32,
) -> CalcResult<FuelComparisonCalc> {
    require_non_negative("one_way_distance_km", input.one_way_distance_km)?;
    require_non_negative("fuel_price_per_litre", input.fuel_price_per_litre)?;
    require_non_negative("vehicle_1_consumption", input.vehicle_1_consumption)?;
    require_non_negative("vehicle_2_consumption", input.vehicle_2_consumption)?;

    let round_trip_km = input.one_way_distance_km * round_trip_legs();

    let vehicle_cost = |consumption: Decimal| -> VehicleCost {
        let fuel_used_litres = consumption / consumption_basis_km() * round_trip_km;
        VehicleCost {
            fuel_used_litres,
            fuel_cost: fuel_used_litres * input.fuel_price_per_litre,
        }
    };

    let vehicle_1 = vehicle_cost(input.vehicle_1_consumption);
    let vehicle_2 = vehicle_cost(input.vehicle_2_consumption);
    let cost_difference = vehicle_2.fuel_cost - vehicle_1.fuel_cost;

    let audit_steps = vec![
        AuditStep {
            step_number,
            rule_id: "fuel_round_trip".to_string(),
            rule_name: "Round Trip Distance".to_string(),
            input: serde_json::json!({
                "one_way_distance_km": input.one_way_distance_km.to_string()
            }),
            output: serde_json::json!({
                "round_trip_km": round_trip_km.normalize().to_string()
            }),
            reasoning: format!(
                "{} km x {} legs = {} km",
                input.one_way_distance_km.normalize(),
                round_trip_legs(),
                round_trip_km.normalize()
            ),
        },
        AuditStep {
            step_number: step_number + 1,
            rule_id: "fuel_vehicle_costs".to_string(),
            rule_name: "Per-Vehicle Fuel Cost".to_string(),
            input: serde_json::json!({
                "round_trip_km": round_trip_km.normalize().to_string(),
                "fuel_price_per_litre": input.fuel_price_per_litre.to_string(),
                "vehicle_1_consumption": input.vehicle_1_consumption.to_string(),
                "vehicle_2_consumption": input.vehicle_2_consumption.to_string()
            }),
            output: serde_json::json!({
                "vehicle_1_litres": vehicle_1.fuel_used_litres.normalize().to_string(),
                "vehicle_1_cost": vehicle_1.fuel_cost.normalize().to_string(),
                "vehicle_2_litres": vehicle_2.fuel_used_litres.normalize().to_string(),
                "vehicle_2_cost": vehicle_2.fuel_cost.normalize().to_string()
            }),
            reasoning: format!(
                "Litres = consumption / {} x round trip; cost = litres x ${}/L",
                consumption_basis_km(),
                input.fuel_price_per_litre.normalize()
            ),
        },
        AuditStep {
            step_number: step_number + 2,
            rule_id: "fuel_cost_difference".to_string(),
            rule_name: "Cost Difference".to_string(),
            input: serde_json::json!({
                "vehicle_1_cost": vehicle_1.fuel_cost.normalize().to_string(),
                "vehicle_2_cost": vehicle_2.fuel_cost.normalize().to_string()
            }),
            output: serde_json::json!({
                "cost_difference": cost_difference.normalize().to_string()
            }),
            reasoning: format!(
                "${} - ${} = ${}",
                vehicle_2.fuel_cost.normalize(),
                vehicle_1.fuel_cost.normalize(),
                cost_difference.normalize()
            ),
        },
    ];

    Ok(FuelComparisonCalc {
        result: FuelComparisonResult {
            round_trip_km,
            vehicle_1,
            vehicle_2,
            cost_difference,
        },
        audit_steps,
    })
}
