//! Property-based tests for the calculation rules.
//!
//! Inputs are generated as cent-scaled decimals so every case is exact in
//! decimal arithmetic, matching what the API would actually receive.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

use fincalc_engine::calculation::{
    calculate_fuel_comparison, calculate_sacrifice_projection, consumption_basis_km,
    round_trip_legs,
};
use fincalc_engine::config::{PolicyConfig, PolicyFile};
use fincalc_engine::models::{FuelComparisonInput, SalarySacrificeInput};

fn create_policy() -> PolicyConfig {
    PolicyConfig::new(
        PolicyFile {
            gst_rate: Decimal::new(10, 2),
            fortnights_per_year: 26,
            min_sacrifice_periods: 1,
        },
        HashMap::new(),
    )
}

/// A non-negative decimal with two fractional places, up to 100,000.00.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// A tax rate in [0, 0.99] with two fractional places.
fn tax_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=99).prop_map(|pct| Decimal::new(pct, 2))
}

proptest! {
    #[test]
    fn fuel_algebra_holds_exactly(
        distance in money(),
        price in money(),
        consumption_1 in money(),
        consumption_2 in money(),
    ) {
        let input = FuelComparisonInput {
            one_way_distance_km: distance,
            fuel_price_per_litre: price,
            vehicle_1_consumption: consumption_1,
            vehicle_2_consumption: consumption_2,
        };
        let result = calculate_fuel_comparison(&input, 1).unwrap().result;

        prop_assert_eq!(result.round_trip_km, distance * round_trip_legs());
        prop_assert_eq!(
            result.vehicle_1.fuel_used_litres,
            consumption_1 / consumption_basis_km() * result.round_trip_km
        );
        prop_assert_eq!(
            result.vehicle_1.fuel_cost,
            result.vehicle_1.fuel_used_litres * price
        );
        prop_assert_eq!(
            result.cost_difference,
            result.vehicle_2.fuel_cost - result.vehicle_1.fuel_cost
        );
    }

    #[test]
    fn fuel_is_idempotent(
        distance in money(),
        price in money(),
        consumption_1 in money(),
        consumption_2 in money(),
    ) {
        let input = FuelComparisonInput {
            one_way_distance_km: distance,
            fuel_price_per_litre: price,
            vehicle_1_consumption: consumption_1,
            vehicle_2_consumption: consumption_2,
        };
        let first = calculate_fuel_comparison(&input, 1).unwrap().result;
        let second = calculate_fuel_comparison(&input, 1).unwrap().result;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sacrifice_closed_form_totals(
        after_tax in money(),
        periods in 1u32..=26,
        rate in tax_rate(),
        price in money(),
        fee in money(),
    ) {
        let input = SalarySacrificeInput {
            after_tax_pay: after_tax,
            sacrifice_periods: periods,
            tax_rate: rate,
            product_price: price,
            setup_fee: fee,
        };
        let policy = create_policy();
        let result = calculate_sacrifice_projection(&input, &policy).unwrap().result;

        // Without sacrifice: 26 full pays, minus the year-end purchase.
        prop_assert_eq!(
            result.total_without_sacrifice,
            Decimal::from(26) * after_tax - price
        );

        // With sacrifice: reduced pays for `periods`, full pays after,
        // minus the year-end setup fee. Tolerance-based comparison because
        // the loop accumulates while the closed form multiplies, and the
        // 96-bit decimal rounds differently at the last digit.
        let expected_with = Decimal::from(periods) * result.take_home_with_sacrifice
            + Decimal::from(26 - periods) * after_tax
            - fee;
        let difference = (result.total_with_sacrifice - expected_with).abs();
        prop_assert!(difference < Decimal::new(1, 9), "difference {}", difference);
    }

    #[test]
    fn sacrifice_savings_identities(
        after_tax in money(),
        periods in 1u32..=26,
        rate in tax_rate(),
        price in money(),
        fee in money(),
    ) {
        let input = SalarySacrificeInput {
            after_tax_pay: after_tax,
            sacrifice_periods: periods,
            tax_rate: rate,
            product_price: price,
            setup_fee: fee,
        };
        let policy = create_policy();
        let result = calculate_sacrifice_projection(&input, &policy).unwrap().result;

        prop_assert_eq!(
            result.savings,
            result.total_with_sacrifice - result.total_without_sacrifice
        );
        // Net cost and savings partition the purchase price.
        let difference = (result.savings - (price - result.net_cost)).abs();
        prop_assert!(difference < Decimal::new(1, 9), "difference {}", difference);
        prop_assert_eq!(
            result.tax_savings,
            result.gst_exclusive_price * rate
        );
    }

    #[test]
    fn sacrifice_is_idempotent(
        after_tax in money(),
        periods in 1u32..=26,
        rate in tax_rate(),
        price in money(),
        fee in money(),
    ) {
        let input = SalarySacrificeInput {
            after_tax_pay: after_tax,
            sacrifice_periods: periods,
            tax_rate: rate,
            product_price: price,
            setup_fee: fee,
        };
        let policy = create_policy();
        let first = calculate_sacrifice_projection(&input, &policy).unwrap().result;
        let second = calculate_sacrifice_projection(&input, &policy).unwrap().result;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sacrifice_series_always_has_26_ordered_rows(
        after_tax in money(),
        periods in 1u32..=26,
        rate in tax_rate(),
    ) {
        let input = SalarySacrificeInput {
            after_tax_pay: after_tax,
            sacrifice_periods: periods,
            tax_rate: rate,
            product_price: Decimal::new(260_000, 2),
            setup_fee: Decimal::new(1_000, 2),
        };
        let policy = create_policy();
        let result = calculate_sacrifice_projection(&input, &policy).unwrap().result;

        prop_assert_eq!(result.balances.len(), 26);
        for (i, row) in result.balances.iter().enumerate() {
            prop_assert_eq!(row.fortnight, i as u32 + 1);
        }
    }
}
