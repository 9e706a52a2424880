//! Performance benchmarks for the calculation engine.
//!
//! Both calculators are a single pass of decimal arithmetic (the projector
//! adds a 26-iteration loop), so these benchmarks mainly guard against
//! regressions in the audit-trail assembly and the HTTP envelope:
//! - Direct fuel comparison: < 10μs mean
//! - Direct sacrifice projection: < 50μs mean
//! - Full request through the router: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::str::FromStr;

use rust_decimal::Decimal;

use fincalc_engine::api::{AppState, create_router};
use fincalc_engine::calculation::{calculate_fuel_comparison, calculate_sacrifice_projection};
use fincalc_engine::config::ConfigLoader;
use fincalc_engine::models::{FuelComparisonInput, SalarySacrificeInput};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/policy").expect("Failed to load config");
    AppState::new(config)
}

fn create_fuel_input() -> FuelComparisonInput {
    FuelComparisonInput {
        one_way_distance_km: dec("933"),
        fuel_price_per_litre: dec("1.98"),
        vehicle_1_consumption: dec("5.5"),
        vehicle_2_consumption: dec("8.5"),
    }
}

fn create_sacrifice_input() -> SalarySacrificeInput {
    SalarySacrificeInput {
        after_tax_pay: dec("2000"),
        sacrifice_periods: 6,
        tax_rate: dec("0.30"),
        product_price: dec("2600"),
        setup_fee: dec("10"),
    }
}

fn bench_fuel_comparison(c: &mut Criterion) {
    let input = create_fuel_input();

    c.bench_function("fuel_comparison_direct", |b| {
        b.iter(|| calculate_fuel_comparison(black_box(&input), 1).unwrap())
    });
}

fn bench_sacrifice_projection(c: &mut Criterion) {
    let state = create_test_state();
    let policy = state.config().config().clone();
    let input = create_sacrifice_input();

    c.bench_function("sacrifice_projection_direct", |b| {
        b.iter(|| calculate_sacrifice_projection(black_box(&input), black_box(&policy)).unwrap())
    });
}

fn bench_sacrifice_through_router(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let body = r#"{
        "after_tax_pay": "2000",
        "sacrifice_periods": 6,
        "tax_rate": "0.30",
        "product_price": "2600",
        "setup_fee": "10"
    }"#;

    c.bench_function("sacrifice_projection_router", |b| {
        b.to_async(&rt).iter(|| {
            let router = router.clone();
            async move {
                let request = Request::builder()
                    .method("POST")
                    .uri("/sacrifice/project")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap();
                let response = router.oneshot(request).await.unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(
    benches,
    bench_fuel_comparison,
    bench_sacrifice_projection,
    bench_sacrifice_through_router
);
criterion_main!(benches);
