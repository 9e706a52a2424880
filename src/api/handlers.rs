//! HTTP request handlers for the calculation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_fuel_comparison, calculate_sacrifice_projection};
use crate::models::{AuditTrace, FuelComparisonInput, SalarySacrificeInput};

use super::request::{FuelComparisonRequest, SacrificeProjectionRequest};
use super::response::{
    ApiError, ApiErrorResponse, FuelComparisonDisplay, FuelComparisonResponse, SacrificeDisplay,
    SacrificeResponse, fuel_verdict, sacrifice_verdict,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/fuel/compare", post(fuel_compare_handler))
        .route("/sacrifice/project", post(sacrifice_project_handler))
        .route("/:calculator/form", get(form_handler))
        .with_state(state)
}

/// Maps an axum JSON rejection to an API error body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /fuel/compare.
///
/// Accepts a fuel comparison request and returns the computed comparison.
async fn fuel_compare_handler(
    State(_state): State<AppState>,
    payload: Result<Json<FuelComparisonRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing fuel comparison request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let input: FuelComparisonInput = request.into();

    let start_time = Instant::now();
    match calculate_fuel_comparison(&input, 1) {
        Ok(calc) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                round_trip_km = %calc.result.round_trip_km,
                cost_difference = %calc.result.cost_difference,
                duration_us = duration.as_micros(),
                "Fuel comparison completed successfully"
            );
            let response = FuelComparisonResponse {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                verdict: fuel_verdict(calc.result.cost_difference),
                display: FuelComparisonDisplay::from_result(&calc.result),
                result: calc.result,
                audit_trace: AuditTrace {
                    steps: calc.audit_steps,
                    warnings: vec![],
                    duration_us: duration.as_micros() as u64,
                },
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Fuel comparison failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /sacrifice/project.
///
/// Accepts a salary sacrifice projection request and returns the projected
/// savings and the fortnightly balance series.
async fn sacrifice_project_handler(
    State(state): State<AppState>,
    payload: Result<Json<SacrificeProjectionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing sacrifice projection request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let input: SalarySacrificeInput = request.into();
    let policy = state.config().config();

    let start_time = Instant::now();
    match calculate_sacrifice_projection(&input, policy) {
        Ok(projection) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                sacrifice_periods = input.sacrifice_periods,
                savings = %projection.result.savings,
                duration_us = duration.as_micros(),
                "Sacrifice projection completed successfully"
            );
            let response = SacrificeResponse {
                calculation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                verdict: sacrifice_verdict(projection.result.savings),
                display: SacrificeDisplay::from_result(&projection.result),
                result: projection.result,
                audit_trace: AuditTrace {
                    steps: projection.audit_steps,
                    warnings: projection.warnings,
                    duration_us: duration.as_micros() as u64,
                },
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Sacrifice projection failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /{calculator}/form.
///
/// Returns the input field schema for the named calculator so a front end
/// can render the form.
async fn form_handler(
    State(state): State<AppState>,
    Path(calculator): Path<String>,
) -> impl IntoResponse {
    match state.config().form(&calculator) {
        Ok(form) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(form.clone()),
        )
            .into_response(),
        Err(err) => {
            warn!(calculator = %calculator, "Form schema not found");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
