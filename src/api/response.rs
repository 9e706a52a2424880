//! Response types for the calculation engine API.
//!
//! This module defines the result envelopes, the formatted display maps,
//! and the error response structures for the HTTP API. Core results keep
//! full decimal precision; only the display strings round (2 decimal
//! places), so the presentation layer never feeds rounded values back
//! into arithmetic.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CalcError;
use crate::models::{AuditTrace, FuelComparisonResult, SalarySacrificeResult};

/// Response envelope for the `/fuel/compare` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelComparisonResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The full-precision comparison result.
    pub result: FuelComparisonResult,
    /// One-sentence summary of which vehicle costs more.
    pub verdict: String,
    /// Formatted result strings for direct rendering.
    pub display: FuelComparisonDisplay,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// Formatted fuel comparison results (2 decimal places).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelComparisonDisplay {
    /// Round-trip distance, e.g. "1866.00 km".
    pub round_trip: String,
    /// Vehicle 1 fuel used, e.g. "102.63 L".
    pub vehicle_1_fuel_used: String,
    /// Vehicle 1 fuel cost, e.g. "$203.21".
    pub vehicle_1_cost: String,
    /// Vehicle 2 fuel used.
    pub vehicle_2_fuel_used: String,
    /// Vehicle 2 fuel cost.
    pub vehicle_2_cost: String,
    /// Signed cost difference, vehicle 2 minus vehicle 1.
    pub cost_difference: String,
}

impl FuelComparisonDisplay {
    /// Builds the display strings from a full-precision result.
    pub fn from_result(result: &FuelComparisonResult) -> Self {
        Self {
            round_trip: format_quantity(result.round_trip_km, "km"),
            vehicle_1_fuel_used: format_quantity(result.vehicle_1.fuel_used_litres, "L"),
            vehicle_1_cost: format_currency(result.vehicle_1.fuel_cost),
            vehicle_2_fuel_used: format_quantity(result.vehicle_2.fuel_used_litres, "L"),
            vehicle_2_cost: format_currency(result.vehicle_2.fuel_cost),
            cost_difference: format_currency(result.cost_difference),
        }
    }
}

/// Response envelope for the `/sacrifice/project` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SacrificeResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The full-precision projection result, including the fortnightly
    /// balance series for line-chart rendering.
    pub result: SalarySacrificeResult,
    /// One-sentence summary of whether the sacrifice pays off.
    pub verdict: String,
    /// Formatted result strings for direct rendering.
    pub display: SacrificeDisplay,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// Formatted salary sacrifice results (currency to 2 decimal places).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SacrificeDisplay {
    /// Estimated annual savings.
    pub savings: String,
    /// Net cost of the product under sacrifice.
    pub net_cost: String,
    /// Tax saved on the pre-tax value.
    pub tax_savings: String,
    /// Product price with GST removed.
    pub gst_exclusive_price: String,
    /// Final with-sacrifice balance.
    pub total_with_sacrifice: String,
    /// Final without-sacrifice balance.
    pub total_without_sacrifice: String,
}

impl SacrificeDisplay {
    /// Builds the display strings from a full-precision result.
    pub fn from_result(result: &SalarySacrificeResult) -> Self {
        Self {
            savings: format_currency(result.savings),
            net_cost: format_currency(result.net_cost),
            tax_savings: format_currency(result.tax_savings),
            gst_exclusive_price: format_currency(result.gst_exclusive_price),
            total_with_sacrifice: format_currency(result.total_with_sacrifice),
            total_without_sacrifice: format_currency(result.total_without_sacrifice),
        }
    }
}

/// Summarizes a fuel cost difference as a sentence.
pub(crate) fn fuel_verdict(cost_difference: Decimal) -> String {
    if cost_difference > Decimal::ZERO {
        format!(
            "Vehicle 2 costs {} more than vehicle 1 for this trip",
            format_currency(cost_difference)
        )
    } else if cost_difference < Decimal::ZERO {
        format!(
            "Vehicle 2 costs {} less than vehicle 1 for this trip",
            format_currency(-cost_difference)
        )
    } else {
        "Both vehicles cost the same for this trip".to_string()
    }
}

/// Summarizes projected savings as a sentence.
pub(crate) fn sacrifice_verdict(savings: Decimal) -> String {
    if savings > Decimal::ZERO {
        format!(
            "You end up {} ahead with salary sacrifice",
            format_currency(savings)
        )
    } else if savings < Decimal::ZERO {
        format!(
            "You end up {} behind with salary sacrifice",
            format_currency(-savings)
        )
    } else {
        "Salary sacrifice leaves you exactly even".to_string()
    }
}

/// Formats a monetary amount as currency with thousands separators,
/// rounded to 2 decimal places. Negative amounts render as "-$1.23".
pub(crate) fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let formatted = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Formats a non-currency quantity with a unit, rounded to 2 decimal places.
pub(crate) fn format_quantity(amount: Decimal, unit: &str) -> String {
    format!("{:.2} {unit}", amount.round_dp(2))
}

fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CalcError> for ApiErrorResponse {
    fn from(error: CalcError) -> Self {
        match error {
            CalcError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            CalcError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            CalcError::FormNotFound { name } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "FORM_NOT_FOUND",
                    format!("Form not found: {}", name),
                    "No calculator form with that name is configured",
                ),
            },
            CalcError::NegativeInput { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NEGATIVE_INPUT",
                    format!("Input '{}' must not be negative, got {}", field, value),
                    "Monetary and rate inputs must be zero or greater",
                ),
            },
            CalcError::TaxRateOutOfRange { rate } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TAX_RATE_OUT_OF_RANGE",
                    format!(
                        "Tax rate must be at least 0 and below 1 (full taxation excluded), got {}",
                        rate
                    ),
                    "Grossing up divides by (1 - tax_rate), so a rate of 1 is undefined",
                ),
            },
            CalcError::SacrificePeriodsOutOfRange { periods, min, max } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SACRIFICE_PERIODS_OUT_OF_RANGE",
                    format!(
                        "Sacrifice periods must be between {} and {} fortnights, got {}",
                        min, max, periods
                    ),
                    "The sacrifice cannot be spread over more fortnights than the year has",
                ),
            },
            CalcError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
