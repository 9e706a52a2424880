//! Error types for the calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use fincalc_engine::error::CalcError;
///
/// let error = CalcError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CalcError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Form schema was not found in the configuration.
    #[error("Form not found: {name}")]
    FormNotFound {
        /// The form name that was not found.
        name: String,
    },

    /// A monetary or rate input was negative.
    #[error("Input '{field}' must not be negative, got {value}")]
    NegativeInput {
        /// The field that was negative.
        field: String,
        /// The offending value.
        value: Decimal,
    },

    /// The flat tax rate was outside the half-open interval [0, 1).
    ///
    /// A rate of exactly 1 is excluded because grossing up divides by
    /// `1 - tax_rate`.
    #[error("Tax rate must be at least 0 and below 1 (full taxation excluded), got {rate}")]
    TaxRateOutOfRange {
        /// The offending tax rate.
        rate: Decimal,
    },

    /// The sacrifice period count was outside the allowed range.
    #[error("Sacrifice periods must be between {min} and {max} fortnights, got {periods}")]
    SacrificePeriodsOutOfRange {
        /// The offending period count.
        periods: u32,
        /// The minimum allowed period count.
        min: u32,
        /// The maximum allowed period count.
        max: u32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return CalcError.
pub type CalcResult<T> = Result<T, CalcError>;
