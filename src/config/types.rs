//! Configuration types for the calculation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Policy constants file structure (`policy.yaml`).
///
/// These are jurisdiction-level assumptions, not user inputs: the GST rate
/// and the pay-cycle calendar are fixed per deployment so the arithmetic is
/// auditable without reading the calculation code.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// The consumption-tax (GST) rate, e.g. 0.10 for 10%.
    pub gst_rate: Decimal,
    /// Number of fortnightly pay periods in a year.
    pub fortnights_per_year: u32,
    /// Minimum number of fortnights a sacrifice can be spread over.
    pub min_sacrifice_periods: u32,
}

/// A single numeric input field in a calculator form.
///
/// Carries the contract a front end needs to render the field: a label,
/// a declared minimum (and optional maximum), a default, and a step
/// increment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// The field name, matching the request body field.
    pub name: String,
    /// Human-readable label for the field.
    pub label: String,
    /// Minimum accepted value.
    pub min: Decimal,
    /// Maximum accepted value, if bounded above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
    /// Default value to pre-fill.
    pub default: Decimal,
    /// Step increment for spinner-style widgets.
    pub step: Decimal,
}

/// The form schema for one calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Human-readable title for the calculator.
    pub title: String,
    /// Ordered field schemas.
    pub fields: Vec<FieldSpec>,
}

/// Form schemas file structure (`forms.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct FormsFile {
    /// Map of form name to form schema.
    pub forms: HashMap<String, FormConfig>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Policy constants.
    policy: PolicyFile,
    /// Form schemas by name.
    forms: HashMap<String, FormConfig>,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(policy: PolicyFile, forms: HashMap<String, FormConfig>) -> Self {
        Self { policy, forms }
    }

    /// Returns the GST rate (e.g. 0.10 for 10%).
    pub fn gst_rate(&self) -> Decimal {
        self.policy.gst_rate
    }

    /// Returns the divisor that removes GST from an inclusive price
    /// (`1 + gst_rate`, e.g. 1.1 for a 10% GST).
    pub fn gst_divisor(&self) -> Decimal {
        Decimal::ONE + self.policy.gst_rate
    }

    /// Returns the number of fortnightly pay periods in a year.
    pub fn fortnights_per_year(&self) -> u32 {
        self.policy.fortnights_per_year
    }

    /// Returns the minimum allowed sacrifice period count.
    pub fn min_sacrifice_periods(&self) -> u32 {
        self.policy.min_sacrifice_periods
    }

    /// Returns the maximum allowed sacrifice period count.
    ///
    /// The sacrifice cannot be spread over more fortnights than the year has.
    pub fn max_sacrifice_periods(&self) -> u32 {
        self.policy.fortnights_per_year
    }

    /// Returns all form schemas.
    pub fn forms(&self) -> &HashMap<String, FormConfig> {
        &self.forms
    }
}
