//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{CalcError, CalcResult};

use super::types::{FormConfig, FormsFile, PolicyConfig, PolicyFile};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query policy constants and form schemas.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/policy/
/// ├── policy.yaml  # GST rate, fortnights per year, period bounds
/// └── forms.yaml   # Input field schemas for each calculator
/// ```
///
/// # Example
///
/// ```no_run
/// use fincalc_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/policy").unwrap();
///
/// let form = loader.form("sacrifice").unwrap();
/// println!("Form: {}", form.title);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/policy")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyFile>(&policy_path)?;

        let forms_path = path.join("forms.yaml");
        let forms_file = Self::load_yaml::<FormsFile>(&forms_path)?;

        Ok(Self {
            config: PolicyConfig::new(policy, forms_file.forms),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalcResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalcError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalcError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the form schema with the given name.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::FormNotFound` if no form with that name exists.
    pub fn form(&self, name: &str) -> CalcResult<&FormConfig> {
        self.config
            .forms()
            .get(name)
            .ok_or_else(|| CalcError::FormNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_policy_directory() {
        let loader = ConfigLoader::load("./config/policy").unwrap();
        let config = loader.config();

        assert_eq!(config.gst_rate(), dec("0.10"));
        assert_eq!(config.fortnights_per_year(), 26);
        assert_eq!(config.min_sacrifice_periods(), 1);
    }

    #[test]
    fn test_load_missing_directory_returns_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist");

        assert!(result.is_err());
        match result.unwrap_err() {
            CalcError::ConfigNotFound { path } => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_fuel_form_schema_loaded() {
        let loader = ConfigLoader::load("./config/policy").unwrap();
        let form = loader.form("fuel").unwrap();

        assert_eq!(form.fields.len(), 4);
        let names: Vec<&str> = form.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "one_way_distance_km",
                "fuel_price_per_litre",
                "vehicle_1_consumption",
                "vehicle_2_consumption"
            ]
        );
    }

    #[test]
    fn test_sacrifice_form_has_bounded_periods_field() {
        let loader = ConfigLoader::load("./config/policy").unwrap();
        let form = loader.form("sacrifice").unwrap();

        let periods = form
            .fields
            .iter()
            .find(|f| f.name == "sacrifice_periods")
            .unwrap();
        assert_eq!(periods.min, dec("1"));
        assert_eq!(periods.max, Some(dec("26")));
        assert_eq!(periods.default, dec("6"));
    }

    #[test]
    fn test_unknown_form_returns_error() {
        let loader = ConfigLoader::load("./config/policy").unwrap();
        let result = loader.form("mortgage");

        assert!(result.is_err());
        match result.unwrap_err() {
            CalcError::FormNotFound { name } => assert_eq!(name, "mortgage"),
            other => panic!("Expected FormNotFound, got {:?}", other),
        }
    }
}
