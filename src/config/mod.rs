//! Configuration loading and management for the calculation engine.
//!
//! This module provides functionality to load policy constants (GST rate,
//! fortnights per year, sacrifice-period bounds) and input form schemas
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use fincalc_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/policy").unwrap();
//! println!("GST rate: {}", config.config().gst_rate());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FieldSpec, FormConfig, FormsFile, PolicyConfig, PolicyFile};
