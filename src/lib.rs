//! Household Finance Calculation Engine
//!
//! This crate provides two independent, deterministic calculators (a fuel
//! cost comparator and a salary sacrifice savings projector) exposed through
//! a typed HTTP API. All monetary arithmetic uses `rust_decimal` so that
//! identical inputs always produce identical outputs.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
