//! HTTP API module for the calculation engine.
//!
//! This module provides the REST API endpoints for the fuel cost
//! comparator and the salary sacrifice projector.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FuelComparisonRequest, SacrificeProjectionRequest};
pub use response::{
    ApiError, FuelComparisonDisplay, FuelComparisonResponse, SacrificeDisplay, SacrificeResponse,
};
pub use state::AppState;
