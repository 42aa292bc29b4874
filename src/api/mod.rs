//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoint for running payroll calculations
//! over the configured tax tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
