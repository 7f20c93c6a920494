//! HTTP API module for the CLT Payroll Tax Engine.
//!
//! This module provides the REST endpoints for computing a payroll
//! breakdown from a gross salary and for resolving the gross salary
//! behind a desired net salary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AdditionalCost, FromGrossRequest, FromNetRequest};
pub use response::{ApiError, ConvergenceReport, DisplayBreakdown, PayrollResponse};
pub use state::AppState;
