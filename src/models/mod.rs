//! Core data models for the CLT Payroll Tax Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;

pub use breakdown::{EmployerCost, GrossResolution, PayrollBreakdown};
