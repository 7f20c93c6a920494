//! CLT Payroll Tax Engine
//!
//! This crate computes Brazilian CLT payroll figures: the progressive INSS
//! social-security contribution, the progressive IRRF income-tax withholding,
//! the flat FGTS employer levy, and the reverse resolution of a gross salary
//! from a desired net salary.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod currency;
pub mod error;
pub mod models;
