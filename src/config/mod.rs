//! Configuration loading and management for the CLT Payroll Tax Engine.
//!
//! This module provides functionality to load the payroll configuration
//! from YAML files: regime metadata plus the effective-dated INSS, IRRF,
//! and FGTS tables. Tables are validated once here; the calculation path
//! trusts them.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded regime: {}", config.regime().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ContributionTable, EmployerLevy, RegimeMetadata, TaxBracket, TaxTable, WithholdingTable,
};
