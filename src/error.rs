//! Error types for the CLT Payroll Tax Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the CLT Payroll Tax Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tax table failed validation at load time.
    #[error("Invalid tax table: {message}")]
    InvalidTaxTable {
        /// A description of what made the table invalid.
        message: String,
    },

    /// No tax table is effective on or before the requested date.
    #[error("No tax table effective on or before {date}")]
    TableNotFound {
        /// The date for which a table was requested.
        date: NaiveDate,
    },

    /// A monetary input was invalid (negative or not parseable).
    #[error("Invalid amount for '{field}': {message}")]
    InvalidAmount {
        /// The field that was invalid.
        field: String,
        /// A description of what made the amount invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
