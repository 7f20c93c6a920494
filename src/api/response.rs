//! Response types for the CLT Payroll Tax Engine API.
//!
//! This module defines the calculation response envelope and the error
//! response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::format_brl;
use crate::error::EngineError;
use crate::models::{EmployerCost, PayrollBreakdown};

/// The response envelope returned by both calculation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The effective date of the tax table that was applied.
    pub table_effective_date: NaiveDate,
    /// The deduction breakdown.
    pub breakdown: PayrollBreakdown,
    /// The employer-side cost figures.
    pub employer_cost: EmployerCost,
    /// Present only on net-to-gross responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convergence: Option<ConvergenceReport>,
    /// Every breakdown figure formatted for display (pt-BR convention).
    pub display: DisplayBreakdown,
}

/// Convergence details of a net-to-gross resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvergenceReport {
    /// Whether the resolution reached the convergence tolerance.
    pub converged: bool,
    /// How many iterations the resolution took.
    pub iterations: u32,
}

/// The breakdown figures formatted with the Brazilian currency convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayBreakdown {
    /// Formatted gross salary.
    pub gross_salary: String,
    /// Formatted social-security contribution.
    pub social_security: String,
    /// Formatted income-tax withholding.
    pub income_tax: String,
    /// Formatted net salary.
    pub net_salary: String,
    /// Formatted employer levy.
    pub employer_levy: String,
    /// Formatted fully-loaded employer cost.
    pub total_cost: String,
}

impl DisplayBreakdown {
    /// Formats a breakdown and its employer cost for display.
    pub fn new(breakdown: &PayrollBreakdown, employer_cost: &EmployerCost) -> Self {
        Self {
            gross_salary: format_brl(breakdown.gross_salary),
            social_security: format_brl(breakdown.social_security),
            income_tax: format_brl(breakdown.income_tax),
            net_salary: format_brl(breakdown.net_salary),
            employer_levy: format_brl(breakdown.employer_levy),
            total_cost: format_brl(employer_cost.total_cost),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTaxTable { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid tax table",
                    message,
                ),
            },
            EngineError::TableNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TABLE_NOT_FOUND",
                    format!("No tax table effective on or before {}", date),
                    "Pick a reference date covered by the loaded tables",
                ),
            },
            EngineError::InvalidAmount { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_AMOUNT",
                    format!("Invalid amount for '{}': {}", field, message),
                    "Monetary amounts must be non-negative numbers",
                ),
            },
        }
    }
}
