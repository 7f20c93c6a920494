//! HTTP request handlers for the CLT Payroll Tax Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_from_gross, resolve_gross_from_net};
use crate::config::{ConfigLoader, TaxTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployerCost, PayrollBreakdown};

use super::request::{AdditionalCost, FromGrossRequest, FromNetRequest};
use super::response::{
    ApiError, ApiErrorResponse, ConvergenceReport, DisplayBreakdown, PayrollResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/from-gross", post(from_gross_handler))
        .route("/payroll/from-net", post(from_net_handler))
        .with_state(state)
}

/// Handler for the POST /payroll/from-gross endpoint.
///
/// Accepts a gross salary and returns its deduction breakdown.
async fn from_gross_handler(
    State(state): State<AppState>,
    payload: Result<Json<FromGrossRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing from-gross request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = (|| -> EngineResult<PayrollResponse> {
        let table = select_table(state.config(), request.reference_date)?;
        let additional = validate_additional_costs(&request.additional_costs)?;
        let breakdown = calculate_from_gross(request.gross_salary, table)?;
        Ok(build_response(table, breakdown, &additional, None))
    })();

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                gross_salary = %response.breakdown.gross_salary,
                net_salary = %response.breakdown.net_salary,
                "From-gross calculation completed"
            );
            ok_response(response)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /payroll/from-net endpoint.
///
/// Accepts a desired net salary and resolves the gross salary behind it.
async fn from_net_handler(
    State(state): State<AppState>,
    payload: Result<Json<FromNetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing from-net request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = (|| -> EngineResult<PayrollResponse> {
        let table = select_table(state.config(), request.reference_date)?;
        let additional = validate_additional_costs(&request.additional_costs)?;
        let resolution = resolve_gross_from_net(request.net_salary, table)?;

        if !resolution.converged {
            warn!(
                correlation_id = %correlation_id,
                target_net = %request.net_salary,
                iterations = resolution.iterations,
                "Net-to-gross resolution did not converge; returning best effort"
            );
        }

        let convergence = ConvergenceReport {
            converged: resolution.converged,
            iterations: resolution.iterations,
        };
        Ok(build_response(
            table,
            resolution.breakdown,
            &additional,
            Some(convergence),
        ))
    })();

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                gross_salary = %response.breakdown.gross_salary,
                net_salary = %response.breakdown.net_salary,
                "From-net resolution completed"
            );
            ok_response(response)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Picks the tax table for a request: the one effective at the reference
/// date, or the most recent when no date is given.
fn select_table(
    config: &ConfigLoader,
    reference_date: Option<NaiveDate>,
) -> EngineResult<&TaxTable> {
    match reference_date {
        Some(date) => config.table_for(date),
        None => Ok(config.latest_table()),
    }
}

/// Rejects negative supplemental costs and returns the bare amounts.
fn validate_additional_costs(costs: &[AdditionalCost]) -> EngineResult<Vec<Decimal>> {
    for cost in costs {
        if cost.amount < Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                field: "additional_costs".to_string(),
                message: format!("'{}' has negative amount {}", cost.description, cost.amount),
            });
        }
    }
    Ok(costs.iter().map(|c| c.amount).collect())
}

/// Assembles the response envelope for a computed breakdown.
fn build_response(
    table: &TaxTable,
    breakdown: PayrollBreakdown,
    additional_costs: &[Decimal],
    convergence: Option<ConvergenceReport>,
) -> PayrollResponse {
    let employer_cost = EmployerCost::from_breakdown(&breakdown, additional_costs);
    let display = DisplayBreakdown::new(&breakdown, &employer_cost);

    PayrollResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        table_effective_date: table.effective_date,
        breakdown,
        employer_cost,
        convergence,
        display,
    }
}

fn ok_response(response: PayrollResponse) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Maps a JSON extraction rejection onto the API error contract.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps an engine error onto the API error contract, logging it.
fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
