//! Request types for the CLT Payroll Tax Engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/from-gross` and `/payroll/from-net` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/payroll/from-gross` endpoint.
///
/// Computes the deduction breakdown for a known gross salary, used when
/// displaying or re-verifying a stored contract value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FromGrossRequest {
    /// The contracted gross salary.
    pub gross_salary: Decimal,
    /// The competência date selecting which tax table applies.
    /// Omitted, the most recent table is used.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Supplemental recurring employer costs (materials, subscriptions).
    #[serde(default)]
    pub additional_costs: Vec<AdditionalCost>,
}

/// Request body for the `/payroll/from-net` endpoint.
///
/// Resolves the gross salary producing a desired take-home value: the
/// primary entry point used when an operator enters a net salary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FromNetRequest {
    /// The desired net salary after mandatory deductions.
    pub net_salary: Decimal,
    /// The competência date selecting which tax table applies.
    /// Omitted, the most recent table is used.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    /// Supplemental recurring employer costs (materials, subscriptions).
    #[serde(default)]
    pub additional_costs: Vec<AdditionalCost>,
}

/// A supplemental recurring cost carried by the employer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalCost {
    /// What the cost is for (e.g., "notebook", "design subscription").
    pub description: String,
    /// The monthly amount of the cost.
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_from_gross_request_deserialization() {
        let json = r#"{
            "gross_salary": "5000.00",
            "reference_date": "2024-05-01",
            "additional_costs": [
                {"description": "notebook", "amount": "250.00"}
            ]
        }"#;

        let request: FromGrossRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.gross_salary,
            Decimal::from_str("5000.00").unwrap()
        );
        assert_eq!(
            request.reference_date,
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert_eq!(request.additional_costs.len(), 1);
        assert_eq!(request.additional_costs[0].description, "notebook");
    }

    #[test]
    fn test_from_net_request_minimal() {
        let json = r#"{"net_salary": "5000.00"}"#;

        let request: FromNetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.net_salary, Decimal::from_str("5000.00").unwrap());
        assert!(request.reference_date.is_none());
        assert!(request.additional_costs.is_empty());
    }

    #[test]
    fn test_missing_amount_field_fails() {
        let json = r#"{"reference_date": "2024-05-01"}"#;
        assert!(serde_json::from_str::<FromNetRequest>(json).is_err());
    }
}
