//! Payroll calculation result models.
//!
//! This module contains the [`PayrollBreakdown`] type and its associated
//! structures that capture the outputs of a payroll computation: the
//! employee-side deduction breakdown, the employer-side cost figures, and
//! the convergence-tagged result of a net-to-gross resolution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The breakdown of a gross salary into mandatory deductions and net pay.
///
/// Invariants, exact by construction:
/// `taxable_base = gross_salary - social_security` and
/// `net_salary = taxable_base - income_tax`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = PayrollBreakdown {
///     gross_salary: Decimal::from_str("5000.00").unwrap(),
///     social_security: Decimal::from_str("518.82").unwrap(),
///     taxable_base: Decimal::from_str("4481.18").unwrap(),
///     income_tax: Decimal::from_str("356.54").unwrap(),
///     net_salary: Decimal::from_str("4124.64").unwrap(),
///     employer_levy: Decimal::from_str("400.00").unwrap(),
/// };
/// assert_eq!(
///     breakdown.net_salary,
///     breakdown.gross_salary - breakdown.social_security - breakdown.income_tax
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The contracted salary before any deduction.
    pub gross_salary: Decimal,
    /// The progressive, capped social-security contribution (INSS).
    pub social_security: Decimal,
    /// The income-tax base: gross salary minus the social-security contribution.
    pub taxable_base: Decimal,
    /// The progressive, uncapped income-tax withholding (IRRF).
    pub income_tax: Decimal,
    /// What the collaborator actually receives after mandatory deductions.
    pub net_salary: Decimal,
    /// The flat employer-side levy (FGTS) on the gross salary.
    pub employer_levy: Decimal,
}

impl PayrollBreakdown {
    /// Returns an all-zero breakdown, the result for a zero salary.
    pub fn zero() -> Self {
        Self {
            gross_salary: Decimal::ZERO,
            social_security: Decimal::ZERO,
            taxable_base: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            net_salary: Decimal::ZERO,
            employer_levy: Decimal::ZERO,
        }
    }
}

/// The result of resolving a gross salary from a target net salary.
///
/// The fixed-point iteration behind the resolution is bounded; when the
/// bound is exhausted the last guess is still returned, tagged with
/// `converged: false`, so callers can distinguish an exact resolution
/// from a best-effort approximation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossResolution {
    /// The breakdown computed from the resolved gross salary.
    pub breakdown: PayrollBreakdown,
    /// Whether the iteration reached the convergence tolerance.
    pub converged: bool,
    /// How many iterations the resolution took.
    pub iterations: u32,
}

/// The employer-side cost of a collaborator.
///
/// On top of the mandatory levy, the employer may carry supplemental
/// recurring costs (materials, subscriptions, benefits); their sum is
/// folded into the fully-loaded total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCost {
    /// The flat employer levy on the gross salary.
    pub employer_levy: Decimal,
    /// The sum of supplemental recurring costs.
    pub additional_costs_total: Decimal,
    /// Gross salary plus levy plus supplemental costs.
    pub total_cost: Decimal,
}

impl EmployerCost {
    /// Builds the fully-loaded employer cost for a breakdown plus
    /// supplemental cost amounts.
    pub fn from_breakdown(breakdown: &PayrollBreakdown, additional_costs: &[Decimal]) -> Self {
        let additional_costs_total: Decimal = additional_costs.iter().copied().sum();
        Self {
            employer_levy: breakdown.employer_levy,
            additional_costs_total,
            total_cost: breakdown.gross_salary + breakdown.employer_levy + additional_costs_total,
        }
    }
}
