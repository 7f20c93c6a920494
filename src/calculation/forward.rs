//! Forward gross-to-net composition.

use rust_decimal::Decimal;

use crate::config::TaxTable;
use crate::error::EngineResult;
use crate::models::PayrollBreakdown;

use super::common::ensure_non_negative;
use super::employer_levy::calculate_employer_levy;
use super::income_tax::calculate_income_tax;
use super::social_security::calculate_social_security;

/// Computes the full payroll breakdown for a gross salary.
///
/// The social-security contribution is deducted first; the income tax is
/// then withheld on the remaining taxable base; the net salary is what
/// survives both deductions. The employer levy rides along for the
/// employer-cost view but does not touch the net.
///
/// Each deduction is rounded half-up to two decimal places before the
/// next step, so the breakdown invariant
/// `net_salary = gross_salary - social_security - income_tax`
/// holds exactly on the returned figures.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidAmount`] for a negative
/// gross salary.
pub fn calculate_from_gross(gross: Decimal, table: &TaxTable) -> EngineResult<PayrollBreakdown> {
    ensure_non_negative("gross_salary", gross)?;
    Ok(breakdown_for(gross, table))
}

/// Builds the breakdown for an already validated gross salary.
pub(crate) fn breakdown_for(gross: Decimal, table: &TaxTable) -> PayrollBreakdown {
    let social_security = calculate_social_security(gross, &table.social_security);
    let taxable_base = gross - social_security;
    let income_tax = calculate_income_tax(taxable_base, &table.income_tax);
    let net_salary = taxable_base - income_tax;
    let employer_levy = calculate_employer_levy(gross, &table.employer_levy);

    PayrollBreakdown {
        gross_salary: gross,
        social_security,
        taxable_base,
        income_tax,
        net_salary,
        employer_levy,
    }
}
