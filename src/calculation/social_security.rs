//! Progressive social-security contribution calculation (INSS).

use rust_decimal::Decimal;

use crate::config::ContributionTable;

use super::bracket::marginal_sum;
use super::common::round_half_up;

/// Calculates the employee-side social-security contribution for a gross
/// salary.
///
/// The contribution is a marginal-bracket sum against the table, rounded
/// half-up to two decimal places. A gross at or above the final bracket's
/// bound pays the table's published cap exactly, no matter how large the
/// gross grows. The cap is table data rather than a derived value because
/// the accumulated marginal sum can sit a cent away from the published
/// ceiling.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_social_security;
/// use payroll_engine::config::{ContributionTable, TaxBracket};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let table = ContributionTable {
///     brackets: vec![
///         TaxBracket { upper_bound: Some(dec("1412.00")), rate: dec("0.075") },
///         TaxBracket { upper_bound: Some(dec("2666.68")), rate: dec("0.09") },
///     ],
///     cap: dec("218.82"),
/// };
///
/// assert_eq!(calculate_social_security(dec("1412.00"), &table), dec("105.90"));
/// assert_eq!(calculate_social_security(dec("9999.00"), &table), dec("218.82"));
/// ```
pub fn calculate_social_security(gross: Decimal, table: &ContributionTable) -> Decimal {
    round_half_up(contribution_raw(gross, table))
}

/// The unrounded contribution, used by the net-to-gross iteration so
/// boundary rounding never perturbs the fixed point.
pub(crate) fn contribution_raw(gross: Decimal, table: &ContributionTable) -> Decimal {
    if gross >= table.ceiling() {
        return table.cap;
    }
    marginal_sum(gross, &table.brackets)
}
