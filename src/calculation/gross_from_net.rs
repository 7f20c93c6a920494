//! Net-to-gross salary resolution.
//!
//! Given the net salary a collaborator should take home, this module
//! finds the gross salary that produces it. The forward map (gross to
//! net) is monotonic but piecewise across bracket bounds, so instead of
//! inverting it algebraically the resolution iterates: compute the net
//! for a guess, then nudge the guess by the damped error until it lands.
//! The damping keeps the update a contraction: the forward map's slope
//! stays between 0.62 and 1 across all brackets, so each iteration
//! shrinks the error by at least half and the iteration bound is a
//! formality.

use rust_decimal::Decimal;

use crate::config::TaxTable;
use crate::error::EngineResult;
use crate::models::{GrossResolution, PayrollBreakdown};

use super::common::{ensure_non_negative, round_half_up};
use super::forward::breakdown_for;
use super::income_tax::withholding_raw;
use super::social_security::contribution_raw;

/// Multiplier applied to the net-salary error when updating the guess.
pub const DAMPING_FACTOR: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The iteration stops once the unrounded net is within this distance of
/// the target. A tenth of a cent: tight enough that rounding the final
/// breakdown to whole cents stays within one cent of the target.
pub const CONVERGENCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Upper bound on resolution iterations. Convergence is geometric, so
/// realistic salaries finish in well under twenty.
pub const MAX_ITERATIONS: u32 = 100;

/// Resolves the gross salary that yields a target net salary.
///
/// The iteration runs on unrounded decimals; only the resolved gross is
/// rounded to whole cents before the returned breakdown is computed from
/// it, so the breakdown satisfies the usual invariants exactly.
///
/// Exhausting the iteration bound is not an error: the last guess is
/// returned tagged `converged: false` so callers can decide whether a
/// best-effort approximation is acceptable.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidAmount`] for a negative
/// target net; the iteration is never entered.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::resolve_gross_from_net;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("./config/clt").unwrap();
/// let target = Decimal::from_str("5000.00").unwrap();
///
/// let resolution = resolve_gross_from_net(target, config.latest_table()).unwrap();
/// assert!(resolution.converged);
/// assert_eq!(resolution.breakdown.gross_salary, Decimal::from_str("6389.22").unwrap());
/// ```
pub fn resolve_gross_from_net(
    target_net: Decimal,
    table: &TaxTable,
) -> EngineResult<GrossResolution> {
    ensure_non_negative("net_salary", target_net)?;

    if target_net.is_zero() {
        return Ok(GrossResolution {
            breakdown: PayrollBreakdown::zero(),
            converged: true,
            iterations: 0,
        });
    }

    let mut guess = target_net;

    for iteration in 1..=MAX_ITERATIONS {
        let social_security = contribution_raw(guess, &table.social_security);
        let taxable_base = guess - social_security;
        let income_tax = withholding_raw(taxable_base, &table.income_tax);
        let computed_net = guess - social_security - income_tax;

        let error = target_net - computed_net;
        if error.abs() < CONVERGENCE_TOLERANCE {
            return Ok(GrossResolution {
                breakdown: breakdown_for(round_half_up(guess), table),
                converged: true,
                iterations: iteration,
            });
        }

        guess += error * DAMPING_FACTOR;
    }

    Ok(GrossResolution {
        breakdown: breakdown_for(round_half_up(guess), table),
        converged: false,
        iterations: MAX_ITERATIONS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table() -> TaxTable {
        ConfigLoader::load("./config/clt")
            .expect("Failed to load config")
            .latest_table()
            .clone()
    }

    #[test]
    fn test_zero_target_short_circuits() {
        let resolution = resolve_gross_from_net(Decimal::ZERO, &table()).unwrap();

        assert_eq!(resolution.breakdown, PayrollBreakdown::zero());
        assert!(resolution.converged);
        assert_eq!(resolution.iterations, 0);
    }

    #[test]
    fn test_negative_target_rejected() {
        let result = resolve_gross_from_net(dec("-5000.00"), &table());
        assert!(matches!(
            result,
            Err(EngineError::InvalidAmount { ref field, .. }) if field == "net_salary"
        ));
    }

    #[test]
    fn test_exempt_range_resolution() {
        let resolution = resolve_gross_from_net(dec("1000.00"), &table()).unwrap();

        assert!(resolution.converged);
        assert_eq!(resolution.breakdown.gross_salary, dec("1081.08"));
        assert_eq!(resolution.breakdown.social_security, dec("81.08"));
        assert_eq!(resolution.breakdown.income_tax, dec("0.00"));
        assert_eq!(resolution.breakdown.net_salary, dec("1000.00"));
        assert_eq!(resolution.breakdown.employer_levy, dec("86.49"));
    }

    #[test]
    fn test_mid_range_resolution() {
        let resolution = resolve_gross_from_net(dec("5000.00"), &table()).unwrap();

        assert!(resolution.converged);
        assert_eq!(resolution.breakdown.gross_salary, dec("6389.22"));
        assert_eq!(resolution.breakdown.social_security, dec("713.31"));
        assert_eq!(resolution.breakdown.income_tax, dec("675.91"));
        assert_eq!(resolution.breakdown.net_salary, dec("5000.00"));
    }

    #[test]
    fn test_capped_range_resolution() {
        let resolution = resolve_gross_from_net(dec("10000.00"), &table()).unwrap();

        assert!(resolution.converged);
        assert_eq!(resolution.breakdown.gross_salary, dec("13481.32"));
        assert_eq!(resolution.breakdown.social_security, dec("908.85"));
        assert_eq!(resolution.breakdown.net_salary, dec("10000.00"));
    }

    #[test]
    fn test_high_salary_resolution() {
        let resolution = resolve_gross_from_net(dec("50000.00"), &table()).unwrap();

        assert!(resolution.converged);
        assert_eq!(resolution.breakdown.gross_salary, dec("68653.73"));
        assert_eq!(resolution.breakdown.net_salary, dec("50000.00"));
    }

    #[test]
    fn test_very_large_target_still_converges() {
        let resolution = resolve_gross_from_net(dec("1000000.00"), &table()).unwrap();

        assert!(resolution.converged);
        assert!(resolution.iterations < MAX_ITERATIONS);
        assert_eq!(resolution.breakdown.gross_salary, dec("1378998.56"));
        assert_eq!(resolution.breakdown.net_salary, dec("1000000.00"));
    }

    #[test]
    fn test_tiny_target_converges() {
        let resolution = resolve_gross_from_net(dec("0.50"), &table()).unwrap();

        assert!(resolution.converged);
        assert_eq!(resolution.breakdown.gross_salary, dec("0.54"));
    }

    #[test]
    fn test_round_trip_within_a_cent() {
        let table = table();
        for target in ["1000.00", "5000.00", "10000.00", "50000.00"] {
            let target = dec(target);
            let resolution = resolve_gross_from_net(target, &table).unwrap();
            assert!(resolution.converged);

            let diff = (resolution.breakdown.net_salary - target).abs();
            assert!(diff <= dec("0.01"), "target {} missed by {}", target, diff);
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let table = table();
        let first = resolve_gross_from_net(dec("3456.78"), &table).unwrap();
        let second = resolve_gross_from_net(dec("3456.78"), &table).unwrap();

        assert_eq!(first, second);
    }
}
