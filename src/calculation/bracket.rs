//! Generic marginal-bracket summation.
//!
//! Both progressive deductions (INSS and IRRF) share the same structure:
//! an ordered bracket table where each bracket charges its rate only on
//! the portion of the base falling inside it. This module implements that
//! walk once, parameterized by the table, so bracket updates never touch
//! the algorithm.

use rust_decimal::Decimal;

use crate::config::TaxBracket;

/// Computes the marginal-bracket sum of `base` against an ordered table.
///
/// Each bracket contributes `(min(base, upper) - lower) * rate`, where
/// `lower` is the previous bracket's bound. A base exactly on a bound is
/// priced by the bracket that ends at that bound; the adjacent formulas
/// agree there, so the result is continuous across bounds. A base beyond
/// a fully bounded table gets every bracket applied in full, with no
/// charge on the excess; callers that cap the result handle that case
/// before calling.
///
/// The table is assumed validated (see
/// [`crate::config::ContributionTable::validate`]); the sum is computed
/// with full precision and not rounded here.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::marginal_sum;
/// use payroll_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let brackets = vec![
///     TaxBracket { upper_bound: Some(dec("1412.00")), rate: dec("0.075") },
///     TaxBracket { upper_bound: Some(dec("2666.68")), rate: dec("0.09") },
/// ];
///
/// // 1412.00 * 0.075 + (2000.00 - 1412.00) * 0.09
/// assert_eq!(marginal_sum(dec("2000.00"), &brackets), dec("158.82"));
/// ```
pub fn marginal_sum(base: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut total = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for bracket in brackets {
        match bracket.upper_bound {
            Some(upper) if base > upper => {
                total += (upper - lower) * bracket.rate;
                lower = upper;
            }
            _ => {
                total += (base - lower) * bracket.rate;
                return total;
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(bound: Option<&str>, rate: &str) -> TaxBracket {
        TaxBracket {
            upper_bound: bound.map(dec),
            rate: dec(rate),
        }
    }

    fn bounded_table() -> Vec<TaxBracket> {
        vec![
            bracket(Some("1412.00"), "0.075"),
            bracket(Some("2666.68"), "0.09"),
            bracket(Some("4000.03"), "0.12"),
            bracket(Some("7786.02"), "0.14"),
        ]
    }

    fn unbounded_table() -> Vec<TaxBracket> {
        vec![
            bracket(Some("2112.00"), "0"),
            bracket(Some("2826.65"), "0.075"),
            bracket(None, "0.275"),
        ]
    }

    #[test]
    fn test_zero_base_is_zero() {
        assert_eq!(marginal_sum(Decimal::ZERO, &bounded_table()), Decimal::ZERO);
    }

    #[test]
    fn test_base_within_first_bracket() {
        assert_eq!(marginal_sum(dec("1000.00"), &bounded_table()), dec("75.00"));
    }

    #[test]
    fn test_base_on_bound_priced_by_ending_bracket() {
        // 1412.00 * 0.075; the first bracket's formula applies at its own bound
        assert_eq!(marginal_sum(dec("1412.00"), &bounded_table()), dec("105.90"));
    }

    #[test]
    fn test_base_spanning_two_brackets() {
        // 105.90 + (2000.00 - 1412.00) * 0.09
        assert_eq!(marginal_sum(dec("2000.00"), &bounded_table()), dec("158.82"));
    }

    #[test]
    fn test_continuity_across_bound() {
        let below = marginal_sum(dec("2666.67"), &bounded_table());
        let at = marginal_sum(dec("2666.68"), &bounded_table());
        let above = marginal_sum(dec("2666.69"), &bounded_table());

        assert!(at - below < dec("0.01"));
        assert!(above - at < dec("0.01"));
        assert!(below < at && at < above);
    }

    #[test]
    fn test_base_beyond_bounded_table_gets_full_accumulation() {
        let full = marginal_sum(dec("7786.02"), &bounded_table());
        assert_eq!(marginal_sum(dec("50000.00"), &bounded_table()), full);
        assert_eq!(full, dec("908.86180"));
    }

    #[test]
    fn test_unbounded_tail_keeps_accruing() {
        let at_10k = marginal_sum(dec("10000.00"), &unbounded_table());
        let at_20k = marginal_sum(dec("20000.00"), &unbounded_table());

        // The excess over 10 000 is charged entirely at the top rate.
        assert_eq!(at_20k - at_10k, dec("10000.00") * dec("0.275"));
    }

    #[test]
    fn test_zero_rate_bracket_contributes_nothing() {
        assert_eq!(marginal_sum(dec("2112.00"), &unbounded_table()), dec("0.00"));
    }
}
