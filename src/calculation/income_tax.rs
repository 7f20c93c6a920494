//! Progressive income-tax withholding calculation (IRRF).

use rust_decimal::Decimal;

use crate::config::WithholdingTable;

use super::bracket::marginal_sum;
use super::common::round_half_up;

/// Calculates the income-tax withholding for a taxable base.
///
/// The base is the gross salary with the social-security contribution
/// already subtracted. The withholding is a marginal-bracket sum against
/// the table, rounded half-up to two decimal places. Unlike the
/// social-security contribution there is no cap: the final bracket is
/// unbounded, so tax keeps accruing at the top marginal rate for any
/// base above the highest threshold.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_income_tax;
/// use payroll_engine::config::{TaxBracket, WithholdingTable};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let table = WithholdingTable {
///     brackets: vec![
///         TaxBracket { upper_bound: Some(dec("2112.00")), rate: dec("0") },
///         TaxBracket { upper_bound: Some(dec("2826.65")), rate: dec("0.075") },
///         TaxBracket { upper_bound: None, rate: dec("0.275") },
///     ],
/// };
///
/// assert_eq!(calculate_income_tax(dec("2112.00"), &table), dec("0.00"));
/// assert_eq!(calculate_income_tax(dec("2826.65"), &table), dec("53.60"));
/// ```
pub fn calculate_income_tax(taxable_base: Decimal, table: &WithholdingTable) -> Decimal {
    round_half_up(withholding_raw(taxable_base, table))
}

/// The unrounded withholding, used by the net-to-gross iteration.
pub(crate) fn withholding_raw(taxable_base: Decimal, table: &WithholdingTable) -> Decimal {
    marginal_sum(taxable_base, &table.brackets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxBracket;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table_2024() -> WithholdingTable {
        WithholdingTable {
            brackets: vec![
                TaxBracket {
                    upper_bound: Some(dec("2112.00")),
                    rate: dec("0"),
                },
                TaxBracket {
                    upper_bound: Some(dec("2826.65")),
                    rate: dec("0.075"),
                },
                TaxBracket {
                    upper_bound: Some(dec("3751.05")),
                    rate: dec("0.15"),
                },
                TaxBracket {
                    upper_bound: Some(dec("4664.68")),
                    rate: dec("0.225"),
                },
                TaxBracket {
                    upper_bound: None,
                    rate: dec("0.275"),
                },
            ],
        }
    }

    #[test]
    fn test_exempt_band_pays_nothing() {
        assert_eq!(calculate_income_tax(dec("1500.00"), &table_2024()), dec("0.00"));
        assert_eq!(calculate_income_tax(dec("2112.00"), &table_2024()), dec("0.00"));
    }

    #[test]
    fn test_second_bracket_withholding() {
        // (2826.65 - 2112.00) * 0.075 = 53.59875
        assert_eq!(
            calculate_income_tax(dec("2826.65"), &table_2024()),
            dec("53.60")
        );
    }

    #[test]
    fn test_third_bracket_withholding() {
        assert_eq!(
            calculate_income_tax(dec("3000.00"), &table_2024()),
            dec("79.60")
        );
    }

    #[test]
    fn test_fourth_bracket_withholding() {
        assert_eq!(
            calculate_income_tax(dec("4664.68"), &table_2024()),
            dec("397.83")
        );
    }

    #[test]
    fn test_top_bracket_withholding() {
        assert_eq!(
            calculate_income_tax(dec("10000.00"), &table_2024()),
            dec("1865.04")
        );
    }

    #[test]
    fn test_no_cap_on_withholding() {
        let at_50k = calculate_income_tax(dec("50000.00"), &table_2024());
        let at_100k = calculate_income_tax(dec("100000.00"), &table_2024());

        assert_eq!(at_100k, dec("26615.04"));
        // The excess is charged entirely at the top marginal rate.
        assert_eq!(at_100k - at_50k, dec("50000.00") * dec("0.275"));
    }

    #[test]
    fn test_zero_base_is_zero() {
        assert_eq!(
            calculate_income_tax(Decimal::ZERO, &table_2024()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_withholding_non_decreasing() {
        let table = table_2024();
        let mut previous = Decimal::ZERO;
        for base in ["1000", "2112", "2500", "2826.65", "3751.05", "4664.68", "9000"] {
            let current = calculate_income_tax(dec(base), &table);
            assert!(current >= previous, "decreased at base {}", base);
            previous = current;
        }
    }
}
