//! Flat employer levy calculation (FGTS).

use rust_decimal::Decimal;

use crate::config::EmployerLevy;

use super::common::round_half_up;

/// Calculates the employer-side levy on a gross salary.
///
/// A simple proportional charge with no brackets and no cap, rounded
/// half-up to two decimal places. The levy is owed by the employer on top
/// of the gross salary; it never reduces the collaborator's net pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_employer_levy;
/// use payroll_engine::config::EmployerLevy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let levy = EmployerLevy { rate: Decimal::from_str("0.08").unwrap() };
/// let gross = Decimal::from_str("5000.00").unwrap();
/// assert_eq!(calculate_employer_levy(gross, &levy), Decimal::from_str("400.00").unwrap());
/// ```
pub fn calculate_employer_levy(gross: Decimal, levy: &EmployerLevy) -> Decimal {
    round_half_up(gross * levy.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn levy_2024() -> EmployerLevy {
        EmployerLevy { rate: dec("0.08") }
    }

    #[test]
    fn test_levy_is_proportional() {
        assert_eq!(calculate_employer_levy(dec("5000.00"), &levy_2024()), dec("400.00"));
        assert_eq!(calculate_employer_levy(dec("10000.00"), &levy_2024()), dec("800.00"));
    }

    #[test]
    fn test_levy_rounds_to_cents() {
        // 1081.08 * 0.08 = 86.4864
        assert_eq!(calculate_employer_levy(dec("1081.08"), &levy_2024()), dec("86.49"));
    }

    #[test]
    fn test_levy_on_zero_gross() {
        assert_eq!(calculate_employer_levy(Decimal::ZERO, &levy_2024()), Decimal::ZERO);
    }

    #[test]
    fn test_levy_has_no_cap() {
        assert_eq!(
            calculate_employer_levy(dec("1000000.00"), &levy_2024()),
            dec("80000.00")
        );
    }
}
