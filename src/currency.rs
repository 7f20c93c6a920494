//! Brazilian currency formatting and parsing.
//!
//! Salary amounts cross the API boundary as plain decimals, but every
//! display figure uses the Brazilian convention: comma as the decimal
//! separator and dot as the thousands separator (`1234.56` -> `"1.234,56"`).
//! This module provides the exact, round-trip-safe conversion between the
//! two representations.

use rust_decimal::Decimal;

use crate::calculation::round_half_up;
use crate::error::{EngineError, EngineResult};

/// Formats a monetary amount using the Brazilian convention.
///
/// The output always carries exactly two decimal digits, a comma as the
/// decimal separator, and dots grouping the integer part in thousands.
/// The value is rounded half-up to two decimal places first.
///
/// # Examples
///
/// ```
/// use payroll_engine::currency::format_brl;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_brl(Decimal::from_str("1234.56").unwrap()), "1.234,56");
/// assert_eq!(format_brl(Decimal::from_str("0").unwrap()), "0,00");
/// assert_eq!(format_brl(Decimal::from_str("908.855").unwrap()), "908,86");
/// ```
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let text = rounded.abs().to_string();

    let (integer_part, fraction_part) = match text.split_once('.') {
        Some((int, frac)) => (int.to_string(), format!("{:0<2}", frac)),
        None => (text, "00".to_string()),
    };

    let grouped = group_thousands(&integer_part);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}{},{}", sign, grouped, fraction_part)
}

/// Parses a Brazilian-formatted currency string into a [`Decimal`].
///
/// Every character except digits and the comma is stripped (currency
/// symbols, spaces, and thousands dots included), then the comma is
/// treated as the decimal point. Empty input parses to zero, matching
/// how a blank salary field is treated.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmount`] when more than one comma
/// survives stripping or the remaining text is not a valid number.
///
/// # Examples
///
/// ```
/// use payroll_engine::currency::parse_brl;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_brl("1.234,56").unwrap(), Decimal::from_str("1234.56").unwrap());
/// assert_eq!(parse_brl("R$ 5.000,00").unwrap(), Decimal::from_str("5000.00").unwrap());
/// assert_eq!(parse_brl("").unwrap(), Decimal::ZERO);
/// ```
pub fn parse_brl(input: &str) -> EngineResult<Decimal> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();

    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }

    if cleaned.matches(',').count() > 1 {
        return Err(EngineError::InvalidAmount {
            field: "currency".to_string(),
            message: format!("'{}' has more than one decimal separator", input),
        });
    }

    cleaned
        .replace(',', ".")
        .parse::<Decimal>()
        .map_err(|e| EngineError::InvalidAmount {
            field: "currency".to_string(),
            message: format!("'{}' is not a valid amount: {}", input, e),
        })
}

/// Inserts a dot between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*b as char);
    }

    grouped
}
