//! Common utility functions shared across the calculation modules.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("53.59875").unwrap();
/// assert_eq!(round_half_up(value), Decimal::from_str("53.60").unwrap());
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rejects negative monetary inputs before any calculation runs.
pub(crate) fn ensure_non_negative(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            field: field.to_string(),
            message: format!("{} must not be negative", amount),
        });
    }
    Ok(())
}
