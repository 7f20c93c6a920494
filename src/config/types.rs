//! Configuration types for the payroll tax tables.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, together with the
//! validation rules applied once at load time. The hot calculation path
//! never re-validates a table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the employment regime the tables belong to.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeMetadata {
    /// The human-readable name of the regime.
    pub name: String,
    /// ISO country code of the regime.
    pub country: String,
    /// The version or effective date of the configuration set.
    pub version: String,
    /// URL to the official documentation.
    pub source_url: String,
}

/// One progressive bracket: the portion of a base amount between the
/// previous bracket's bound and `upper_bound` is charged at `rate`.
///
/// `upper_bound: None` means unbounded above and is only legal on the
/// final bracket of a table.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// The inclusive upper bound of this bracket, or `None` for the
    /// unbounded final bracket.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// The marginal rate applied within this bracket, as a fraction.
    pub rate: Decimal,
}

/// The progressive, capped social-security contribution table (INSS).
///
/// The `cap` is the published ceiling contribution, stored as explicit
/// data: the marginal sum accumulated through the final bound can differ
/// from the published value by a cent (the 2024 table accumulates to
/// 908.8618 while the published ceiling is 908.85).
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionTable {
    /// The ordered bracket list. The final bracket must be bounded.
    pub brackets: Vec<TaxBracket>,
    /// The fixed contribution charged for any gross at or above the
    /// final bracket's bound.
    pub cap: Decimal,
}

impl ContributionTable {
    /// Validates the bracket invariants plus the contribution-specific
    /// rules: a bounded final bracket and a positive cap.
    pub fn validate(&self) -> EngineResult<()> {
        validate_brackets(&self.brackets, "social_security")?;

        if self.brackets.last().is_some_and(|b| b.upper_bound.is_none()) {
            return Err(EngineError::InvalidTaxTable {
                message: "social_security table must end in a bounded bracket".to_string(),
            });
        }

        if self.cap <= Decimal::ZERO {
            return Err(EngineError::InvalidTaxTable {
                message: "social_security cap must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// The gross amount at which the contribution stops growing.
    ///
    /// Only meaningful on a validated table; an unbounded table yields
    /// `Decimal::MAX`, which disables the cap.
    pub fn ceiling(&self) -> Decimal {
        self.brackets
            .last()
            .and_then(|b| b.upper_bound)
            .unwrap_or(Decimal::MAX)
    }
}

/// The progressive, uncapped income-tax withholding table (IRRF).
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingTable {
    /// The ordered bracket list. The final bracket must be unbounded.
    pub brackets: Vec<TaxBracket>,
}

impl WithholdingTable {
    /// Validates the bracket invariants plus the withholding-specific
    /// rule: the final bracket must be unbounded so tax keeps accruing
    /// at the top marginal rate.
    pub fn validate(&self) -> EngineResult<()> {
        validate_brackets(&self.brackets, "income_tax")?;

        if self.brackets.last().is_some_and(|b| b.upper_bound.is_some()) {
            return Err(EngineError::InvalidTaxTable {
                message: "income_tax table must end in an unbounded bracket".to_string(),
            });
        }

        Ok(())
    }
}

/// The flat employer-side levy (FGTS).
#[derive(Debug, Clone, Deserialize)]
pub struct EmployerLevy {
    /// The proportional rate applied to the gross salary, as a fraction.
    pub rate: Decimal,
}

impl EmployerLevy {
    /// Validates that the rate is a sane fraction.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rate < Decimal::ZERO || self.rate > Decimal::ONE {
            return Err(EngineError::InvalidTaxTable {
                message: format!("employer_levy rate {} must be within [0, 1]", self.rate),
            });
        }
        Ok(())
    }
}

/// The complete tax table effective from a given date.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTable {
    /// The first competência date this table applies to.
    pub effective_date: NaiveDate,
    /// The social-security contribution table.
    pub social_security: ContributionTable,
    /// The income-tax withholding table.
    pub income_tax: WithholdingTable,
    /// The employer levy rate.
    pub employer_levy: EmployerLevy,
}

impl TaxTable {
    /// Validates every component table. Called once at config load.
    pub fn validate(&self) -> EngineResult<()> {
        self.social_security.validate()?;
        self.income_tax.validate()?;
        self.employer_levy.validate()?;
        Ok(())
    }
}

/// Shared bracket-shape invariants: non-empty, strictly ascending bounds,
/// unbounded only in final position, rates within [0, 1] and
/// non-decreasing bracket-to-bracket.
fn validate_brackets(brackets: &[TaxBracket], context: &str) -> EngineResult<()> {
    if brackets.is_empty() {
        return Err(EngineError::InvalidTaxTable {
            message: format!("{} table has no brackets", context),
        });
    }

    let mut previous_bound: Option<Decimal> = None;
    let mut previous_rate: Option<Decimal> = None;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(EngineError::InvalidTaxTable {
                message: format!(
                    "{} bracket {} rate {} must be within [0, 1]",
                    context, index, bracket.rate
                ),
            });
        }

        if previous_rate.is_some_and(|prev| bracket.rate < prev) {
            return Err(EngineError::InvalidTaxTable {
                message: format!("{} bracket {} rate decreases", context, index),
            });
        }
        previous_rate = Some(bracket.rate);

        match bracket.upper_bound {
            Some(bound) => {
                if bound <= Decimal::ZERO {
                    return Err(EngineError::InvalidTaxTable {
                        message: format!("{} bracket {} bound must be positive", context, index),
                    });
                }
                if previous_bound.is_some_and(|prev| bound <= prev) {
                    return Err(EngineError::InvalidTaxTable {
                        message: format!("{} bracket {} bounds must be ascending", context, index),
                    });
                }
                previous_bound = Some(bound);
            }
            None => {
                if index != brackets.len() - 1 {
                    return Err(EngineError::InvalidTaxTable {
                        message: format!(
                            "{} bracket {} is unbounded but not last",
                            context, index
                        ),
                    });
                }
            }
        }
    }

    Ok(())
}
