//! Retirement contribution calculation.
//!
//! This module computes the basic pension (capped and uncapped) and the
//! complementary pension on both tranches.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{ContributionCode, ContributionLine};

use super::lines::rated_line;
use super::resolve_brackets;

/// Calculates the retirement contribution lines for a fiscal gross.
///
/// Lines are returned in pay slip order:
///
/// 1. Capped basic pension, on the ceiling
/// 2. Uncapped basic pension, on the whole fiscal gross
/// 3. Complementary pension tranche 1, on the ceiling
/// 4. Complementary pension tranche 2, on tranche 2
///
/// # Errors
///
/// Returns `MissingRate` if any contribution is absent from the rate table.
pub fn calculate_retirement_contributions(
    fiscal_gross: Decimal,
    config: &PayrollConfig,
) -> EngineResult<Vec<ContributionLine>> {
    let bases = resolve_brackets(fiscal_gross, config.ceiling());

    Ok(vec![
        rated_line(config, ContributionCode::CappedBasicPension, bases.tranche1)?,
        rated_line(config, ContributionCode::UncappedBasicPension, fiscal_gross)?,
        rated_line(config, ContributionCode::ComplementaryPensionT1, bases.tranche1)?,
        rated_line(config, ContributionCode::ComplementaryPensionT2, bases.tranche2)?,
    ])
}
