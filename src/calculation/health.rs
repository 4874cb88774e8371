//! Health contribution calculation.
//!
//! This module computes the health section of the pay slip: complementary
//! health, the fixed health surcharge, incapacity/invalidity insurance and
//! dependency care.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{ContributionCode, ContributionLine};

use super::lines::rated_line;
use super::resolve_brackets;

/// Calculates the health contribution lines for a fiscal gross.
///
/// Lines are returned in pay slip order:
///
/// 1. Complementary health tranche 1, on the ceiling
/// 2. Complementary health tranche 2, on tranche 2
/// 3. Health surcharge, a fixed employee amount equal to the health
///    surcharge allowance, the same amount added to the fiscal gross
/// 4. Incapacity/invalidity tranche 1, on the ceiling; its employer rate is
///    defined relative to the ceiling, so the amount is `ceiling * rate`
/// 5. Incapacity/invalidity tranche 2, on tranche 2
/// 6. Dependency tranche 1, on the ceiling
///
/// # Errors
///
/// Returns `MissingRate` if any of the rated contributions is absent from
/// the configuration's rate table.
pub fn calculate_health_contributions(
    fiscal_gross: Decimal,
    health_surcharge_allowance: Decimal,
    config: &PayrollConfig,
) -> EngineResult<Vec<ContributionLine>> {
    let bases = resolve_brackets(fiscal_gross, config.ceiling());

    Ok(vec![
        rated_line(config, ContributionCode::ComplementaryHealthT1, bases.tranche1)?,
        rated_line(config, ContributionCode::ComplementaryHealthT2, bases.tranche2)?,
        ContributionLine::fixed(ContributionCode::HealthSurcharge, health_surcharge_allowance),
        rated_line(config, ContributionCode::IncapacityInvalidityT1, bases.tranche1)?,
        rated_line(config, ContributionCode::IncapacityInvalidityT2, bases.tranche2)?,
        rated_line(config, ContributionCode::DependencyT1, bases.tranche1)?,
    ])
}
