//! Miscellaneous contribution calculation.
//!
//! Family allowance, unemployment insurance and the executive association
//! (APEC) contribution, all on the whole fiscal gross.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{ContributionCode, ContributionLine};

use super::lines::rated_line;

/// Calculates the miscellaneous contribution lines for a fiscal gross.
///
/// Lines are returned in pay slip order: family allowance, unemployment
/// insurance, executive association.
pub fn calculate_miscellaneous_contributions(
    fiscal_gross: Decimal,
    config: &PayrollConfig,
) -> EngineResult<Vec<ContributionLine>> {
    Ok(vec![
        rated_line(config, ContributionCode::FamilyAllowance, fiscal_gross)?,
        rated_line(config, ContributionCode::UnemploymentInsurance, fiscal_gross)?,
        rated_line(config, ContributionCode::ExecutiveAssociation, fiscal_gross)?,
    ])
}
