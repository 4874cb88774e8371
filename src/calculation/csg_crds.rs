//! Generalized social contribution (CSG/CRDS) calculation.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{ContributionCode, ContributionLine};

use super::lines::rated_line;

/// Returns the CSG/CRDS base: the fiscal gross plus the health surcharge allowance.
///
/// No abatement is applied to this base.
pub fn csg_crds_base(fiscal_gross: Decimal, health_surcharge_allowance: Decimal) -> Decimal {
    fiscal_gross + health_surcharge_allowance
}

/// Calculates the deductible and non-deductible CSG/CRDS lines, in that order.
///
/// # Examples
///
/// ```no_run
/// use payslip_engine::calculation::calculate_csg_crds;
/// use payslip_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("./config/fr2024")?.into_config();
/// let lines = calculate_csg_crds(
///     Decimal::from_str("1756.22").unwrap(),
///     Decimal::from_str("5.00").unwrap(),
///     &config,
/// )?;
/// assert_eq!(lines.len(), 2);
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
pub fn calculate_csg_crds(
    fiscal_gross: Decimal,
    health_surcharge_allowance: Decimal,
    config: &PayrollConfig,
) -> EngineResult<Vec<ContributionLine>> {
    let base = csg_crds_base(fiscal_gross, health_surcharge_allowance);

    Ok(vec![
        rated_line(config, ContributionCode::CsgDeductible, base)?,
        rated_line(config, ContributionCode::CsgCrdsNonDeductible, base)?,
    ])
}
