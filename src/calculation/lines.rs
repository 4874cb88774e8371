//! Rate table lookups shared by the contribution calculators.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{ContributionCode, ContributionLine};

/// Builds the line for `code` by applying its table rates to `base`.
///
/// Fails with `MissingRate` when the table has no entry for `code`; no
/// default rate is ever substituted.
pub(crate) fn rated_line(
    config: &PayrollConfig,
    code: ContributionCode,
    base: Decimal,
) -> EngineResult<ContributionLine> {
    let rates = config.rates().get(code)?;
    Ok(ContributionLine::rated(
        code,
        base,
        rates.employee,
        rates.employer,
    ))
}
