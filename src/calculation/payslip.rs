//! The pay slip pipeline.
//!
//! Runs every stage in order: input validation, fiscal gross, the four
//! contribution calculators and the aggregation.

use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::EngineResult;
use crate::models::{ContributionGroups, PayrollInputs, PayrollResult};

use super::{
    aggregate, calculate_csg_crds, calculate_fiscal_gross, calculate_health_contributions,
    calculate_miscellaneous_contributions, calculate_retirement_contributions,
};

/// Computes the pay slip of one employee for one month.
///
/// The computation is a pure function of `inputs` and `config`: calling it
/// twice with the same arguments yields identical results, and a shared
/// configuration can be used from any number of threads.
///
/// # Errors
///
/// - `InvalidInput` if any input amount is negative, or if the leave
///   deductions make the fiscal gross negative
/// - `MissingRate` if the rate table lacks a contribution
///
/// No partial result is ever returned.
///
/// # Examples
///
/// ```no_run
/// use payslip_engine::calculation::compute_payslip;
/// use payslip_engine::config::ConfigLoader;
/// use payslip_engine::models::PayrollInputs;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/fr2024")?.into_config();
/// let inputs = PayrollInputs::from_annual_salary(Decimal::from(21000));
///
/// let payslip = compute_payslip(&inputs, &config)?;
/// println!("Net payable: {}", payslip.net_payable);
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
pub fn compute_payslip(
    inputs: &PayrollInputs,
    config: &PayrollConfig,
) -> EngineResult<PayrollResult> {
    inputs.validate()?;

    let fiscal_gross = calculate_fiscal_gross(inputs)?;

    let contributions = ContributionGroups {
        health: calculate_health_contributions(
            fiscal_gross,
            inputs.health_surcharge_allowance,
            config,
        )?,
        retirement: calculate_retirement_contributions(fiscal_gross, config)?,
        miscellaneous: calculate_miscellaneous_contributions(fiscal_gross, config)?,
        csg_crds: calculate_csg_crds(fiscal_gross, inputs.health_surcharge_allowance, config)?,
    };

    let totals = aggregate(
        fiscal_gross,
        &contributions,
        inputs,
        config.income_tax_rate(),
    );

    debug!(
        year = %config.year().code,
        fiscal_gross = %fiscal_gross,
        total_employee_contributions = %totals.total_employee_contributions,
        net_payable = %totals.net_payable,
        "Computed pay slip"
    );

    Ok(PayrollResult {
        fiscal_gross,
        contributions,
        total_employee_contributions: totals.total_employee_contributions,
        total_employer_contributions: totals.total_employer_contributions,
        net_social: totals.net_social,
        meal_voucher_employee_share: inputs.meal_voucher_employee_share,
        surcharge_reimbursement: inputs.surcharge_reimbursement,
        phone_allowance: inputs.phone_allowance,
        net_before_tax: totals.net_before_tax,
        withheld_tax_rate: config.income_tax_rate(),
        withheld_tax: totals.withheld_tax,
        net_payable: totals.net_payable,
    })
}
