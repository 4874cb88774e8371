//! Fiscal gross calculation.
//!
//! This module derives the fiscal gross, the base of most contributions,
//! from the base salary and the period's allowances and leave adjustments.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollInputs;

use super::round_to_cents;

/// Calculates the fiscal gross of a pay period, rounded to the cent.
///
/// `base + health surcharge allowance - leave deduction 1 - leave deduction 2
/// + leave indemnity + tenth bonus adjustment`.
///
/// Returns `InvalidInput` on field `fiscal_gross` when the deductions exceed
/// the earnings or the sum leaves the range of `Decimal`. Inputs are expected
/// to have been validated already.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_fiscal_gross;
/// use payslip_engine::models::PayrollInputs;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let mut inputs = PayrollInputs::from_base_salary(dec("1750.00"));
/// inputs.health_surcharge_allowance = dec("5.00");
/// inputs.paid_leave_deduction_1 = dec("102.03");
/// inputs.paid_leave_deduction_2 = dec("204.06");
/// inputs.paid_leave_indemnity = dec("306.09");
/// inputs.tenth_bonus_adjustment = dec("1.22");
///
/// assert_eq!(calculate_fiscal_gross(&inputs).unwrap(), dec("1756.22"));
/// ```
pub fn calculate_fiscal_gross(inputs: &PayrollInputs) -> EngineResult<Decimal> {
    let earnings = [
        inputs.base_salary,
        inputs.health_surcharge_allowance,
        inputs.paid_leave_indemnity,
        inputs.tenth_bonus_adjustment,
    ];
    let deductions = [inputs.paid_leave_deduction_1, inputs.paid_leave_deduction_2];

    let sum = earnings
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .and_then(|total| deductions.into_iter().try_fold(total, Decimal::checked_sub))
        .ok_or_else(|| EngineError::InvalidInput {
            field: "fiscal_gross".to_string(),
            message: "amounts are too large to sum".to_string(),
        })?;
    let fiscal_gross = round_to_cents(sum);

    if fiscal_gross < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "fiscal_gross".to_string(),
            message: format!(
                "paid leave deductions exceed earnings (fiscal gross {})",
                fiscal_gross
            ),
        });
    }

    Ok(fiscal_gross)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_base_salary_alone() {
        let inputs = PayrollInputs::from_base_salary(dec("1750.00"));
        assert_eq!(calculate_fiscal_gross(&inputs).unwrap(), dec("1750.00"));
    }

    #[test]
    fn test_annual_salary_with_leave_adjustments() {
        let mut inputs = PayrollInputs::from_annual_salary(dec("21000"));
        inputs.health_surcharge_allowance = dec("5.00");
        inputs.paid_leave_deduction_1 = dec("102.03");
        inputs.paid_leave_deduction_2 = dec("204.06");
        inputs.paid_leave_indemnity = dec("306.09");
        inputs.tenth_bonus_adjustment = dec("1.22");

        assert_eq!(calculate_fiscal_gross(&inputs).unwrap(), dec("1756.22"));
    }

    #[test]
    fn test_overflowing_sum_is_an_error() {
        let mut inputs = PayrollInputs::from_base_salary(Decimal::MAX);
        inputs.health_surcharge_allowance = Decimal::ONE;

        match calculate_fiscal_gross(&inputs) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "fiscal_gross"),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_terminating_monthly_base_is_rounded_to_cents() {
        let inputs = PayrollInputs::from_annual_salary(dec("25000"));

        // 25000 / 12 = 2083.333...
        assert_eq!(calculate_fiscal_gross(&inputs).unwrap(), dec("2083.33"));
    }

    #[test]
    fn test_net_amounts_do_not_affect_fiscal_gross() {
        let mut inputs = PayrollInputs::from_base_salary(dec("1750.00"));
        inputs.meal_voucher_employee_share = dec("96.00");
        inputs.surcharge_reimbursement = dec("5.00");
        inputs.phone_allowance = dec("7.50");

        assert_eq!(calculate_fiscal_gross(&inputs).unwrap(), dec("1750.00"));
    }

    #[test]
    fn test_deductions_exceeding_earnings_are_rejected() {
        let mut inputs = PayrollInputs::from_base_salary(dec("100.00"));
        inputs.paid_leave_deduction_1 = dec("150.00");

        match calculate_fiscal_gross(&inputs) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "fiscal_gross"),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }
}
