//! Payroll input model.
//!
//! This module defines [`PayrollInputs`], the caller-supplied monetary
//! scalars for one employee and one monthly period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of pay periods in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Largest monthly amount accepted in any input field: one billion euros.
///
/// Keeps every sum and rate product of the pipeline far inside the range
/// of `Decimal`.
pub const MAX_MONTHLY_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// The monetary inputs for one employee's monthly pay slip.
///
/// Every field is an amount in euros. Optional adjustments default to zero
/// when deserialized, only `base_salary` is required.
///
/// # Example
///
/// ```
/// use payslip_engine::models::PayrollInputs;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = PayrollInputs::from_base_salary(Decimal::from_str("1750.00").unwrap());
/// assert!(inputs.validate().is_ok());
/// assert_eq!(inputs.phone_allowance, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInputs {
    /// The monthly gross base salary.
    pub base_salary: Decimal,
    /// Complementary health surcharge benefit added to the gross.
    #[serde(default)]
    pub health_surcharge_allowance: Decimal,
    /// First paid-leave deduction.
    #[serde(default)]
    pub paid_leave_deduction_1: Decimal,
    /// Second paid-leave deduction.
    #[serde(default)]
    pub paid_leave_deduction_2: Decimal,
    /// Paid-leave indemnity.
    #[serde(default)]
    pub paid_leave_indemnity: Decimal,
    /// Tenth-of-leave complement adjustment.
    #[serde(default)]
    pub tenth_bonus_adjustment: Decimal,
    /// Employee share of meal vouchers, withheld from net pay.
    #[serde(default)]
    pub meal_voucher_employee_share: Decimal,
    /// Reimbursement of the health surcharge, added to net pay.
    #[serde(default)]
    pub surcharge_reimbursement: Decimal,
    /// Phone allowance, added to net pay.
    #[serde(default)]
    pub phone_allowance: Decimal,
}

impl PayrollInputs {
    /// Creates inputs with the given monthly base salary and every other amount at zero.
    pub fn from_base_salary(base_salary: Decimal) -> Self {
        Self {
            base_salary,
            health_surcharge_allowance: Decimal::ZERO,
            paid_leave_deduction_1: Decimal::ZERO,
            paid_leave_deduction_2: Decimal::ZERO,
            paid_leave_indemnity: Decimal::ZERO,
            tenth_bonus_adjustment: Decimal::ZERO,
            meal_voucher_employee_share: Decimal::ZERO,
            surcharge_reimbursement: Decimal::ZERO,
            phone_allowance: Decimal::ZERO,
        }
    }

    /// Creates inputs from an annual gross salary paid over twelve months.
    ///
    /// ```
    /// use payslip_engine::models::PayrollInputs;
    /// use rust_decimal::Decimal;
    ///
    /// let inputs = PayrollInputs::from_annual_salary(Decimal::from(21000));
    /// assert_eq!(inputs.base_salary, Decimal::from(1750));
    /// ```
    pub fn from_annual_salary(annual_salary: Decimal) -> Self {
        Self::from_base_salary(annual_salary / Decimal::from(MONTHS_PER_YEAR))
    }

    /// Replaces the three paid-leave amounts with those derived from `leave`.
    pub fn with_paid_leave(mut self, leave: &PaidLeave) -> Self {
        self.paid_leave_deduction_1 = leave.first_deduction();
        self.paid_leave_deduction_2 = leave.second_deduction();
        self.paid_leave_indemnity = leave.indemnity();
        self
    }

    /// Returns every monetary field paired with its name, in declaration order.
    pub fn named_amounts(&self) -> [(&'static str, Decimal); 9] {
        [
            ("base_salary", self.base_salary),
            ("health_surcharge_allowance", self.health_surcharge_allowance),
            ("paid_leave_deduction_1", self.paid_leave_deduction_1),
            ("paid_leave_deduction_2", self.paid_leave_deduction_2),
            ("paid_leave_indemnity", self.paid_leave_indemnity),
            ("tenth_bonus_adjustment", self.tenth_bonus_adjustment),
            ("meal_voucher_employee_share", self.meal_voucher_employee_share),
            ("surcharge_reimbursement", self.surcharge_reimbursement),
            ("phone_allowance", self.phone_allowance),
        ]
    }

    /// Rejects the inputs if any amount is negative or above
    /// [`MAX_MONTHLY_AMOUNT`].
    ///
    /// The first offending field is reported; amounts are never clamped.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, amount) in self.named_amounts() {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not be negative (got {})", amount),
                });
            }
            if amount > MAX_MONTHLY_AMOUNT {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not exceed {} (got {})", MAX_MONTHLY_AMOUNT, amount),
                });
            }
        }
        Ok(())
    }
}

/// Paid leave taken in the period, expressed in days of a daily leave value.
///
/// The two deductions remove the salary for the days off and the indemnity
/// pays the leave back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidLeave {
    /// Value of one day of paid leave.
    pub daily_value: Decimal,
    /// Days withheld by the first deduction.
    pub first_deduction_days: Decimal,
    /// Days withheld by the second deduction.
    pub second_deduction_days: Decimal,
    /// Days paid back as indemnity.
    pub indemnity_days: Decimal,
}

impl PaidLeave {
    /// Returns the first deduction amount.
    pub fn first_deduction(&self) -> Decimal {
        self.daily_value * self.first_deduction_days
    }

    /// Returns the second deduction amount.
    pub fn second_deduction(&self) -> Decimal {
        self.daily_value * self.second_deduction_days
    }

    /// Returns the indemnity amount.
    pub fn indemnity(&self) -> Decimal {
        self.daily_value * self.indemnity_days
    }
}

/// Returns the employee share withheld for `vouchers` meal vouchers.
pub fn meal_voucher_share(vouchers: u32, employee_share_per_voucher: Decimal) -> Decimal {
    Decimal::from(vouchers) * employee_share_per_voucher
}
