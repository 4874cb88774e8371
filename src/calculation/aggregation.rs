//! Aggregation from fiscal gross to net payable.
//!
//! Rounding to the cent happens only in this module, at four points: the
//! employee and employer contribution totals, the withheld tax and the net
//! payable. Line amounts are summed at full precision.

use rust_decimal::Decimal;

use crate::models::{ContributionGroups, ContributionLine, PayrollInputs};

use super::round_to_cents;

/// Share of the fiscal gross used as the income tax withholding base.
///
/// The value is 0.9 (90%).
pub const WITHHOLDING_BASE_SHARE: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

/// The totals derived from the contribution lines and the net-pay inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregation {
    /// Sum of employee amounts, rounded to the cent.
    pub total_employee_contributions: Decimal,
    /// Sum of employer amounts, rounded to the cent.
    pub total_employer_contributions: Decimal,
    /// Fiscal gross minus employee contributions.
    pub net_social: Decimal,
    /// Net social adjusted by meal vouchers, reimbursement and phone allowance.
    pub net_before_tax: Decimal,
    /// Flat-rate withholding estimate, rounded to the cent.
    pub withheld_tax: Decimal,
    /// Net before tax minus withheld tax, rounded to the cent.
    pub net_payable: Decimal,
}

/// Sums the employee amounts of `lines` and rounds the total to the cent.
pub fn total_employee_contributions<'a, I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = &'a ContributionLine>,
{
    round_to_cents(lines.into_iter().map(|l| l.employee_amount()).sum())
}

/// Sums the employer amounts of `lines` and rounds the total to the cent.
pub fn total_employer_contributions<'a, I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = &'a ContributionLine>,
{
    round_to_cents(lines.into_iter().map(|l| l.employer_amount()).sum())
}

/// Returns the fiscal gross minus the (already rounded) employee contributions.
pub fn net_social(fiscal_gross: Decimal, total_employee_contributions: Decimal) -> Decimal {
    fiscal_gross - total_employee_contributions
}

/// Returns the net before income tax.
pub fn net_before_tax(
    net_social: Decimal,
    meal_voucher_employee_share: Decimal,
    surcharge_reimbursement: Decimal,
    phone_allowance: Decimal,
) -> Decimal {
    net_social - meal_voucher_employee_share + surcharge_reimbursement + phone_allowance
}

/// Returns the flat-rate income tax withheld at source, rounded to the cent.
///
/// The rate applies to 90% of the fiscal gross. This is an estimate, not a
/// progressive computation.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::withheld_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// // 1756.22 x 0.9 x 8.9% = 140.673222
/// assert_eq!(withheld_tax(dec("1756.22"), dec("0.089")), dec("140.67"));
/// ```
pub fn withheld_tax(fiscal_gross: Decimal, income_tax_rate: Decimal) -> Decimal {
    round_to_cents(fiscal_gross * WITHHOLDING_BASE_SHARE * income_tax_rate)
}

/// Returns the amount paid to the employee, rounded to the cent.
pub fn net_payable(net_before_tax: Decimal, withheld_tax: Decimal) -> Decimal {
    round_to_cents(net_before_tax - withheld_tax)
}

/// Runs the whole aggregation chain over every line of `contributions`.
pub fn aggregate(
    fiscal_gross: Decimal,
    contributions: &ContributionGroups,
    inputs: &PayrollInputs,
    income_tax_rate: Decimal,
) -> Aggregation {
    let employee_total = total_employee_contributions(contributions.lines());
    let employer_total = total_employer_contributions(contributions.lines());
    let social = net_social(fiscal_gross, employee_total);
    let before_tax = net_before_tax(
        social,
        inputs.meal_voucher_employee_share,
        inputs.surcharge_reimbursement,
        inputs.phone_allowance,
    );
    let tax = withheld_tax(fiscal_gross, income_tax_rate);

    Aggregation {
        total_employee_contributions: employee_total,
        total_employer_contributions: employer_total,
        net_social: social,
        net_before_tax: before_tax,
        withheld_tax: tax,
        net_payable: net_payable(before_tax, tax),
    }
}
