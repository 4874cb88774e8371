//! Pay slip result models.
//!
//! This module contains the [`PayrollResult`] type handed to report renderers,
//! and the ordered [`ContributionGroups`] it carries.

use rust_decimal::Decimal;
use serde::Serialize;

use super::ContributionLine;

/// The four contribution sections of a pay slip, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionGroup {
    /// Health, incapacity and dependency insurance.
    Health,
    /// Basic and complementary pensions.
    Retirement,
    /// Family, unemployment and executive association contributions.
    Miscellaneous,
    /// Generalized social contributions.
    CsgCrds,
}

impl ContributionGroup {
    /// All groups in pay slip order.
    pub const ALL: [ContributionGroup; 4] = [
        ContributionGroup::Health,
        ContributionGroup::Retirement,
        ContributionGroup::Miscellaneous,
        ContributionGroup::CsgCrds,
    ];

    /// Returns the section title used on pay slips.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Health => "Cotisations Santé",
            Self::Retirement => "Cotisations Retraite",
            Self::Miscellaneous => "Autres Cotisations",
            Self::CsgCrds => "CSG/CRDS",
        }
    }
}

/// The contribution lines of a pay slip, one ordered list per group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionGroups {
    /// Health contributions.
    pub health: Vec<ContributionLine>,
    /// Retirement contributions.
    pub retirement: Vec<ContributionLine>,
    /// Miscellaneous contributions.
    pub miscellaneous: Vec<ContributionLine>,
    /// CSG/CRDS contributions.
    pub csg_crds: Vec<ContributionLine>,
}

impl ContributionGroups {
    /// Returns the lines of one group.
    pub fn group(&self, group: ContributionGroup) -> &[ContributionLine] {
        match group {
            ContributionGroup::Health => &self.health,
            ContributionGroup::Retirement => &self.retirement,
            ContributionGroup::Miscellaneous => &self.miscellaneous,
            ContributionGroup::CsgCrds => &self.csg_crds,
        }
    }

    /// Iterates over the groups in pay slip order.
    pub fn iter(&self) -> impl Iterator<Item = (ContributionGroup, &[ContributionLine])> {
        ContributionGroup::ALL
            .into_iter()
            .map(move |group| (group, self.group(group)))
    }

    /// Iterates over every line, group by group.
    pub fn lines(&self) -> impl Iterator<Item = &ContributionLine> {
        self.iter().flat_map(|(_, lines)| lines.iter())
    }
}

/// The complete result of a pay slip computation.
///
/// Produced once per computation and never modified afterwards. Monetary
/// totals are rounded to the cent; individual line amounts are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollResult {
    /// Gross amount subject to contributions, rounded to the cent.
    pub fiscal_gross: Decimal,
    /// All contribution lines, grouped.
    pub contributions: ContributionGroups,
    /// Sum of employee amounts, rounded to the cent.
    pub total_employee_contributions: Decimal,
    /// Sum of employer amounts, rounded to the cent.
    pub total_employer_contributions: Decimal,
    /// Fiscal gross minus employee contributions.
    pub net_social: Decimal,
    /// Meal voucher share withheld from net pay.
    pub meal_voucher_employee_share: Decimal,
    /// Health surcharge reimbursement added to net pay.
    pub surcharge_reimbursement: Decimal,
    /// Phone allowance added to net pay.
    pub phone_allowance: Decimal,
    /// Net amount before income tax.
    pub net_before_tax: Decimal,
    /// Flat income tax rate used for the withholding estimate.
    pub withheld_tax_rate: Decimal,
    /// Income tax withheld at source, rounded to the cent.
    pub withheld_tax: Decimal,
    /// Amount paid to the employee, rounded to the cent.
    pub net_payable: Decimal,
}
