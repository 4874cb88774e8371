//! Core data models for the pay slip engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contribution;
mod inputs;
mod payslip;

pub use contribution::{ContributionCode, ContributionLine, LineBasis};
pub use inputs::{
    MAX_MONTHLY_AMOUNT, MONTHS_PER_YEAR, PaidLeave, PayrollInputs, meal_voucher_share,
};
pub use payslip::{ContributionGroup, ContributionGroups, PayrollResult};
