//! Calculation logic for the pay slip engine.
//!
//! This module contains the contribution pipeline: fiscal gross derivation,
//! tranche resolution against the social security ceiling, the health,
//! retirement, miscellaneous and CSG/CRDS contribution calculators, and the
//! aggregation from fiscal gross down to net payable.

mod aggregation;
mod brackets;
mod csg_crds;
mod fiscal_gross;
mod health;
mod lines;
mod miscellaneous;
mod payslip;
mod retirement;
mod rounding;

pub use aggregation::{
    Aggregation, WITHHOLDING_BASE_SHARE, aggregate, net_before_tax, net_payable, net_social,
    total_employee_contributions, total_employer_contributions, withheld_tax,
};
pub use brackets::{BracketBases, resolve_brackets};
pub use csg_crds::{calculate_csg_crds, csg_crds_base};
pub use fiscal_gross::calculate_fiscal_gross;
pub use health::calculate_health_contributions;
pub use miscellaneous::calculate_miscellaneous_contributions;
pub use payslip::compute_payslip;
pub use retirement::calculate_retirement_contributions;
pub use rounding::{CENT_DECIMAL_PLACES, round_to_cents};
