//! Contribution line models.
//!
//! This module defines the [`ContributionCode`] identifiers shared with the
//! rate table and the [`ContributionLine`] produced by every calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies a social contribution on the pay slip.
///
/// The snake_case name is the key used in rate table files and in JSON output.
///
/// # Example
///
/// ```
/// use payslip_engine::models::ContributionCode;
///
/// let code = ContributionCode::ComplementaryHealthT1;
/// assert_eq!(code.as_str(), "complementary_health_t1");
/// assert_eq!(code.label(), "Complémentaire Santé Tranche 1");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContributionCode {
    /// Complementary health insurance on tranche 1.
    ComplementaryHealthT1,
    /// Complementary health insurance on tranche 2.
    ComplementaryHealthT2,
    /// Fixed complementary health surcharge.
    HealthSurcharge,
    /// Incapacity and invalidity insurance on tranche 1.
    IncapacityInvalidityT1,
    /// Incapacity and invalidity insurance on tranche 2.
    IncapacityInvalidityT2,
    /// Long-term dependency care on tranche 1.
    DependencyT1,
    /// Basic pension, capped at the ceiling.
    CappedBasicPension,
    /// Basic pension on the whole fiscal gross.
    UncappedBasicPension,
    /// Complementary pension on tranche 1.
    ComplementaryPensionT1,
    /// Complementary pension on tranche 2.
    ComplementaryPensionT2,
    /// Family allowance contribution.
    FamilyAllowance,
    /// Unemployment insurance.
    UnemploymentInsurance,
    /// Executive association (APEC) contribution.
    ExecutiveAssociation,
    /// Deductible generalized social contribution.
    CsgDeductible,
    /// Non-deductible CSG and CRDS.
    CsgCrdsNonDeductible,
}

impl ContributionCode {
    /// Returns the identifier used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComplementaryHealthT1 => "complementary_health_t1",
            Self::ComplementaryHealthT2 => "complementary_health_t2",
            Self::HealthSurcharge => "health_surcharge",
            Self::IncapacityInvalidityT1 => "incapacity_invalidity_t1",
            Self::IncapacityInvalidityT2 => "incapacity_invalidity_t2",
            Self::DependencyT1 => "dependency_t1",
            Self::CappedBasicPension => "capped_basic_pension",
            Self::UncappedBasicPension => "uncapped_basic_pension",
            Self::ComplementaryPensionT1 => "complementary_pension_t1",
            Self::ComplementaryPensionT2 => "complementary_pension_t2",
            Self::FamilyAllowance => "family_allowance",
            Self::UnemploymentInsurance => "unemployment_insurance",
            Self::ExecutiveAssociation => "executive_association",
            Self::CsgDeductible => "csg_deductible",
            Self::CsgCrdsNonDeductible => "csg_crds_non_deductible",
        }
    }

    /// Returns the conventional pay slip label for this contribution.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ComplementaryHealthT1 => "Complémentaire Santé Tranche 1",
            Self::ComplementaryHealthT2 => "Complémentaire Santé Tranche 2",
            Self::HealthSurcharge => "Complémentaire Santé Surcplt",
            Self::IncapacityInvalidityT1 => "Incapacité Invalidité Tranche 1",
            Self::IncapacityInvalidityT2 => "Incapacité Invalidité Tranche 2",
            Self::DependencyT1 => "Dépendance Tranche 1",
            Self::CappedBasicPension => "Retraite SS Plafonnée",
            Self::UncappedBasicPension => "Retraite SS Déplafonnée",
            Self::ComplementaryPensionT1 => "Retraite Complémentaire Tranche 1",
            Self::ComplementaryPensionT2 => "Retraite Complémentaire Tranche 2",
            Self::FamilyAllowance => "Cotisation Famille",
            Self::UnemploymentInsurance => "Assurance Chômage",
            Self::ExecutiveAssociation => "Cotisation APEC",
            Self::CsgDeductible => "CSG Déductible",
            Self::CsgCrdsNonDeductible => "CSG/CRDS Non Déductible",
        }
    }
}

/// How the amounts of a contribution line were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineBasis {
    /// Amounts are `rate * base` for each party with a rate.
    Rated {
        /// The base the rates were applied to.
        base: Decimal,
    },
    /// A flat employee amount that does not derive from any rate.
    FixedAmount,
}

/// A single contribution on the pay slip.
///
/// Fields are private so that the only way to obtain a line is through
/// [`ContributionLine::rated`] or [`ContributionLine::fixed`], which keep
/// amounts consistent with rates: a party without a rate on a rated line
/// always pays exactly zero. Amounts are never rounded here.
///
/// # Example
///
/// ```
/// use payslip_engine::models::{ContributionCode, ContributionLine};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = ContributionLine::rated(
///     ContributionCode::FamilyAllowance,
///     Decimal::from_str("2000.00").unwrap(),
///     None,
///     Some(Decimal::from_str("0.0345").unwrap()),
/// );
/// assert_eq!(line.employee_amount(), Decimal::ZERO);
/// assert_eq!(line.employer_amount(), Decimal::from_str("69.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionLine {
    code: ContributionCode,
    name: String,
    basis: LineBasis,
    employee_rate: Option<Decimal>,
    employer_rate: Option<Decimal>,
    employee_amount: Decimal,
    employer_amount: Decimal,
}

impl ContributionLine {
    /// Creates a line whose amounts are each party's rate applied to `base`.
    pub fn rated(
        code: ContributionCode,
        base: Decimal,
        employee_rate: Option<Decimal>,
        employer_rate: Option<Decimal>,
    ) -> Self {
        let share = |rate: Option<Decimal>| rate.map_or(Decimal::ZERO, |r| r * base);

        Self {
            code,
            name: code.label().to_string(),
            basis: LineBasis::Rated { base },
            employee_rate,
            employer_rate,
            employee_amount: share(employee_rate),
            employer_amount: share(employer_rate),
        }
    }

    /// Creates a line carrying a flat employee amount and no rates.
    pub fn fixed(code: ContributionCode, employee_amount: Decimal) -> Self {
        Self {
            code,
            name: code.label().to_string(),
            basis: LineBasis::FixedAmount,
            employee_rate: None,
            employer_rate: None,
            employee_amount,
            employer_amount: Decimal::ZERO,
        }
    }

    /// Returns the contribution identifier.
    pub fn code(&self) -> ContributionCode {
        self.code
    }

    /// Returns the pay slip label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns how the amounts were obtained.
    pub fn basis(&self) -> LineBasis {
        self.basis
    }

    /// Returns the employee rate, or `None` when not applicable.
    pub fn employee_rate(&self) -> Option<Decimal> {
        self.employee_rate
    }

    /// Returns the employer rate, or `None` when not applicable.
    pub fn employer_rate(&self) -> Option<Decimal> {
        self.employer_rate
    }

    /// Returns the unrounded employee amount.
    pub fn employee_amount(&self) -> Decimal {
        self.employee_amount
    }

    /// Returns the unrounded employer amount.
    pub fn employer_amount(&self) -> Decimal {
        self.employer_amount
    }
}
