//! Configuration types for pay slip computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the resolved
//! [`RateTable`] and [`PayrollConfig`] injected into every calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::ContributionCode;

/// Metadata about the payroll year a configuration applies to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct YearMetadata {
    /// Short identifier of the configuration (e.g., "fr2024").
    pub code: String,
    /// Human-readable name of the rate set.
    pub name: String,
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
}

/// The statutory amounts of a payroll year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatutoryConstants {
    /// Monthly social security ceiling (PMSS).
    pub ceiling: Decimal,
    /// Flat income tax rate used for the withholding estimate.
    pub income_tax_rate: Decimal,
}

/// Year configuration file structure (`year.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct YearFile {
    /// Year metadata.
    pub year: YearMetadata,
    /// Statutory constants.
    pub constants: StatutoryConstants,
}

/// A rate as written in a rate table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RateSpec {
    /// A plain fraction, e.g. `"0.0175"` for 1.75%.
    Fraction(Decimal),
    /// A percentage of the ceiling, stored as `percent / ceiling / 100`.
    ///
    /// Applied to the ceiling, such a rate yields `percent / 100` in euros.
    PercentOfCeiling {
        /// The percentage before division by the ceiling.
        percent_of_ceiling: Decimal,
    },
}

impl RateSpec {
    /// Resolves the rate to a plain fraction for the given ceiling.
    pub fn resolve(&self, ceiling: Decimal) -> Decimal {
        match self {
            RateSpec::Fraction(rate) => *rate,
            RateSpec::PercentOfCeiling { percent_of_ceiling } => {
                *percent_of_ceiling / ceiling / Decimal::ONE_HUNDRED
            }
        }
    }
}

/// Employee and employer rates of one contribution, as written in a file.
///
/// An omitted or null side means the contribution does not apply to that party.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RateEntrySpec {
    /// The employee rate.
    #[serde(default)]
    pub employee: Option<RateSpec>,
    /// The employer rate.
    #[serde(default)]
    pub employer: Option<RateSpec>,
}

/// Rate table file structure (`rates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RatesFile {
    /// Map of contribution code to its rates.
    pub contributions: BTreeMap<ContributionCode, RateEntrySpec>,
}

/// Resolved rates of one contribution.
///
/// `None` means "not applicable to this party", which is distinct from a
/// rate of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyRates {
    /// The employee rate.
    pub employee: Option<Decimal>,
    /// The employer rate.
    pub employer: Option<Decimal>,
}

impl PartyRates {
    /// Rates that apply to both parties.
    pub fn both(employee: Decimal, employer: Decimal) -> Self {
        Self {
            employee: Some(employee),
            employer: Some(employer),
        }
    }

    /// A rate that applies to the employee only.
    pub fn employee_only(rate: Decimal) -> Self {
        Self {
            employee: Some(rate),
            employer: None,
        }
    }

    /// A rate that applies to the employer only.
    pub fn employer_only(rate: Decimal) -> Self {
        Self {
            employee: None,
            employer: Some(rate),
        }
    }
}

/// An immutable mapping from contribution codes to their rates.
///
/// Every present rate is a fraction in `[0, 1)`. Lookups of a code absent
/// from the table fail with [`EngineError::MissingRate`].
///
/// # Example
///
/// ```
/// use payslip_engine::config::{PartyRates, RateTable};
/// use payslip_engine::models::ContributionCode;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RateTable::new([(
///     ContributionCode::FamilyAllowance,
///     PartyRates::employer_only(Decimal::from_str("0.0345").unwrap()),
/// )])
/// .unwrap();
///
/// assert!(table.get(ContributionCode::FamilyAllowance).is_ok());
/// assert!(table.get(ContributionCode::UnemploymentInsurance).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RateTable {
    rates: BTreeMap<ContributionCode, PartyRates>,
}

impl RateTable {
    /// Builds a table from resolved rates, validating each of them.
    pub fn new<I>(entries: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (ContributionCode, PartyRates)>,
    {
        let rates: BTreeMap<ContributionCode, PartyRates> = entries.into_iter().collect();

        for (code, party_rates) in &rates {
            validate_rate(*code, "employee", party_rates.employee)?;
            validate_rate(*code, "employer", party_rates.employer)?;
        }

        Ok(Self { rates })
    }

    /// Builds a table from file specs, resolving ceiling-relative rates.
    ///
    /// Returns `InvalidConfig` if the ceiling is not positive.
    pub fn from_specs(
        specs: &BTreeMap<ContributionCode, RateEntrySpec>,
        ceiling: Decimal,
    ) -> EngineResult<Self> {
        if ceiling <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "ceiling".to_string(),
                message: format!("must be positive (got {})", ceiling),
            });
        }

        Self::new(specs.iter().map(|(code, spec)| {
            (
                *code,
                PartyRates {
                    employee: spec.employee.map(|r| r.resolve(ceiling)),
                    employer: spec.employer.map(|r| r.resolve(ceiling)),
                },
            )
        }))
    }

    /// Looks up the rates of a contribution.
    pub fn get(&self, code: ContributionCode) -> EngineResult<PartyRates> {
        self.rates
            .get(&code)
            .copied()
            .ok_or_else(|| EngineError::MissingRate {
                contribution: code.as_str().to_string(),
            })
    }

    /// Returns true if the table has an entry for `code`.
    pub fn contains(&self, code: ContributionCode) -> bool {
        self.rates.contains_key(&code)
    }

    /// Returns a copy of the table with `code` set to `rates`.
    pub fn with_rate(&self, code: ContributionCode, rates: PartyRates) -> EngineResult<Self> {
        let mut entries = self.rates.clone();
        entries.insert(code, rates);
        Self::new(entries)
    }

    /// Returns a copy of the table without an entry for `code`.
    pub fn without(&self, code: ContributionCode) -> Self {
        let mut rates = self.rates.clone();
        rates.remove(&code);
        Self { rates }
    }

    /// Iterates over the entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (ContributionCode, PartyRates)> + '_ {
        self.rates.iter().map(|(code, rates)| (*code, *rates))
    }

    /// Returns the number of contributions in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

fn validate_rate(code: ContributionCode, party: &str, rate: Option<Decimal>) -> EngineResult<()> {
    match rate {
        Some(r) if r < Decimal::ZERO || r >= Decimal::ONE => Err(EngineError::InvalidRate {
            contribution: code.as_str().to_string(),
            message: format!("{} rate {} is not in [0, 1)", party, r),
        }),
        _ => Ok(()),
    }
}

/// The complete configuration of a payroll year.
///
/// Immutable once built; calculators receive it by reference, so one
/// configuration can serve any number of concurrent computations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    metadata: YearMetadata,
    constants: StatutoryConstants,
    rates: RateTable,
}

impl PayrollConfig {
    /// Creates a configuration from its component parts.
    ///
    /// Returns `InvalidConfig` if the ceiling is not positive or the income
    /// tax rate is outside `[0, 1)`.
    pub fn new(
        metadata: YearMetadata,
        constants: StatutoryConstants,
        rates: RateTable,
    ) -> EngineResult<Self> {
        if constants.ceiling <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "ceiling".to_string(),
                message: format!("must be positive (got {})", constants.ceiling),
            });
        }
        if constants.income_tax_rate < Decimal::ZERO || constants.income_tax_rate >= Decimal::ONE {
            return Err(EngineError::InvalidConfig {
                field: "income_tax_rate".to_string(),
                message: format!("{} is not in [0, 1)", constants.income_tax_rate),
            });
        }

        Ok(Self {
            metadata,
            constants,
            rates,
        })
    }

    /// Returns the year metadata.
    pub fn year(&self) -> &YearMetadata {
        &self.metadata
    }

    /// Returns the monthly social security ceiling.
    pub fn ceiling(&self) -> Decimal {
        self.constants.ceiling
    }

    /// Returns the flat income tax rate.
    pub fn income_tax_rate(&self) -> Decimal {
        self.constants.income_tax_rate
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns a copy of this configuration using another rate table.
    pub fn with_rates(&self, rates: RateTable) -> Self {
        Self {
            metadata: self.metadata.clone(),
            constants: self.constants.clone(),
            rates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn metadata() -> YearMetadata {
        YearMetadata {
            code: "test".to_string(),
            name: "Test rates".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn constants() -> StatutoryConstants {
        StatutoryConstants {
            ceiling: dec("3864.00"),
            income_tax_rate: dec("0.089"),
        }
    }

    #[test]
    fn test_fraction_spec_resolves_unchanged() {
        assert_eq!(
            RateSpec::Fraction(dec("0.0175")).resolve(dec("3864.00")),
            dec("0.0175")
        );
    }

    #[test]
    fn test_percent_of_ceiling_spec_divides_by_ceiling() {
        let spec = RateSpec::PercentOfCeiling {
            percent_of_ceiling: dec("39.02"),
        };
        let rate = spec.resolve(dec("3864.00"));

        // Applied back to the ceiling it yields 0.3902 euros, up to decimal precision.
        let amount = dec("3864.00") * rate;
        assert!((amount - dec("0.3902")).abs() < dec("0.0000000001"));
    }

    #[test]
    fn test_rate_entry_spec_parses_all_shapes() {
        let yaml = r#"
contributions:
  complementary_health_t1:
    employee: "0.0175"
    employer: ~
  incapacity_invalidity_t1:
    employer:
      percent_of_ceiling: "39.02"
  family_allowance:
    employer: "0.0345"
"#;
        let file: RatesFile = serde_yaml::from_str(yaml).unwrap();

        let health = file.contributions[&ContributionCode::ComplementaryHealthT1];
        assert_eq!(health.employee, Some(RateSpec::Fraction(dec("0.0175"))));
        assert_eq!(health.employer, None);

        let incapacity = file.contributions[&ContributionCode::IncapacityInvalidityT1];
        assert_eq!(incapacity.employee, None);
        assert_eq!(
            incapacity.employer,
            Some(RateSpec::PercentOfCeiling {
                percent_of_ceiling: dec("39.02")
            })
        );

        let family = file.contributions[&ContributionCode::FamilyAllowance];
        assert_eq!(family.employer, Some(RateSpec::Fraction(dec("0.0345"))));
    }

    #[test]
    fn test_from_specs_rejects_zero_ceiling() {
        let mut specs = BTreeMap::new();
        specs.insert(
            ContributionCode::IncapacityInvalidityT1,
            RateEntrySpec {
                employee: None,
                employer: Some(RateSpec::PercentOfCeiling {
                    percent_of_ceiling: dec("39.02"),
                }),
            },
        );

        let result = RateTable::from_specs(&specs, Decimal::ZERO);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_unknown_contribution_code_is_rejected() {
        let yaml = r#"
contributions:
  solidarity_tax:
    employee: "0.01"
"#;
        let result: Result<RatesFile, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_missing_code_returns_missing_rate() {
        let table = RateTable::default();

        match table.get(ContributionCode::CsgDeductible) {
            Err(EngineError::MissingRate { contribution }) => {
                assert_eq!(contribution, "csg_deductible");
            }
            other => panic!("Expected MissingRate error, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_of_one_is_rejected() {
        let result = RateTable::new([(
            ContributionCode::CsgDeductible,
            PartyRates::employee_only(Decimal::ONE),
        )]);

        match result {
            Err(EngineError::InvalidRate {
                contribution,
                message,
            }) => {
                assert_eq!(contribution, "csg_deductible");
                assert!(message.contains("employee"));
            }
            other => panic!("Expected InvalidRate error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let result = RateTable::new([(
            ContributionCode::FamilyAllowance,
            PartyRates::employer_only(dec("-0.01")),
        )]);

        assert!(matches!(result, Err(EngineError::InvalidRate { .. })));
    }

    #[test]
    fn test_with_rate_and_without_leave_source_table_untouched() {
        let table = RateTable::new([(
            ContributionCode::FamilyAllowance,
            PartyRates::employer_only(dec("0.0345")),
        )])
        .unwrap();

        let changed = table
            .with_rate(
                ContributionCode::FamilyAllowance,
                PartyRates::employer_only(dec("0.0525")),
            )
            .unwrap();
        let removed = table.without(ContributionCode::FamilyAllowance);

        assert_eq!(
            table.get(ContributionCode::FamilyAllowance).unwrap().employer,
            Some(dec("0.0345"))
        );
        assert_eq!(
            changed.get(ContributionCode::FamilyAllowance).unwrap().employer,
            Some(dec("0.0525"))
        );
        assert!(removed.is_empty());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_payroll_config_rejects_zero_ceiling() {
        let mut bad = constants();
        bad.ceiling = Decimal::ZERO;

        match PayrollConfig::new(metadata(), bad, RateTable::default()) {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "ceiling"),
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_payroll_config_rejects_income_tax_rate_of_one() {
        let mut bad = constants();
        bad.income_tax_rate = Decimal::ONE;

        match PayrollConfig::new(metadata(), bad, RateTable::default()) {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "income_tax_rate"),
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_payroll_config_accessors() {
        let config = PayrollConfig::new(metadata(), constants(), RateTable::default()).unwrap();

        assert_eq!(config.ceiling(), dec("3864.00"));
        assert_eq!(config.income_tax_rate(), dec("0.089"));
        assert_eq!(config.year().code, "test");
    }
}
