//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a payroll year
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ContributionCode;

use super::types::{PartyRates, PayrollConfig, RateTable, RatesFile, YearFile, YearMetadata};

/// Loads and provides access to a payroll year configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/fr2024/
/// ├── year.yaml    # Year metadata and statutory constants
/// └── rates.yaml   # Contribution rate table
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
/// use payslip_engine::models::ContributionCode;
///
/// let loader = ConfigLoader::load("./config/fr2024").unwrap();
/// println!("Ceiling: {}", loader.config().ceiling());
///
/// let rates = loader.rate(ContributionCode::CappedBasicPension).unwrap();
/// println!("Employee rate: {:?}", rates.employee);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or unknown contribution codes (`ConfigParseError`)
    /// - A rate or statutory constant is out of range (`InvalidRate`, `InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let year_path = path.join("year.yaml");
        let year = Self::load_yaml::<YearFile>(&year_path)?;

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<RatesFile>(&rates_path)?;

        let loader = Self::from_files(year, rates)?;
        debug!(
            path = %path.display(),
            year = %loader.config.year().code,
            contributions = loader.config.rates().len(),
            "Loaded payroll configuration"
        );
        Ok(loader)
    }

    /// Builds configuration from the contents of `year.yaml` and `rates.yaml`.
    pub fn from_yaml_str(year_yaml: &str, rates_yaml: &str) -> EngineResult<Self> {
        let year = Self::parse_yaml::<YearFile>(year_yaml, "year.yaml")?;
        let rates = Self::parse_yaml::<RatesFile>(rates_yaml, "rates.yaml")?;
        Self::from_files(year, rates)
    }

    fn from_files(year: YearFile, rates: RatesFile) -> EngineResult<Self> {
        let table = RateTable::from_specs(&rates.contributions, year.constants.ceiling)?;
        let config = PayrollConfig::new(year.year, year.constants, table)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }

    /// Returns the year metadata.
    pub fn year(&self) -> &YearMetadata {
        self.config.year()
    }

    /// Gets the rates of a contribution by its code.
    pub fn rate(&self, code: ContributionCode) -> EngineResult<PartyRates> {
        self.config.rates().get(code)
    }
}
