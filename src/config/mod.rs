//! Configuration loading and management for the pay slip engine.
//!
//! This module provides the rate table and statutory constants of a payroll
//! year, and functionality to load them from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payslip_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fr2024").unwrap().into_config();
//! println!("Loaded rates: {}", config.year().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    PartyRates, PayrollConfig, RateEntrySpec, RateSpec, RateTable, RatesFile,
    StatutoryConstants, YearFile, YearMetadata,
};
