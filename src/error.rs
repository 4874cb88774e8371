//! Error types for the pay slip engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that stops a pay slip from being produced.

use thiserror::Error;

/// The main error type for the pay slip engine.
///
/// A computation either returns a complete pay slip or one of these errors;
/// there is no partial result.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::MissingRate {
///     contribution: "family_allowance".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Rate table has no entry for contribution 'family_allowance'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A contribution required by a calculator is absent from the rate table.
    #[error("Rate table has no entry for contribution '{contribution}'")]
    MissingRate {
        /// The identifier of the missing contribution.
        contribution: String,
    },

    /// A rate in the table is outside the accepted range.
    #[error("Invalid rate for contribution '{contribution}': {message}")]
    InvalidRate {
        /// The identifier of the offending contribution.
        contribution: String,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// A statutory constant of the payroll year is outside its accepted range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A payroll input was rejected before entering the pipeline.
    #[error("Invalid payroll input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
