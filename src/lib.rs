//! Pay slip engine for French social contributions
//!
//! This crate computes a single employee's monthly pay slip: it derives the
//! fiscal gross, applies the tiered social contributions keyed to the social
//! security ceiling, and resolves the net social, net before tax and net
//! payable amounts after a flat-rate income tax withholding estimate.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
