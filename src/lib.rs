//! Payroll cost engine for Brazilian CLT employment contracts.
//!
//! This crate computes the employee's net take-home pay and the employer's
//! total monthly cost from a gross salary, contract type, tax regime and a
//! set of configurable benefits and provisioning options.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
