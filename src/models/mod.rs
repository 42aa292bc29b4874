//! Data models for the payroll engine.
//!
//! This module contains the input record describing a simulated employment
//! contract and the result record breaking down employee deductions and
//! employer costs.

mod inputs;
mod results;

pub use inputs::{ContractType, PayrollInputs, TaxRegime};
pub use results::{EmployeeBreakdown, EmployerBreakdown, PayrollResults};
