//! Calculation logic for the payroll engine.
//!
//! This module contains the three calculation stages: employee deductions
//! (INSS, IRRF, transportation voucher discount), employer direct costs
//! (FGTS, benefits, regime-gated payroll taxes) and employer monthly
//! provisions, plus the entry point composing them.

mod direct_costs;
mod inss;
mod irrf;
mod payroll;
mod provisions;
mod transportation;

pub use direct_costs::{DirectCosts, calculate_direct_costs, fgts_rate};
pub use inss::calculate_inss;
pub use irrf::calculate_irrf;
pub use payroll::calculate_payroll;
pub use provisions::{Provisions, calculate_provisions};
pub use transportation::{TransportationSplit, split_transportation};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places, half away from zero.
///
/// Every output field is rounded independently at the point it is computed;
/// totals are summed from unrounded intermediates and rounded once at field
/// construction.
pub(crate) fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
