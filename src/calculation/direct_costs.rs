//! Employer direct monthly costs.
//!
//! This module computes the FGTS deposit, the pass-through benefit costs and
//! the regime-gated employer payroll taxes. The transportation voucher is
//! split separately; see [`super::split_transportation`].

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::models::{ContractType, PayrollInputs};

/// Returns the FGTS deposit rate for a contract type.
///
/// Apprentice contracts deposit 2% instead of the standard 8%.
pub fn fgts_rate(contract_type: ContractType, tables: &TaxTables) -> Decimal {
    match contract_type {
        ContractType::Clt => tables.fgts_rate_clt,
        ContractType::Apprentice => tables.fgts_rate_apprentice,
    }
}

/// Employer direct monthly costs, before provisions.
///
/// Values are unrounded; rounding happens at result construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectCosts {
    /// Monthly FGTS deposit on the gross salary.
    pub fgts: Decimal,
    /// Meal voucher cost (daily value times working days when enabled).
    pub meal_voucher: Decimal,
    /// Health plan cost (flat monthly value when enabled).
    pub health_plan: Decimal,
    /// Life insurance cost (flat monthly value when enabled).
    pub life_insurance: Decimal,
    /// Employer-side INSS quota; zero unless the regime levies payroll taxes.
    pub employer_inss: Decimal,
    /// Third-party plus accident-risk contributions; regime-gated like
    /// `employer_inss`.
    pub third_party: Decimal,
}

/// Computes the employer's direct monthly costs.
pub fn calculate_direct_costs(inputs: &PayrollInputs, tables: &TaxTables) -> DirectCosts {
    let gross_salary = inputs.gross_salary;
    let fgts = gross_salary * fgts_rate(inputs.contract_type, tables);

    let working_days = Decimal::from(inputs.working_days);
    let meal_voucher = if inputs.has_meal_voucher {
        inputs.meal_voucher_value * working_days
    } else {
        Decimal::ZERO
    };
    let health_plan = if inputs.has_health_plan {
        inputs.health_plan_cost
    } else {
        Decimal::ZERO
    };
    let life_insurance = if inputs.has_life_insurance {
        inputs.life_insurance_cost
    } else {
        Decimal::ZERO
    };

    let (employer_inss, third_party) = if inputs.employer_taxes_apply() {
        (
            gross_salary * tables.employer_inss_rate,
            gross_salary * (tables.accident_risk_rate + tables.third_party_rate),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    DirectCosts {
        fgts,
        meal_voucher,
        health_plan,
        life_insurance,
        employer_inss,
        third_party,
    }
}
