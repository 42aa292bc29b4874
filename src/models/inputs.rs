//! Input model for a payroll calculation.
//!
//! This module defines the [`PayrollInputs`] record and the contract-type and
//! tax-regime enums that alter FGTS and employer-tax behavior.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the type of CLT employment contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Standard CLT contract (8% FGTS deposits).
    #[default]
    Clt,
    /// Apprentice contract (reduced 2% FGTS deposits).
    Apprentice,
}

/// Represents the employer's tax regime.
///
/// The regime is the single employer-tax switch in the engine: companies in
/// the Simples Nacional regime do not pay the employer-side INSS quota or
/// third-party contributions on payroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    /// Simples Nacional: no employer-side payroll taxes.
    #[default]
    Simples,
    /// Lucro Presumido or Lucro Real: employer INSS and third-party
    /// contributions apply.
    PresumidoReal,
}

/// The full set of inputs for one payroll calculation.
///
/// One record per calculation; the engine never mutates it. Disabled benefits
/// contribute zero cost regardless of their stored value.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ContractType, PayrollInputs, TaxRegime};
/// use rust_decimal::Decimal;
///
/// let inputs = PayrollInputs {
///     gross_salary: Decimal::new(300000, 2),
///     ..PayrollInputs::default()
/// };
/// assert_eq!(inputs.contract_type, ContractType::Clt);
/// assert_eq!(inputs.tax_regime, TaxRegime::Simples);
/// assert!(!inputs.employer_taxes_apply());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInputs {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// The type of employment contract.
    pub contract_type: ContractType,
    /// The employer's tax regime.
    pub tax_regime: TaxRegime,
    /// Number of dependents for IRRF purposes.
    pub dependents: u32,
    /// Working days per month, used for daily benefit values.
    pub working_days: u32,
    /// Whether the transportation voucher benefit is granted.
    pub has_transportation_voucher: bool,
    /// Daily transportation voucher value.
    pub transportation_voucher_value: Decimal,
    /// Whether the meal voucher benefit is granted.
    pub has_meal_voucher: bool,
    /// Daily meal voucher value.
    pub meal_voucher_value: Decimal,
    /// Whether a health plan is provided.
    pub has_health_plan: bool,
    /// Monthly health plan cost.
    pub health_plan_cost: Decimal,
    /// Whether life insurance is provided.
    pub has_life_insurance: bool,
    /// Monthly life insurance cost.
    pub life_insurance_cost: Decimal,
    /// Whether to provision the 13th salary monthly.
    pub include_thirteenth: bool,
    /// Whether to provision vacation pay and its one-third bonus monthly.
    pub include_vacation: bool,
    /// Whether to provision the 40% FGTS severance fine monthly.
    pub include_fgts_fine: bool,
}

impl PayrollInputs {
    /// Returns true if employer-side payroll taxes apply under the regime.
    pub fn employer_taxes_apply(&self) -> bool {
        self.tax_regime == TaxRegime::PresumidoReal
    }
}

impl Default for PayrollInputs {
    fn default() -> Self {
        Self {
            gross_salary: Decimal::ZERO,
            contract_type: ContractType::default(),
            tax_regime: TaxRegime::default(),
            dependents: 0,
            working_days: 22,
            has_transportation_voucher: false,
            transportation_voucher_value: Decimal::ZERO,
            has_meal_voucher: false,
            meal_voucher_value: Decimal::ZERO,
            has_health_plan: false,
            health_plan_cost: Decimal::ZERO,
            has_life_insurance: false,
            life_insurance_cost: Decimal::ZERO,
            include_thirteenth: false,
            include_vacation: false,
            include_fgts_fine: false,
        }
    }
}
