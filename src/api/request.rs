//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Only the gross salary is required; every other field defaults
//! to the values the simulator form starts with. The conversion into
//! [`PayrollInputs`] owns the non-negativity clamping, keeping the
//! calculation core clamp-free.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ContractType, PayrollInputs, TaxRegime};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// The type of employment contract (defaults to CLT).
    #[serde(default)]
    pub contract_type: ContractType,
    /// The employer's tax regime (defaults to Simples Nacional).
    #[serde(default)]
    pub tax_regime: TaxRegime,
    /// Number of dependents for IRRF purposes.
    #[serde(default)]
    pub dependents: u32,
    /// Working days per month (defaults to 22).
    #[serde(default = "default_working_days")]
    pub working_days: u32,
    /// Whether the transportation voucher benefit is granted.
    #[serde(default)]
    pub has_transportation_voucher: bool,
    /// Daily transportation voucher value.
    #[serde(default)]
    pub transportation_voucher_value: Decimal,
    /// Whether the meal voucher benefit is granted.
    #[serde(default)]
    pub has_meal_voucher: bool,
    /// Daily meal voucher value.
    #[serde(default)]
    pub meal_voucher_value: Decimal,
    /// Whether a health plan is provided.
    #[serde(default)]
    pub has_health_plan: bool,
    /// Monthly health plan cost.
    #[serde(default)]
    pub health_plan_cost: Decimal,
    /// Whether life insurance is provided.
    #[serde(default)]
    pub has_life_insurance: bool,
    /// Monthly life insurance cost.
    #[serde(default)]
    pub life_insurance_cost: Decimal,
    /// Whether to provision the 13th salary monthly.
    #[serde(default)]
    pub include_thirteenth: bool,
    /// Whether to provision vacation pay and its one-third bonus monthly.
    #[serde(default)]
    pub include_vacation: bool,
    /// Whether to provision the 40% FGTS severance fine monthly.
    #[serde(default)]
    pub include_fgts_fine: bool,
}

fn default_working_days() -> u32 {
    22
}

fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

impl From<PayrollRequest> for PayrollInputs {
    fn from(req: PayrollRequest) -> Self {
        PayrollInputs {
            gross_salary: clamp_non_negative(req.gross_salary),
            contract_type: req.contract_type,
            tax_regime: req.tax_regime,
            dependents: req.dependents,
            working_days: req.working_days,
            has_transportation_voucher: req.has_transportation_voucher,
            transportation_voucher_value: clamp_non_negative(req.transportation_voucher_value),
            has_meal_voucher: req.has_meal_voucher,
            meal_voucher_value: clamp_non_negative(req.meal_voucher_value),
            has_health_plan: req.has_health_plan,
            health_plan_cost: clamp_non_negative(req.health_plan_cost),
            has_life_insurance: req.has_life_insurance,
            life_insurance_cost: clamp_non_negative(req.life_insurance_cost),
            include_thirteenth: req.include_thirteenth,
            include_vacation: req.include_vacation,
            include_fgts_fine: req.include_fgts_fine,
        }
    }
}
