//! Result models for a payroll calculation.
//!
//! This module contains the [`PayrollResults`] type and its employee and
//! employer breakdowns. Employer-side fields are rounded to two decimal
//! places at construction; the employee side carries the exact withholding
//! arithmetic (INSS and IRRF are themselves rounded amounts).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayrollInputs;

/// The employee-side view: deductions withheld and the resulting net salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeBreakdown {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// INSS social-security withholding.
    pub inss: Decimal,
    /// IRRF income-tax withholding.
    pub irrf: Decimal,
    /// Transportation voucher discount, capped at 6% of gross.
    pub transportation_voucher_discount: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Net take-home pay (gross minus total deductions).
    pub net_salary: Decimal,
}

/// The employer-side view: direct costs, monthly provisions and the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerBreakdown {
    /// The monthly gross salary.
    pub gross_salary: Decimal,
    /// Monthly FGTS deposit.
    pub fgts: Decimal,
    /// Employer's net transportation voucher cost after the employee discount.
    pub transportation_voucher_cost: Decimal,
    /// Meal voucher cost (daily value times working days).
    pub meal_voucher_cost: Decimal,
    /// Monthly health plan cost.
    pub health_plan_cost: Decimal,
    /// Monthly life insurance cost.
    pub life_insurance_cost: Decimal,
    /// Employer-side INSS quota (20% of gross, regime-gated).
    pub employer_inss: Decimal,
    /// Third-party and accident-risk contributions (regime-gated).
    pub third_party_contributions: Decimal,
    /// Monthly accrual for the 13th salary (1/12 of gross).
    pub thirteenth_salary_provision: Decimal,
    /// Monthly accrual for vacation pay (1/12 of gross).
    pub vacation_provision: Decimal,
    /// Monthly accrual for the constitutional one-third vacation bonus.
    pub vacation_bonus_provision: Decimal,
    /// FGTS due on the provisioned amounts.
    pub fgts_on_provisions: Decimal,
    /// Employer payroll taxes provisioned on the 13th salary.
    pub thirteenth_provision_taxes: Decimal,
    /// Provision for the 40% FGTS severance fine.
    pub fgts_fine_provision: Decimal,
    /// Sum of all monthly provisions.
    pub total_provisions: Decimal,
    /// Total monthly cost of the employee to the employer.
    pub total_cost: Decimal,
}

/// The complete result of a payroll calculation.
///
/// Echoes the inputs for downstream display alongside the employee and
/// employer breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResults {
    /// The inputs this calculation was performed for.
    pub inputs: PayrollInputs,
    /// Employee deductions and net salary.
    pub employee: EmployeeBreakdown,
    /// Employer costs, provisions and total.
    pub employer: EmployerBreakdown,
}
