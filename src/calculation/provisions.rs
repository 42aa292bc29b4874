//! Employer monthly provisions.
//!
//! Annual-only obligations (13th salary, vacation pay, severance fine) are
//! smoothed into monthly accruals, each independently gated by its toggle.

use rust_decimal::Decimal;

use crate::config::TaxTables;
use crate::models::PayrollInputs;

use super::fgts_rate;

/// Monthly provision amounts.
///
/// Values are unrounded; rounding happens at result construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Provisions {
    /// 13th-salary accrual (1/12 of gross when enabled).
    pub thirteenth_salary: Decimal,
    /// Vacation-pay accrual (1/12 of gross when enabled).
    pub vacation: Decimal,
    /// Constitutional one-third bonus on the vacation accrual.
    pub vacation_bonus: Decimal,
    /// FGTS due on the enabled accruals.
    pub fgts_on_provisions: Decimal,
    /// Employer payroll taxes on the 13th accrual; requires both the
    /// employer-tax regime and the 13th toggle.
    pub thirteenth_taxes: Decimal,
    /// Severance-fine accrual on the total monthly FGTS deposit.
    pub fgts_fine: Decimal,
    /// Sum of all provision amounts.
    pub total: Decimal,
}

/// Computes the monthly provisions.
///
/// `fgts_deposit` is the direct FGTS deposit on the gross salary, needed for
/// the severance-fine base (the fine applies to the whole FGTS balance, so
/// its monthly accrual covers both the direct deposit and the FGTS on
/// provisions).
pub fn calculate_provisions(
    inputs: &PayrollInputs,
    fgts_deposit: Decimal,
    tables: &TaxTables,
) -> Provisions {
    let gross_salary = inputs.gross_salary;
    let months_per_year = Decimal::from(12);

    let thirteenth_salary = if inputs.include_thirteenth {
        gross_salary / months_per_year
    } else {
        Decimal::ZERO
    };
    let vacation = if inputs.include_vacation {
        gross_salary / months_per_year
    } else {
        Decimal::ZERO
    };
    let vacation_bonus = if inputs.include_vacation {
        vacation / Decimal::from(3)
    } else {
        Decimal::ZERO
    };

    let accrual_base = thirteenth_salary + vacation + vacation_bonus;
    let fgts_on_provisions = accrual_base * fgts_rate(inputs.contract_type, tables);

    let thirteenth_taxes = if inputs.employer_taxes_apply() && inputs.include_thirteenth {
        thirteenth_salary
            * (tables.employer_inss_rate + tables.accident_risk_rate + tables.third_party_rate)
    } else {
        Decimal::ZERO
    };

    let fgts_fine = if inputs.include_fgts_fine {
        (fgts_deposit + fgts_on_provisions) * tables.fgts_fine_rate
    } else {
        Decimal::ZERO
    };

    let total = accrual_base + fgts_on_provisions + fgts_fine + thirteenth_taxes;

    Provisions {
        thirteenth_salary,
        vacation,
        vacation_bonus,
        fgts_on_provisions,
        thirteenth_taxes,
        fgts_fine,
        total,
    }
}
