//! Transportation voucher cost split.
//!
//! The employee funds the voucher up to a legally capped discount (6% of
//! gross salary); the employer carries the remainder.

use rust_decimal::Decimal;

use crate::config::TaxTables;

/// The split of the transportation voucher cost between employee and employer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportationSplit {
    /// Full voucher cost: daily value times working days.
    pub total_cost: Decimal,
    /// Employee discount, capped at the configured fraction of gross salary.
    pub employee_discount: Decimal,
    /// Employer's net cost after the employee discount. Never negative,
    /// since the discount is capped at or below the total cost.
    pub employer_cost: Decimal,
}

impl TransportationSplit {
    fn zero() -> Self {
        Self {
            total_cost: Decimal::ZERO,
            employee_discount: Decimal::ZERO,
            employer_cost: Decimal::ZERO,
        }
    }
}

/// Splits the transportation voucher cost for one month.
///
/// When the benefit is disabled the split is all zeros regardless of the
/// stored daily value.
pub fn split_transportation(
    gross_salary: Decimal,
    daily_value: Decimal,
    working_days: u32,
    enabled: bool,
    tables: &TaxTables,
) -> TransportationSplit {
    if !enabled {
        return TransportationSplit::zero();
    }

    let total_cost = daily_value * Decimal::from(working_days);
    let discount_cap = gross_salary * tables.transportation_discount_rate;
    let employee_discount = total_cost.min(discount_cap);
    let employer_cost = if total_cost > Decimal::ZERO {
        total_cost - employee_discount
    } else {
        Decimal::ZERO
    };

    TransportationSplit {
        total_cost,
        employee_discount,
        employer_cost,
    }
}
