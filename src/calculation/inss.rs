//! INSS withholding calculation.
//!
//! This module computes the employee's progressive social-security
//! withholding over the configured bracket table.

use rust_decimal::Decimal;

use crate::config::TaxTables;

use super::round_currency;

/// Computes the INSS withholding for a gross salary.
///
/// The salary is clamped to the table ceiling, then each bracket taxes only
/// the slice of salary above the previous bracket's limit and at or below its
/// own limit, at its own rate (marginal-bracket semantics). The result is
/// rounded to two decimal places.
///
/// There is no error path: out-of-range values are clamped, not rejected.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_inss;
/// use payroll_engine::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let tables = TaxTables::brazil_2024();
/// let inss = calculate_inss(Decimal::new(141200, 2), &tables);
/// assert_eq!(inss, Decimal::new(10590, 2));
/// ```
pub fn calculate_inss(gross_salary: Decimal, tables: &TaxTables) -> Decimal {
    let capped_salary = gross_salary.min(tables.inss_ceiling);

    let mut inss = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for bracket in &tables.inss_brackets {
        let limit = bracket.upper_limit.unwrap_or(Decimal::MAX);
        let taxable_slice = capped_salary.min(limit) - previous_limit;
        if taxable_slice > Decimal::ZERO {
            inss += taxable_slice * bracket.rate;
        }
        previous_limit = limit;
        if capped_salary <= limit {
            break;
        }
    }

    round_currency(inss)
}
