//! IRRF withholding calculation.
//!
//! This module computes the employee's income-tax withholding. Unlike INSS,
//! the IRRF table is a set of mutually exclusive bands: the whole taxable
//! base is taxed at a single band's rate minus that band's flat deduction.

use rust_decimal::Decimal;

use crate::config::TaxTables;

use super::round_currency;

/// Computes the IRRF withholding.
///
/// The taxable base is the gross salary minus the INSS withholding and a
/// fixed deduction per dependent. A base inside the first band (the 0-rate
/// exemption band) pays nothing; otherwise the first band whose limit covers
/// the base applies, with `base x rate - flat_deduction` clamped to zero and
/// rounded to two decimal places.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_irrf;
/// use payroll_engine::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let tables = TaxTables::brazil_2024();
/// // Base of 3000.00 falls in the 15% band: 3000 x 0.15 - 381.44
/// let irrf = calculate_irrf(Decimal::new(300000, 2), Decimal::ZERO, 0, &tables);
/// assert_eq!(irrf, Decimal::new(6856, 2));
/// ```
pub fn calculate_irrf(
    gross_salary: Decimal,
    inss: Decimal,
    dependents: u32,
    tables: &TaxTables,
) -> Decimal {
    let dependent_deduction = Decimal::from(dependents) * tables.deduction_per_dependent;
    let taxable_base = gross_salary - inss - dependent_deduction;

    let Some(exemption_band) = tables.irrf_brackets.first() else {
        return Decimal::ZERO;
    };
    if taxable_base <= exemption_band.upper_limit.unwrap_or(Decimal::MAX) {
        return Decimal::ZERO;
    }

    let mut irrf = Decimal::ZERO;
    for bracket in &tables.irrf_brackets {
        if bracket
            .upper_limit
            .map_or(true, |limit| taxable_base <= limit)
        {
            irrf = taxable_base * bracket.rate - bracket.flat_deduction;
            break;
        }
    }

    round_currency(irrf.max(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tables() -> TaxTables {
        TaxTables::brazil_2024()
    }

    #[test]
    fn test_base_within_exemption_band_pays_nothing() {
        assert_eq!(
            calculate_irrf(dec("2259.20"), Decimal::ZERO, 0, &tables()),
            Decimal::ZERO
        );
        assert_eq!(
            calculate_irrf(dec("1500.00"), Decimal::ZERO, 0, &tables()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_base_in_second_band() {
        // 2500 x 7.5% - 169.44
        assert_eq!(
            calculate_irrf(dec("2500.00"), Decimal::ZERO, 0, &tables()),
            dec("18.06")
        );
    }

    #[test]
    fn test_base_in_third_band() {
        // 3000 x 15% - 381.44
        assert_eq!(
            calculate_irrf(dec("3000.00"), Decimal::ZERO, 0, &tables()),
            dec("68.56")
        );
    }

    #[test]
    fn test_base_in_fourth_band() {
        // 4000 x 22.5% - 662.77
        assert_eq!(
            calculate_irrf(dec("4000.00"), Decimal::ZERO, 0, &tables()),
            dec("237.23")
        );
    }

    #[test]
    fn test_base_in_top_band() {
        // 5000 x 27.5% - 896.00
        assert_eq!(
            calculate_irrf(dec("5000.00"), Decimal::ZERO, 0, &tables()),
            dec("479.00")
        );
    }

    #[test]
    fn test_inss_reduces_taxable_base() {
        // 3000 - 258.82 = 2741.18, second band: x 7.5% - 169.44 = 36.1485
        assert_eq!(
            calculate_irrf(dec("3000.00"), dec("258.82"), 0, &tables()),
            dec("36.15")
        );
    }

    #[test]
    fn test_dependents_reduce_taxable_base() {
        // 3000 - 258.82 - 2 x 189.59 = 2362.00, second band: x 7.5% - 169.44
        assert_eq!(
            calculate_irrf(dec("3000.00"), dec("258.82"), 2, &tables()),
            dec("7.71")
        );
    }

    #[test]
    fn test_dependents_can_push_base_into_exemption() {
        // 2500 - 2 x 189.59 = 2120.82, inside the exemption band
        assert_eq!(
            calculate_irrf(dec("2500.00"), Decimal::ZERO, 2, &tables()),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_result_clamped_near_band_boundary() {
        // Just above the exemption limit the rate-minus-deduction formula
        // yields a fraction of a cent; it must never go negative.
        let irrf = calculate_irrf(dec("2259.21"), Decimal::ZERO, 0, &tables());
        assert_eq!(irrf, Decimal::ZERO);

        for cents in [226000i64, 226500, 227000, 282665] {
            let base = Decimal::new(cents, 2);
            assert!(calculate_irrf(base, Decimal::ZERO, 0, &tables()) >= Decimal::ZERO);
        }
    }
}
