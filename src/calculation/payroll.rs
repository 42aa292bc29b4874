//! Payroll calculation entry point.
//!
//! Composes the three stages: employee deductions, employer direct costs and
//! employer provisions. The function is pure and side-effect-free; a call
//! receives its own input record and returns its own output record.

use crate::config::TaxTables;
use crate::models::{EmployeeBreakdown, EmployerBreakdown, PayrollInputs, PayrollResults};

use super::{
    calculate_direct_costs, calculate_inss, calculate_irrf, calculate_provisions, round_currency,
    split_transportation,
};

/// Calculates the complete payroll breakdown for one month.
///
/// Inputs are expected pre-clamped to non-negative values by the caller;
/// there is no error path. Monetary output fields are rounded to two decimal
/// places independently, while the totals are summed from the unrounded
/// intermediates and rounded once at construction, so cent-level results
/// match a payslip built field by field.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::TaxTables;
/// use payroll_engine::models::PayrollInputs;
/// use rust_decimal::Decimal;
///
/// let tables = TaxTables::brazil_2024();
/// let inputs = PayrollInputs {
///     gross_salary: Decimal::new(300000, 2),
///     ..PayrollInputs::default()
/// };
///
/// let results = calculate_payroll(&inputs, &tables);
/// assert_eq!(results.employee.inss, Decimal::new(25882, 2));
/// assert_eq!(
///     results.employee.net_salary,
///     results.employee.gross_salary - results.employee.total_deductions
/// );
/// ```
pub fn calculate_payroll(inputs: &PayrollInputs, tables: &TaxTables) -> PayrollResults {
    let gross_salary = inputs.gross_salary;

    // Stage 1: employee deductions.
    let inss = calculate_inss(gross_salary, tables);
    let irrf = calculate_irrf(gross_salary, inss, inputs.dependents, tables);
    let transportation = split_transportation(
        gross_salary,
        inputs.transportation_voucher_value,
        inputs.working_days,
        inputs.has_transportation_voucher,
        tables,
    );
    let total_deductions = inss + irrf + transportation.employee_discount;
    let net_salary = gross_salary - total_deductions;

    // Stage 2: employer direct costs.
    let direct = calculate_direct_costs(inputs, tables);

    // Stage 3: monthly provisions, using stage 2's FGTS deposit.
    let provisions = calculate_provisions(inputs, direct.fgts, tables);

    let total_direct_costs = gross_salary
        + direct.fgts
        + transportation.employer_cost
        + direct.meal_voucher
        + direct.health_plan
        + direct.life_insurance
        + direct.employer_inss
        + direct.third_party;
    let total_cost = total_direct_costs + provisions.total;

    PayrollResults {
        inputs: inputs.clone(),
        employee: EmployeeBreakdown {
            gross_salary,
            inss,
            irrf,
            transportation_voucher_discount: transportation.employee_discount,
            total_deductions,
            net_salary,
        },
        employer: EmployerBreakdown {
            gross_salary,
            fgts: round_currency(direct.fgts),
            transportation_voucher_cost: round_currency(transportation.employer_cost),
            meal_voucher_cost: round_currency(direct.meal_voucher),
            health_plan_cost: round_currency(direct.health_plan),
            life_insurance_cost: round_currency(direct.life_insurance),
            employer_inss: round_currency(direct.employer_inss),
            third_party_contributions: round_currency(direct.third_party),
            thirteenth_salary_provision: round_currency(provisions.thirteenth_salary),
            vacation_provision: round_currency(provisions.vacation),
            vacation_bonus_provision: round_currency(provisions.vacation_bonus),
            fgts_on_provisions: round_currency(provisions.fgts_on_provisions),
            thirteenth_provision_taxes: round_currency(provisions.thirteenth_taxes),
            fgts_fine_provision: round_currency(provisions.fgts_fine),
            total_provisions: round_currency(provisions.total),
            total_cost: round_currency(total_cost),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractType, TaxRegime};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tables() -> TaxTables {
        TaxTables::brazil_2024()
    }

    /// The what-if scenario the simulator opens with: gross 3000, CLT,
    /// Simples, 22 working days, transportation at 8.80/day, meal at
    /// 25.00/day, all provisioning on.
    fn default_scenario() -> PayrollInputs {
        PayrollInputs {
            gross_salary: dec("3000.00"),
            dependents: 0,
            working_days: 22,
            has_transportation_voucher: true,
            transportation_voucher_value: dec("8.80"),
            has_meal_voucher: true,
            meal_voucher_value: dec("25.00"),
            include_thirteenth: true,
            include_vacation: true,
            include_fgts_fine: true,
            ..PayrollInputs::default()
        }
    }

    #[test]
    fn test_default_scenario_employee_side() {
        let results = calculate_payroll(&default_scenario(), &tables());
        let employee = &results.employee;

        assert_eq!(employee.inss, dec("258.82"));
        assert_eq!(employee.irrf, dec("36.15"));
        assert_eq!(employee.transportation_voucher_discount, dec("180.00"));
        assert_eq!(employee.total_deductions, dec("474.97"));
        assert_eq!(employee.net_salary, dec("2525.03"));
    }

    #[test]
    fn test_default_scenario_employer_side() {
        let results = calculate_payroll(&default_scenario(), &tables());
        let employer = &results.employer;

        assert_eq!(employer.fgts, dec("240.00"));
        assert_eq!(employer.transportation_voucher_cost, dec("13.60"));
        assert_eq!(employer.meal_voucher_cost, dec("550.00"));
        assert_eq!(employer.employer_inss, dec("0.00"));
        assert_eq!(employer.third_party_contributions, dec("0.00"));
        assert_eq!(employer.thirteenth_salary_provision, dec("250.00"));
        assert_eq!(employer.vacation_provision, dec("250.00"));
        assert_eq!(employer.vacation_bonus_provision, dec("83.33"));
        assert_eq!(employer.fgts_on_provisions, dec("46.67"));
        assert_eq!(employer.thirteenth_provision_taxes, dec("0.00"));
        assert_eq!(employer.fgts_fine_provision, dec("114.67"));
        assert_eq!(employer.total_provisions, dec("744.67"));
        assert_eq!(employer.total_cost, dec("4548.27"));
    }

    #[test]
    fn test_net_salary_identity_across_inputs() {
        let scenarios = [
            default_scenario(),
            PayrollInputs {
                gross_salary: dec("1412.00"),
                ..PayrollInputs::default()
            },
            PayrollInputs {
                gross_salary: dec("10000.00"),
                dependents: 3,
                tax_regime: TaxRegime::PresumidoReal,
                ..default_scenario()
            },
            PayrollInputs {
                gross_salary: dec("800.00"),
                contract_type: ContractType::Apprentice,
                ..default_scenario()
            },
        ];

        for inputs in scenarios {
            let results = calculate_payroll(&inputs, &tables());
            let employee = &results.employee;
            assert_eq!(
                employee.net_salary,
                employee.gross_salary - employee.total_deductions
            );
            assert_eq!(
                employee.total_deductions,
                employee.inss + employee.irrf + employee.transportation_voucher_discount
            );
        }
    }

    #[test]
    fn test_apprentice_uses_reduced_fgts_everywhere() {
        let inputs = PayrollInputs {
            contract_type: ContractType::Apprentice,
            ..default_scenario()
        };
        let results = calculate_payroll(&inputs, &tables());

        assert_eq!(results.employer.fgts, dec("60.00"));
        assert_eq!(results.employer.fgts_on_provisions, dec("11.67"));
    }

    #[test]
    fn test_simples_regime_zeroes_all_employer_taxes() {
        let inputs = PayrollInputs {
            gross_salary: dec("8000.00"),
            include_thirteenth: true,
            ..PayrollInputs::default()
        };
        let results = calculate_payroll(&inputs, &tables());

        assert_eq!(results.employer.employer_inss, Decimal::ZERO);
        assert_eq!(results.employer.third_party_contributions, Decimal::ZERO);
        assert_eq!(results.employer.thirteenth_provision_taxes, Decimal::ZERO);
    }

    #[test]
    fn test_presumido_real_adds_employer_taxes() {
        let inputs = PayrollInputs {
            tax_regime: TaxRegime::PresumidoReal,
            ..default_scenario()
        };
        let results = calculate_payroll(&inputs, &tables());

        assert_eq!(results.employer.employer_inss, dec("600.00"));
        assert_eq!(results.employer.third_party_contributions, dec("264.00"));
        assert_eq!(results.employer.thirteenth_provision_taxes, dec("72.00"));
    }

    #[test]
    fn test_zero_salary_produces_zero_costs() {
        let inputs = PayrollInputs::default();
        let results = calculate_payroll(&inputs, &tables());

        assert_eq!(results.employee.net_salary, Decimal::ZERO);
        assert_eq!(results.employer.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_total_cost_identity() {
        let results = calculate_payroll(&default_scenario(), &tables());
        let employer = &results.employer;

        let direct = employer.gross_salary
            + employer.fgts
            + employer.transportation_voucher_cost
            + employer.meal_voucher_cost
            + employer.health_plan_cost
            + employer.life_insurance_cost
            + employer.employer_inss
            + employer.third_party_contributions;

        // Rounded fields can drift from the rounded total by under a cent.
        let drift = (employer.total_cost - (direct + employer.total_provisions)).abs();
        assert!(drift <= dec("0.01"), "drift was {drift}");
    }

    #[test]
    fn test_results_echo_inputs() {
        let inputs = default_scenario();
        let results = calculate_payroll(&inputs, &tables());
        assert_eq!(results.inputs, inputs);
    }

    #[test]
    fn test_health_and_life_flow_into_total() {
        let bare = calculate_payroll(&default_scenario(), &tables());
        let inputs = PayrollInputs {
            has_health_plan: true,
            health_plan_cost: dec("350.00"),
            has_life_insurance: true,
            life_insurance_cost: dec("45.00"),
            ..default_scenario()
        };
        let results = calculate_payroll(&inputs, &tables());

        assert_eq!(results.employer.health_plan_cost, dec("350.00"));
        assert_eq!(results.employer.life_insurance_cost, dec("45.00"));
        assert_eq!(
            results.employer.total_cost,
            bare.employer.total_cost + dec("395.00")
        );
    }
}
