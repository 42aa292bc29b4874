//! Tax-table types.
//!
//! This module defines the [`TaxBracket`] and [`TaxTables`] structures along
//! with the built-in 2024 tables and table validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One band of a progressive tax table.
///
/// Brackets are ordered ascending by `upper_limit`; a missing limit means the
/// band is unbounded and must be last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper limit of the band; `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<Decimal>,
    /// The rate applied within (INSS) or to the whole base in (IRRF) the band.
    pub rate: Decimal,
    /// Flat amount subtracted after applying the rate (IRRF only).
    #[serde(default)]
    pub flat_deduction: Decimal,
}

/// The complete set of legally defined rates and bracket tables.
///
/// Immutable once constructed; safe for unsynchronized concurrent reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTables {
    /// INSS brackets with marginal-slice semantics.
    pub inss_brackets: Vec<TaxBracket>,
    /// Salary ceiling for INSS; amounts above it are not taxed further.
    pub inss_ceiling: Decimal,
    /// IRRF brackets with mutually-exclusive-band semantics.
    pub irrf_brackets: Vec<TaxBracket>,
    /// IRRF taxable-base reduction per dependent.
    pub deduction_per_dependent: Decimal,
    /// FGTS deposit rate for standard CLT contracts.
    pub fgts_rate_clt: Decimal,
    /// FGTS deposit rate for apprentice contracts.
    pub fgts_rate_apprentice: Decimal,
    /// Cap on the employee transportation discount, as a fraction of gross.
    pub transportation_discount_rate: Decimal,
    /// Employer-side INSS quota rate.
    pub employer_inss_rate: Decimal,
    /// Accident-risk (RAT) contribution rate.
    pub accident_risk_rate: Decimal,
    /// Third-party contributions rate (Sistema S, education levy).
    pub third_party_rate: Decimal,
    /// Fine rate on the accumulated FGTS balance at no-fault termination.
    pub fgts_fine_rate: Decimal,
}

impl TaxTables {
    /// Returns the built-in Brazilian tables effective for 2024.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::TaxTables;
    /// use rust_decimal::Decimal;
    ///
    /// let tables = TaxTables::brazil_2024();
    /// assert_eq!(tables.inss_ceiling, Decimal::new(778602, 2));
    /// assert!(tables.validate().is_ok());
    /// ```
    pub fn brazil_2024() -> Self {
        Self {
            inss_brackets: vec![
                TaxBracket {
                    upper_limit: Some(Decimal::new(141200, 2)),
                    rate: Decimal::new(75, 3),
                    flat_deduction: Decimal::ZERO,
                },
                TaxBracket {
                    upper_limit: Some(Decimal::new(266668, 2)),
                    rate: Decimal::new(9, 2),
                    flat_deduction: Decimal::ZERO,
                },
                TaxBracket {
                    upper_limit: Some(Decimal::new(400003, 2)),
                    rate: Decimal::new(12, 2),
                    flat_deduction: Decimal::ZERO,
                },
                TaxBracket {
                    upper_limit: Some(Decimal::new(778602, 2)),
                    rate: Decimal::new(14, 2),
                    flat_deduction: Decimal::ZERO,
                },
            ],
            inss_ceiling: Decimal::new(778602, 2),
            irrf_brackets: vec![
                TaxBracket {
                    upper_limit: Some(Decimal::new(225920, 2)),
                    rate: Decimal::ZERO,
                    flat_deduction: Decimal::ZERO,
                },
                TaxBracket {
                    upper_limit: Some(Decimal::new(282665, 2)),
                    rate: Decimal::new(75, 3),
                    flat_deduction: Decimal::new(16944, 2),
                },
                TaxBracket {
                    upper_limit: Some(Decimal::new(375105, 2)),
                    rate: Decimal::new(15, 2),
                    flat_deduction: Decimal::new(38144, 2),
                },
                TaxBracket {
                    upper_limit: Some(Decimal::new(466468, 2)),
                    rate: Decimal::new(225, 3),
                    flat_deduction: Decimal::new(66277, 2),
                },
                TaxBracket {
                    upper_limit: None,
                    rate: Decimal::new(275, 3),
                    flat_deduction: Decimal::new(89600, 2),
                },
            ],
            deduction_per_dependent: Decimal::new(18959, 2),
            fgts_rate_clt: Decimal::new(8, 2),
            fgts_rate_apprentice: Decimal::new(2, 2),
            transportation_discount_rate: Decimal::new(6, 2),
            employer_inss_rate: Decimal::new(20, 2),
            accident_risk_rate: Decimal::new(3, 2),
            third_party_rate: Decimal::new(58, 3),
            fgts_fine_rate: Decimal::new(40, 2),
        }
    }

    /// Validates the structural invariants of the tables.
    ///
    /// Checks that both bracket tables are non-empty with strictly ascending
    /// limits, that an unbounded bracket only appears in last position, that
    /// the last IRRF bracket is unbounded, and that every rate lies in
    /// `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        Self::validate_brackets("inss_brackets", &self.inss_brackets)?;
        Self::validate_brackets("irrf_brackets", &self.irrf_brackets)?;

        if self
            .irrf_brackets
            .last()
            .is_some_and(|b| b.upper_limit.is_some())
        {
            return Err(EngineError::InvalidTaxTable {
                message: "last irrf_brackets entry must be unbounded".to_string(),
            });
        }

        if self.inss_ceiling <= Decimal::ZERO {
            return Err(EngineError::InvalidTaxTable {
                message: "inss_ceiling must be positive".to_string(),
            });
        }

        let rates = [
            self.fgts_rate_clt,
            self.fgts_rate_apprentice,
            self.transportation_discount_rate,
            self.employer_inss_rate,
            self.accident_risk_rate,
            self.third_party_rate,
            self.fgts_fine_rate,
        ];
        for rate in rates {
            Self::validate_rate(rate)?;
        }

        Ok(())
    }

    fn validate_brackets(name: &str, brackets: &[TaxBracket]) -> EngineResult<()> {
        if brackets.is_empty() {
            return Err(EngineError::InvalidTaxTable {
                message: format!("{name} must not be empty"),
            });
        }

        let mut previous: Option<Decimal> = None;
        for (index, bracket) in brackets.iter().enumerate() {
            Self::validate_rate(bracket.rate)?;

            match bracket.upper_limit {
                Some(limit) => {
                    if previous.is_some_and(|prev| limit <= prev) {
                        return Err(EngineError::InvalidTaxTable {
                            message: format!("{name} limits must be strictly ascending"),
                        });
                    }
                    previous = Some(limit);
                }
                None => {
                    if index != brackets.len() - 1 {
                        return Err(EngineError::InvalidTaxTable {
                            message: format!(
                                "{name} may only have an unbounded bracket in last position"
                            ),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn validate_rate(rate: Decimal) -> EngineResult<()> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(EngineError::InvalidTaxTable {
                message: format!("rate {rate} is outside [0, 1]"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_brazil_2024_is_valid() {
        assert!(TaxTables::brazil_2024().validate().is_ok());
    }

    #[test]
    fn test_brazil_2024_bracket_values() {
        let tables = TaxTables::brazil_2024();

        assert_eq!(tables.inss_brackets.len(), 4);
        assert_eq!(tables.inss_brackets[0].upper_limit, Some(dec("1412.00")));
        assert_eq!(tables.inss_brackets[0].rate, dec("0.075"));
        assert_eq!(tables.inss_brackets[3].upper_limit, Some(dec("7786.02")));
        assert_eq!(tables.inss_brackets[3].rate, dec("0.14"));

        assert_eq!(tables.irrf_brackets.len(), 5);
        assert_eq!(tables.irrf_brackets[0].upper_limit, Some(dec("2259.20")));
        assert_eq!(tables.irrf_brackets[0].rate, Decimal::ZERO);
        assert_eq!(tables.irrf_brackets[4].upper_limit, None);
        assert_eq!(tables.irrf_brackets[4].flat_deduction, dec("896.00"));

        assert_eq!(tables.deduction_per_dependent, dec("189.59"));
        assert_eq!(tables.fgts_rate_clt, dec("0.08"));
        assert_eq!(tables.fgts_rate_apprentice, dec("0.02"));
    }

    #[test]
    fn test_inss_ceiling_matches_last_bracket_limit() {
        let tables = TaxTables::brazil_2024();
        assert_eq!(
            tables.inss_brackets.last().unwrap().upper_limit,
            Some(tables.inss_ceiling)
        );
    }

    #[test]
    fn test_descending_limits_rejected() {
        let mut tables = TaxTables::brazil_2024();
        tables.inss_brackets.swap(0, 1);

        let result = tables.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("strictly ascending")
        );
    }

    #[test]
    fn test_unbounded_bracket_before_last_rejected() {
        let mut tables = TaxTables::brazil_2024();
        tables.irrf_brackets[1].upper_limit = None;

        let result = tables.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("last position"));
    }

    #[test]
    fn test_bounded_last_irrf_bracket_rejected() {
        let mut tables = TaxTables::brazil_2024();
        tables.irrf_brackets[4].upper_limit = Some(dec("99999.00"));

        let result = tables.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unbounded"));
    }

    #[test]
    fn test_rate_above_one_rejected() {
        let mut tables = TaxTables::brazil_2024();
        tables.employer_inss_rate = dec("1.20");

        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_empty_brackets_rejected() {
        let mut tables = TaxTables::brazil_2024();
        tables.inss_brackets.clear();

        let result = tables.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must not be empty"));
    }

    #[test]
    fn test_bracket_yaml_round_trip() {
        let bracket = TaxBracket {
            upper_limit: Some(dec("1412.00")),
            rate: dec("0.075"),
            flat_deduction: Decimal::ZERO,
        };

        let yaml = serde_yaml::to_string(&bracket).unwrap();
        let back: TaxBracket = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(bracket, back);
    }

    #[test]
    fn test_missing_upper_limit_deserializes_as_unbounded() {
        let yaml = "rate: \"0.275\"\nflat_deduction: \"896.00\"\n";
        let bracket: TaxBracket = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(bracket.upper_limit, None);
        assert_eq!(bracket.flat_deduction, dec("896.00"));
    }
}
