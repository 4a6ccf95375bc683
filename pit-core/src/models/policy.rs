use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Regime, Region, TaxBracket};

/// Statutory monthly minimum wage per region, in VND.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalWages {
    pub region_i: Decimal,
    pub region_ii: Decimal,
    pub region_iii: Decimal,
    pub region_iv: Decimal,
}

impl RegionalWages {
    pub fn for_region(&self, region: Region) -> Decimal {
        match region {
            Region::I => self.region_i,
            Region::II => self.region_ii,
            Region::III => self.region_iii,
            Region::IV => self.region_iv,
        }
    }

    fn validate(&self) -> Result<(), PolicyError> {
        for region in Region::all() {
            let wage = self.for_region(*region);
            if wage <= Decimal::ZERO {
                return Err(PolicyError::NonPositiveMinimumWage {
                    region: *region,
                    wage,
                });
            }
        }
        Ok(())
    }
}

/// Employee-side mandatory insurance rates and contribution caps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceConfig {
    pub bhxh_rate: Decimal,
    pub bhyt_rate: Decimal,
    pub bhtn_rate: Decimal,
    /// Shared salary ceiling for the BHXH and BHYT contribution base.
    pub bhxh_bhyt_cap: Decimal,
    /// The BHTN base is capped at this multiple of the regional minimum wage.
    pub bhtn_cap_multiplier: Decimal,
}

impl InsuranceConfig {
    fn validate(&self) -> Result<(), PolicyError> {
        for (fund, rate) in [
            ("BHXH", self.bhxh_rate),
            ("BHYT", self.bhyt_rate),
            ("BHTN", self.bhtn_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(PolicyError::RateOutOfRange { fund, rate });
            }
        }
        if self.bhxh_bhyt_cap <= Decimal::ZERO {
            return Err(PolicyError::NonPositiveContributionCap(self.bhxh_bhyt_cap));
        }
        if self.bhtn_cap_multiplier <= Decimal::ZERO {
            return Err(PolicyError::NonPositiveCapMultiplier(
                self.bhtn_cap_multiplier,
            ));
        }
        Ok(())
    }
}

/// Deductions and bracket schedule for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeRules {
    /// Monthly deduction every taxpayer receives.
    pub personal_deduction: Decimal,
    /// Additional monthly deduction per registered dependent.
    pub dependent_deduction: Decimal,
    pub brackets: Vec<TaxBracket>,
}

impl RegimeRules {
    pub fn total_deduction(&self, dependents: u32) -> Decimal {
        self.personal_deduction + self.dependent_deduction * Decimal::from(dependents)
    }

    fn validate(&self, regime: Regime) -> Result<(), PolicyError> {
        for amount in [self.personal_deduction, self.dependent_deduction] {
            if amount < Decimal::ZERO {
                return Err(PolicyError::NegativeDeduction { regime, amount });
            }
        }
        if self.brackets.is_empty() {
            return Err(PolicyError::EmptyBracketTable { regime });
        }
        let last = self.brackets.len() - 1;
        let mut previous_upper = Decimal::ZERO;
        let mut previous_rate: Option<Decimal> = None;
        for (position, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(PolicyError::BracketRateOutOfRange {
                    regime,
                    position,
                    rate: bracket.rate,
                });
            }
            if let Some(previous) = previous_rate {
                if bracket.rate <= previous {
                    return Err(PolicyError::NonIncreasingBracketRate { regime, position });
                }
            }
            previous_rate = Some(bracket.rate);
            match bracket.upper_bound {
                Some(upper) => {
                    if position == last {
                        return Err(PolicyError::BoundedTopBracket { regime });
                    }
                    if upper <= previous_upper {
                        return Err(PolicyError::UnorderedBracket { regime, position });
                    }
                    previous_upper = upper;
                }
                None => {
                    if position != last {
                        return Err(PolicyError::UnboundedBracketNotLast { regime, position });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Every statutory parameter the engine needs for one point in time.
///
/// [`TaxPolicy::default`] carries the figures in force since the July 2024
/// minimum wage decree, with the draft amendment tables alongside them so a
/// single assessment can show both regimes. The rates and brackets are kept
/// as data rather than code so a future schedule only needs a new policy
/// value, not a new engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// First day the figures are in force.
    pub effective_from: NaiveDate,
    pub minimum_wages: RegionalWages,
    pub insurance: InsuranceConfig,
    pub current: RegimeRules,
    pub proposed: RegimeRules,
}

impl TaxPolicy {
    pub fn rules(&self, regime: Regime) -> &RegimeRules {
        match regime {
            Regime::Current => &self.current,
            Regime::Proposed => &self.proposed,
        }
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        self.minimum_wages.validate()?;
        self.insurance.validate()?;
        self.current.validate(Regime::Current)?;
        self.proposed.validate(Regime::Proposed)?;
        Ok(())
    }
}

/// First day the default figures apply.
const EFFECTIVE_FROM: NaiveDate = match NaiveDate::from_ymd_opt(2024, 7, 1) {
    Some(date) => date,
    None => panic!("invalid statutory effective date"),
};

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            effective_from: EFFECTIVE_FROM,
            minimum_wages: RegionalWages {
                region_i: dec!(4_960_000),
                region_ii: dec!(4_410_000),
                region_iii: dec!(3_860_000),
                region_iv: dec!(3_450_000),
            },
            insurance: InsuranceConfig {
                bhxh_rate: dec!(0.08),
                bhyt_rate: dec!(0.015),
                bhtn_rate: dec!(0.01),
                bhxh_bhyt_cap: dec!(46_800_000),
                bhtn_cap_multiplier: dec!(20),
            },
            current: RegimeRules {
                personal_deduction: dec!(11_000_000),
                dependent_deduction: dec!(4_400_000),
                brackets: vec![
                    TaxBracket::bounded(dec!(5_000_000), dec!(0.05)),
                    TaxBracket::bounded(dec!(10_000_000), dec!(0.10)),
                    TaxBracket::bounded(dec!(18_000_000), dec!(0.15)),
                    TaxBracket::bounded(dec!(32_000_000), dec!(0.20)),
                    TaxBracket::bounded(dec!(52_000_000), dec!(0.25)),
                    TaxBracket::bounded(dec!(80_000_000), dec!(0.30)),
                    TaxBracket::unbounded(dec!(0.35)),
                ],
            },
            proposed: RegimeRules {
                personal_deduction: dec!(15_500_000),
                dependent_deduction: dec!(6_200_000),
                brackets: vec![
                    TaxBracket::bounded(dec!(10_000_000), dec!(0.05)),
                    TaxBracket::bounded(dec!(30_000_000), dec!(0.15)),
                    TaxBracket::bounded(dec!(60_000_000), dec!(0.25)),
                    TaxBracket::bounded(dec!(100_000_000), dec!(0.30)),
                    TaxBracket::unbounded(dec!(0.35)),
                ],
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("Minimum wage for region {region} must be positive, got {wage}")]
    NonPositiveMinimumWage { region: Region, wage: Decimal },
    #[error("{fund} contribution rate must be between 0 and 1, got {rate}")]
    RateOutOfRange { fund: &'static str, rate: Decimal },
    #[error("BHXH/BHYT contribution cap must be positive, got {0}")]
    NonPositiveContributionCap(Decimal),
    #[error("BHTN cap multiplier must be positive, got {0}")]
    NonPositiveCapMultiplier(Decimal),
    #[error("Deduction for the {regime} regime must not be negative, got {amount}")]
    NegativeDeduction { regime: Regime, amount: Decimal },
    #[error("Bracket table for the {regime} regime is empty")]
    EmptyBracketTable { regime: Regime },
    #[error("Bracket {position} of the {regime} regime has rate {rate} outside 0..=1")]
    BracketRateOutOfRange {
        regime: Regime,
        position: usize,
        rate: Decimal,
    },
    #[error("Bracket {position} of the {regime} regime does not raise the rate of the bracket before it")]
    NonIncreasingBracketRate { regime: Regime, position: usize },
    #[error("Bracket {position} of the {regime} regime does not extend the previous upper bound")]
    UnorderedBracket { regime: Regime, position: usize },
    #[error("Bracket {position} of the {regime} regime is unbounded but not last")]
    UnboundedBracketNotLast { regime: Regime, position: usize },
    #[error("Top bracket of the {regime} regime must be unbounded")]
    BoundedTopBracket { regime: Regime },
}
