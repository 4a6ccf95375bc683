use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Regime, Region};

/// Employee-side mandatory insurance amounts for one gross salary.
///
/// Each fund amount is rounded to whole VND, and `total` is the exact sum
/// of the three rounded amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceBreakdown {
    pub bhxh: Decimal,
    pub bhyt: Decimal,
    pub bhtn: Decimal,
    pub total: Decimal,
}

impl InsuranceBreakdown {
    pub fn zero() -> Self {
        Self {
            bhxh: Decimal::ZERO,
            bhyt: Decimal::ZERO,
            bhtn: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// The slice of taxable income that fell inside one bracket, and its tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    pub rate: Decimal,
    pub amount: Decimal,
    pub tax: Decimal,
}

/// One regime's view of an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeAssessment {
    pub regime: Regime,
    /// Income after insurance and deductions, floored at zero.
    pub taxable: Decimal,
    pub tax: Decimal,
    pub net: Decimal,
    /// Per-bracket slices; empty when nothing is taxable. The slice taxes
    /// sum exactly to `tax`.
    pub breakdown: Vec<BracketContribution>,
}

/// Everything the engine computes for one gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitAssessment {
    pub gross: Decimal,
    pub region: Region,
    pub dependents: u32,
    pub insurance: InsuranceBreakdown,
    pub income_after_insurance: Decimal,
    pub current: RegimeAssessment,
    pub proposed: RegimeAssessment,
}

impl PitAssessment {
    pub fn regime(&self, regime: Regime) -> &RegimeAssessment {
        match regime {
            Regime::Current => &self.current,
            Regime::Proposed => &self.proposed,
        }
    }
}
