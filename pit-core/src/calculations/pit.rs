//! Full personal income tax assessment.
//!
//! An assessment takes one gross monthly salary and produces the employee's
//! mandatory insurance, taxable income, tax and net pay. Because the draft
//! amendment to the PIT law is the question everyone asks about, every
//! assessment carries both rule sets side by side: the same salary under
//! the current tables and under the proposed ones.
//!
//! # Assessment steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Mandatory insurance (BHXH + BHYT + BHTN) comes off gross |
//! | 2    | Personal and dependent deductions come off the remainder |
//! | 3    | What is left, floored at zero, is taxable income |
//! | 4    | The regime's progressive schedule produces tax and breakdown |
//! | 5    | Net pay is gross minus insurance minus tax |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::PitCalculator;
//! use pit_core::models::{Regime, Region};
//!
//! let calculator = PitCalculator::default();
//! let assessment = calculator.assess(dec!(20_000_000), 0, Region::I);
//!
//! assert_eq!(assessment.insurance.total, dec!(2_100_000));
//! assert_eq!(assessment.current.taxable, dec!(6_900_000));
//! assert_eq!(assessment.current.tax, dec!(440_000));
//! assert_eq!(assessment.current.net, dec!(17_460_000));
//! assert_eq!(assessment.regime(Regime::Proposed).tax, dec!(120_000));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{clamp_non_negative, round_vnd};
use crate::calculations::insurance::InsuranceCalculator;
use crate::calculations::progressive::ProgressiveSchedule;
use crate::models::{PitAssessment, PolicyError, Regime, RegimeAssessment, Region, TaxPolicy};

/// Calculator for complete monthly PIT assessments.
///
/// Owns its [`TaxPolicy`]; [`PitCalculator::new`] validates the policy once
/// so the assessment methods never fail.
#[derive(Debug, Clone)]
pub struct PitCalculator {
    policy: TaxPolicy,
}

impl PitCalculator {
    /// Creates a calculator from a policy, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] when any rate, cap, deduction or bracket
    /// table is malformed.
    pub fn new(policy: TaxPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &TaxPolicy {
        &self.policy
    }

    /// Assesses one gross monthly salary under both regimes.
    ///
    /// The salary is rounded to whole VND first; negative salaries are
    /// assessed as zero.
    pub fn assess(
        &self,
        gross: Decimal,
        dependents: u32,
        region: Region,
    ) -> PitAssessment {
        let gross = self.normalize_gross(gross);

        // Mandatory insurance comes off the top.
        let insurance = InsuranceCalculator::new(&self.policy).calculate(gross, region);
        let income_after_insurance = gross - insurance.total;

        // Same salary, both rule sets.
        let current = self.assess_regime(Regime::Current, income_after_insurance, dependents);
        let proposed = self.assess_regime(Regime::Proposed, income_after_insurance, dependents);

        PitAssessment {
            gross,
            region,
            dependents,
            insurance,
            income_after_insurance,
            current,
            proposed,
        }
    }

    /// Rounds the input to whole VND and floors negative salaries at zero.
    fn normalize_gross(
        &self,
        gross: Decimal,
    ) -> Decimal {
        if gross < Decimal::ZERO {
            warn!(gross = %gross, "Negative gross salary; assessing as zero");
            return Decimal::ZERO;
        }
        round_vnd(gross)
    }

    /// Applies one regime's deductions and bracket schedule.
    fn assess_regime(
        &self,
        regime: Regime,
        income_after_insurance: Decimal,
        dependents: u32,
    ) -> RegimeAssessment {
        let rules = self.policy.rules(regime);
        let taxable =
            clamp_non_negative(income_after_insurance - rules.total_deduction(dependents));
        let progressive = ProgressiveSchedule::new(&rules.brackets).tax(taxable);
        let net = income_after_insurance - progressive.total;

        RegimeAssessment {
            regime,
            taxable,
            tax: progressive.total,
            net,
            breakdown: progressive.contributions,
        }
    }
}

impl Default for PitCalculator {
    fn default() -> Self {
        Self {
            policy: TaxPolicy::default(),
        }
    }
}
