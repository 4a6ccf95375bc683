//! Mandatory insurance contribution calculations.
//!
//! Employees contribute to three funds out of gross salary: social
//! insurance (BHXH), health insurance (BHYT) and unemployment insurance
//! (BHTN). BHXH and BHYT share one fixed contribution ceiling; the BHTN
//! base is instead capped at a multiple of the regional minimum wage, which
//! is why every calculation needs a wage region.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::InsuranceCalculator;
//! use pit_core::models::{Region, TaxPolicy};
//!
//! let policy = TaxPolicy::default();
//! let calculator = InsuranceCalculator::new(&policy);
//! let breakdown = calculator.calculate(dec!(20_000_000), Region::I);
//!
//! assert_eq!(breakdown.bhxh, dec!(1_600_000));
//! assert_eq!(breakdown.bhyt, dec!(300_000));
//! assert_eq!(breakdown.bhtn, dec!(200_000));
//! assert_eq!(breakdown.total, dec!(2_100_000));
//! ```

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::round_vnd;
use crate::models::{InsuranceBreakdown, Region, TaxPolicy};

/// Calculator for employee-side mandatory insurance contributions.
///
/// Borrows a validated [`TaxPolicy`]; each fund amount is rounded to whole
/// VND before the total is formed, so the reported total always equals the
/// sum of the reported parts.
#[derive(Debug, Clone)]
pub struct InsuranceCalculator<'a> {
    policy: &'a TaxPolicy,
}

impl<'a> InsuranceCalculator<'a> {
    pub fn new(policy: &'a TaxPolicy) -> Self {
        Self { policy }
    }

    /// Calculates the three fund contributions for one monthly gross salary.
    ///
    /// Negative gross salaries are treated as zero; a zero salary owes no
    /// contributions.
    pub fn calculate(
        &self,
        gross: Decimal,
        region: Region,
    ) -> InsuranceBreakdown {
        if gross < Decimal::ZERO {
            warn!(
                gross = %gross,
                "Negative gross salary; no insurance contributions are due"
            );
            return InsuranceBreakdown::zero();
        }

        let insurance = &self.policy.insurance;
        let bhxh = self.fund_contribution(gross, insurance.bhxh_bhyt_cap, insurance.bhxh_rate);
        let bhyt = self.fund_contribution(gross, insurance.bhxh_bhyt_cap, insurance.bhyt_rate);
        let bhtn = self.fund_contribution(gross, self.bhtn_cap(region), insurance.bhtn_rate);

        InsuranceBreakdown {
            bhxh,
            bhyt,
            bhtn,
            total: bhxh + bhyt + bhtn,
        }
    }

    /// Contribution for one fund: the rate applied to the capped base.
    fn fund_contribution(
        &self,
        gross: Decimal,
        cap: Decimal,
        rate: Decimal,
    ) -> Decimal {
        round_vnd(gross.min(cap) * rate)
    }

    /// BHTN contribution ceiling for the region.
    fn bhtn_cap(
        &self,
        region: Region,
    ) -> Decimal {
        self.policy.insurance.bhtn_cap_multiplier * self.policy.minimum_wages.for_region(region)
    }
}
