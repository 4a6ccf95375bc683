//! Net-to-gross salary inversion.
//!
//! Offers are often negotiated in take-home terms, so the engine also runs
//! backwards: given a target net pay, find the gross salary behind it. The
//! forward mapping is piecewise (insurance caps, deduction floor, bracket
//! edges) and has no closed form, but net pay never falls when gross
//! grows, so a bisection over the forward assessment converges on the
//! smallest whole-VND gross whose net reaches the target.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::{GrossUpSolver, PitCalculator};
//! use pit_core::models::{Regime, Region};
//!
//! let calculator = PitCalculator::default();
//! let solver = GrossUpSolver::new(&calculator);
//!
//! let gross = solver
//!     .net_to_gross(dec!(15_000_000), 0, Region::I, Regime::Current)
//!     .unwrap();
//!
//! assert_eq!(gross, dec!(16_995_001));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_vnd;
use crate::calculations::pit::PitCalculator;
use crate::models::{Regime, Region};

/// Search ceiling in VND; targets needing more gross than this fail.
const MAX_GROSS_VND: i64 = 1_000_000_000_000_000;

/// First upper-bound candidate in VND, used for small targets.
const INITIAL_UPPER_BOUND_VND: i64 = 10_000_000;

/// Iteration budget; enough halvings to shrink the full search range
/// below 1 VND.
const MAX_ITERATIONS: usize = 64;

/// Errors that can occur while inverting a net salary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrossUpError {
    /// No gross salary within the search ceiling nets the target.
    #[error("no gross salary up to {max_gross} VND nets {target} VND")]
    TargetUnreachable { target: Decimal, max_gross: Decimal },
}

/// Solver that inverts the forward assessment by bisection.
#[derive(Debug, Clone)]
pub struct GrossUpSolver<'a> {
    calculator: &'a PitCalculator,
}

impl<'a> GrossUpSolver<'a> {
    pub fn new(calculator: &'a PitCalculator) -> Self {
        Self { calculator }
    }

    /// Finds the smallest whole-VND gross salary whose net pay reaches
    /// `target_net` under the given regime.
    ///
    /// Non-positive targets need no salary and resolve to zero. For any
    /// reachable whole-VND target the returned gross assesses back to the
    /// target exactly; fractional targets land within 1 VND above.
    ///
    /// # Errors
    ///
    /// Returns [`GrossUpError::TargetUnreachable`] when even the largest
    /// gross the solver considers nets less than the target.
    pub fn net_to_gross(
        &self,
        target_net: Decimal,
        dependents: u32,
        region: Region,
        regime: Regime,
    ) -> Result<Decimal, GrossUpError> {
        if target_net <= Decimal::ZERO {
            warn!(
                target_net = %target_net,
                "Non-positive net target; no salary is required"
            );
            return Ok(Decimal::ZERO);
        }

        let mut hi = self.initial_upper_bound(target_net, dependents, region, regime)?;
        let mut lo = Decimal::ZERO;

        // Invariant: net(lo) < target_net <= net(hi).
        for _ in 0..MAX_ITERATIONS {
            if hi - lo < Decimal::ONE {
                break;
            }
            let mid = (lo + hi) / Decimal::TWO;
            if self.net_at(mid, dependents, region, regime) < target_net {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Ok(round_vnd(hi))
    }

    /// Doubles a candidate gross until its net pay covers the target.
    fn initial_upper_bound(
        &self,
        target_net: Decimal,
        dependents: u32,
        region: Region,
        regime: Regime,
    ) -> Result<Decimal, GrossUpError> {
        let max_gross = Decimal::from(MAX_GROSS_VND);
        let mut hi = target_net.max(Decimal::from(INITIAL_UPPER_BOUND_VND));
        while self.net_at(hi, dependents, region, regime) < target_net {
            hi *= Decimal::TWO;
            if hi > max_gross {
                return Err(GrossUpError::TargetUnreachable {
                    target: target_net,
                    max_gross,
                });
            }
        }
        Ok(hi)
    }

    fn net_at(
        &self,
        gross: Decimal,
        dependents: u32,
        region: Region,
        regime: Regime,
    ) -> Decimal {
        self.calculator
            .assess(gross, dependents, region)
            .regime(regime)
            .net
    }
}
