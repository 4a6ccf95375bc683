//! Calculation modules for Vietnamese personal income tax.
//!
//! This module provides the forward assessment pipeline (insurance, then
//! deductions, then the progressive schedule) and the bisection solver
//! that runs it backwards from a target net salary.

pub mod common;
pub mod gross_up;
pub mod insurance;
pub mod pit;
pub mod progressive;

pub use gross_up::{GrossUpError, GrossUpSolver};
pub use insurance::InsuranceCalculator;
pub use pit::PitCalculator;
pub use progressive::{ProgressiveSchedule, ProgressiveTax};
