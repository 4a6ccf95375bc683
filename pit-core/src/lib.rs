pub mod calculations;
pub mod models;

pub use calculations::{GrossUpError, GrossUpSolver, InsuranceCalculator, PitCalculator};
pub use models::*;
