//! Common utility functions for PIT calculations.
//!
//! This module provides shared functionality used across the insurance,
//! bracket, and gross-up calculations, including rounding and clamping.

use rust_decimal::Decimal;

/// Rounds a decimal value to whole VND using half-up rounding.
///
/// All published amounts in this engine are whole đồng. Values at exactly
/// 0.5 are rounded away from zero.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to zero decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::round_vnd;
///
/// assert_eq!(round_vnd(dec!(1234.4)), dec!(1234));
/// assert_eq!(round_vnd(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_vnd(dec!(-1234.5)), dec!(-1235)); // Away from zero
/// ```
pub fn round_vnd(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a decimal value to zero when it is negative.
///
/// Income components in this engine never go below zero; subtractions that
/// would (deductions larger than income, for example) are floored here.
///
/// # Arguments
///
/// * `value` - The decimal value to clamp
///
/// # Returns
///
/// `value` when non-negative, otherwise zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use pit_core::calculations::common::clamp_non_negative;
///
/// assert_eq!(clamp_non_negative(dec!(100)), dec!(100));
/// assert_eq!(clamp_non_negative(dec!(-100)), Decimal::ZERO);
/// ```
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO {
        Decimal::ZERO
    } else {
        value
    }
}
