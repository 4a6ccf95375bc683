//! Progressive bracket schedule calculations.
//!
//! Vietnamese PIT is a marginal-rate tax: taxable income is sliced across
//! the brackets of a schedule and each slice is taxed at its bracket's rate.
//! The slice amounts always sum to the taxable income, and the per-slice
//! taxes (each rounded to whole VND) always sum to the reported total, so a
//! rendered breakdown never disagrees with the headline figure.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::calculations::ProgressiveSchedule;
//! use pit_core::models::TaxBracket;
//!
//! let brackets = vec![
//!     TaxBracket::bounded(dec!(5_000_000), dec!(0.05)),
//!     TaxBracket::bounded(dec!(10_000_000), dec!(0.10)),
//!     TaxBracket::unbounded(dec!(0.15)),
//! ];
//!
//! let schedule = ProgressiveSchedule::new(&brackets);
//! let result = schedule.tax(dec!(6_900_000));
//!
//! assert_eq!(result.total, dec!(440_000));
//! assert_eq!(result.contributions.len(), 2);
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_vnd;
use crate::models::{BracketContribution, TaxBracket};

/// Tax produced by one pass over a bracket schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressiveTax {
    pub total: Decimal,
    /// One entry per bracket the income reached, in schedule order.
    pub contributions: Vec<BracketContribution>,
}

impl ProgressiveTax {
    fn zero() -> Self {
        Self {
            total: Decimal::ZERO,
            contributions: Vec::new(),
        }
    }
}

/// Applies a progressive bracket schedule to taxable income.
///
/// The schedule is borrowed from a validated [`TaxPolicy`]: brackets are in
/// ascending order and the last one is unbounded.
///
/// [`TaxPolicy`]: crate::models::TaxPolicy
#[derive(Debug, Clone)]
pub struct ProgressiveSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> ProgressiveSchedule<'a> {
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Slices `taxable` across the brackets and taxes each slice at its
    /// bracket's marginal rate.
    ///
    /// Non-positive taxable income produces zero tax and an empty breakdown.
    /// Brackets the income never reaches are omitted rather than reported
    /// with zero amounts.
    pub fn tax(&self, taxable: Decimal) -> ProgressiveTax {
        if taxable <= Decimal::ZERO {
            return ProgressiveTax::zero();
        }

        let mut contributions = Vec::new();
        let mut total = Decimal::ZERO;
        let mut lower = Decimal::ZERO;
        for bracket in self.brackets {
            let slice_top = bracket
                .upper_bound
                .map_or(taxable, |upper| taxable.min(upper));
            let amount = slice_top - lower;
            if amount <= Decimal::ZERO {
                break;
            }

            let tax = round_vnd(amount * bracket.rate);
            total += tax;
            contributions.push(BracketContribution {
                rate: bracket.rate,
                amount,
                tax,
            });

            match bracket.upper_bound {
                Some(upper) if taxable > upper => lower = upper,
                _ => break,
            }
        }

        ProgressiveTax {
            total,
            contributions,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn seven_bracket_schedule() -> Vec<TaxBracket> {
        vec![
            TaxBracket::bounded(dec!(5_000_000), dec!(0.05)),
            TaxBracket::bounded(dec!(10_000_000), dec!(0.10)),
            TaxBracket::bounded(dec!(18_000_000), dec!(0.15)),
            TaxBracket::bounded(dec!(32_000_000), dec!(0.20)),
            TaxBracket::bounded(dec!(52_000_000), dec!(0.25)),
            TaxBracket::bounded(dec!(80_000_000), dec!(0.30)),
            TaxBracket::unbounded(dec!(0.35)),
        ]
    }

    #[test]
    fn zero_taxable_income_produces_empty_breakdown() {
        let brackets = seven_bracket_schedule();
        let schedule = ProgressiveSchedule::new(&brackets);

        let result = schedule.tax(dec!(0));

        assert_eq!(result.total, dec!(0));
        assert_eq!(result.contributions, vec![]);
    }

    #[test]
    fn negative_taxable_income_produces_empty_breakdown() {
        let brackets = seven_bracket_schedule();
        let schedule = ProgressiveSchedule::new(&brackets);

        let result = schedule.tax(dec!(-1_000_000));

        assert_eq!(result.total, dec!(0));
        assert_eq!(result.contributions, vec![]);
    }

    #[test]
    fn income_inside_first_bracket_uses_one_slice() {
        let brackets = seven_bracket_schedule();
        let schedule = ProgressiveSchedule::new(&brackets);

        let result = schedule.tax(dec!(4_000_000));

        assert_eq!(result.total, dec!(200_000));
        assert_eq!(
            result.contributions,
            vec![BracketContribution {
                rate: dec!(0.05),
                amount: dec!(4_000_000),
                tax: dec!(200_000),
            }]
        );
    }

    #[test]
    fn income_at_bracket_boundary_does_not_open_the_next_bracket() {
        let brackets = seven_bracket_schedule();
        let schedule = ProgressiveSchedule::new(&brackets);

        let result = schedule.tax(dec!(5_000_000));

        assert_eq!(result.total, dec!(250_000));
        assert_eq!(result.contributions.len(), 1);
    }

    #[test]
    fn income_spanning_two_brackets_slices_both() {
        let brackets = seven_bracket_schedule();
        let schedule = ProgressiveSchedule::new(&brackets);

        let result = schedule.tax(dec!(6_900_000));

        assert_eq!(result.total, dec!(440_000));
        assert_eq!(
            result.contributions,
            vec![
                BracketContribution {
                    rate: dec!(0.05),
                    amount: dec!(5_000_000),
                    tax: dec!(250_000),
                },
                BracketContribution {
                    rate: dec!(0.10),
                    amount: dec!(1_900_000),
                    tax: dec!(190_000),
                },
            ]
        );
    }

    #[test]
    fn income_reaching_the_fifth_bracket_slices_five() {
        let brackets = seven_bracket_schedule();
        let schedule = ProgressiveSchedule::new(&brackets);

        let result = schedule.tax(dec!(34_054_000));

        assert_eq!(result.total, dec!(5_263_500));
        assert_eq!(result.contributions.len(), 5);
        assert_eq!(result.contributions[4].amount, dec!(2_054_000));
        assert_eq!(result.contributions[4].tax, dec!(513_500));
    }

    #[test]
    fn income_in_the_unbounded_bracket_is_taxed_at_the_top_rate() {
        let brackets = seven_bracket_schedule();
        let schedule = ProgressiveSchedule::new(&brackets);

        let result = schedule.tax(dec!(100_000_000));

        // 18_150_000 through the six bounded brackets, then 35% above 80M.
        assert_eq!(result.total, dec!(18_150_000) + dec!(7_000_000));
        assert_eq!(result.contributions.len(), 7);
        assert_eq!(result.contributions[6].amount, dec!(20_000_000));
    }

    #[test]
    fn slice_amounts_sum_to_taxable_income() {
        let brackets = seven_bracket_schedule();
        let schedule = ProgressiveSchedule::new(&brackets);

        for taxable in [
            dec!(1),
            dec!(4_999_999),
            dec!(5_000_001),
            dec!(17_999_999),
            dec!(52_000_000),
            dec!(123_456_789),
        ] {
            let result = schedule.tax(taxable);
            let amount_sum: Decimal = result.contributions.iter().map(|c| c.amount).sum();
            let tax_sum: Decimal = result.contributions.iter().map(|c| c.tax).sum();

            assert_eq!(amount_sum, taxable);
            assert_eq!(tax_sum, result.total);
        }
    }

    #[test]
    fn single_unbounded_bracket_behaves_as_a_flat_tax() {
        let brackets = vec![TaxBracket::unbounded(dec!(0.10))];
        let schedule = ProgressiveSchedule::new(&brackets);

        let result = schedule.tax(dec!(7_500_000));

        assert_eq!(result.total, dec!(750_000));
        assert_eq!(result.contributions.len(), 1);
    }

    #[test]
    fn fractional_slice_tax_rounds_to_whole_vnd() {
        let brackets = vec![TaxBracket::unbounded(dec!(0.05))];
        let schedule = ProgressiveSchedule::new(&brackets);

        // 333_333 * 0.05 = 16_666.65, rounds to 16_667.
        let result = schedule.tax(dec!(333_333));

        assert_eq!(result.total, dec!(16_667));
    }
}
