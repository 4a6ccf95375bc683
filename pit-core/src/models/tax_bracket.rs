use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal band of a progressive schedule.
///
/// `upper_bound` is the cumulative taxable income where the band ends;
/// `None` marks the open-ended top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn bounded(upper_bound: Decimal, rate: Decimal) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}
