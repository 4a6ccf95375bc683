//! Subcommand implementations.

pub mod batch;
pub mod brackets;
pub mod gross;
pub mod net;

use clap::ValueEnum;
use pit_core::{Regime, Region};

/// Regime selector for commands that work on a single regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegimeArg {
    Current,
    Proposed,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::Current => Regime::Current,
            RegimeArg::Proposed => Regime::Proposed,
        }
    }
}

/// Parses a `--region` argument given as the numeric id 1 to 4.
pub(crate) fn parse_region(value: &str) -> Result<Region, String> {
    let id: u8 = value
        .trim()
        .parse()
        .map_err(|_| format!("region must be a number from 1 to 4, got '{value}'"))?;
    Region::from_id(id).ok_or_else(|| format!("region must be 1, 2, 3 or 4, got {id}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_region_accepts_all_four_ids() {
        assert_eq!(parse_region("1"), Ok(Region::I));
        assert_eq!(parse_region("2"), Ok(Region::II));
        assert_eq!(parse_region("3"), Ok(Region::III));
        assert_eq!(parse_region("4"), Ok(Region::IV));
    }

    #[test]
    fn parse_region_rejects_out_of_range_and_junk() {
        assert!(parse_region("0").is_err());
        assert!(parse_region("5").is_err());
        assert!(parse_region("one").is_err());
    }

    #[test]
    fn regime_arg_maps_onto_the_core_enum() {
        assert_eq!(Regime::from(RegimeArg::Current), Regime::Current);
        assert_eq!(Regime::from(RegimeArg::Proposed), Regime::Proposed);
    }
}
