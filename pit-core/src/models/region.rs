use serde::{Deserialize, Serialize};
use tracing::warn;

/// Wage region under the regional minimum wage schedule.
///
/// Regions are numbered 1 (highest minimum wage, the major cities) through
/// 4 (lowest). The unemployment-insurance contribution cap scales with the
/// region's minimum wage, so every assessment is made for a specific region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    I,
    II,
    III,
    IV,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[Region::I, Region::II, Region::III, Region::IV]
    }

    /// Numeric id as used in the statutory schedule (1–4).
    pub fn id(&self) -> u8 {
        match self {
            Region::I => 1,
            Region::II => 2,
            Region::III => 3,
            Region::IV => 4,
        }
    }

    pub fn from_id(id: u8) -> Option<Region> {
        match id {
            1 => Some(Region::I),
            2 => Some(Region::II),
            3 => Some(Region::III),
            4 => Some(Region::IV),
            _ => None,
        }
    }

    /// Resolves an id, falling back to [`Region::I`] for ids outside 1–4.
    ///
    /// The fallback is the documented default for callers that carry region
    /// ids from untyped sources and want the lenient behaviour; boundaries
    /// that can report errors should use [`Region::from_id`] instead.
    pub fn from_id_or_default(id: u8) -> Region {
        Region::from_id(id).unwrap_or_else(|| {
            warn!(id, "unknown wage region id; falling back to region I");
            Region::I
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::I => "I",
            Region::II => "II",
            Region::III => "III",
            Region::IV => "IV",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_round_trip() {
        for region in Region::all() {
            assert_eq!(Region::from_id(region.id()), Some(*region));
        }
    }

    #[test]
    fn from_id_rejects_out_of_range() {
        assert_eq!(Region::from_id(0), None);
        assert_eq!(Region::from_id(5), None);
        assert_eq!(Region::from_id(255), None);
    }

    #[test]
    fn from_id_or_default_falls_back_to_region_one() {
        assert_eq!(Region::from_id_or_default(0), Region::I);
        assert_eq!(Region::from_id_or_default(9), Region::I);
        assert_eq!(Region::from_id_or_default(3), Region::III);
    }

    #[test]
    fn display_uses_roman_label() {
        assert_eq!(Region::II.to_string(), "II");
        assert_eq!(Region::IV.to_string(), "IV");
    }
}
