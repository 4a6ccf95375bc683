mod assessment;
mod policy;
mod regime;
mod region;
mod tax_bracket;

pub use assessment::{BracketContribution, InsuranceBreakdown, PitAssessment, RegimeAssessment};
pub use policy::{InsuranceConfig, PolicyError, RegimeRules, RegionalWages, TaxPolicy};
pub use regime::Regime;
pub use region::Region;
pub use tax_bracket::TaxBracket;
