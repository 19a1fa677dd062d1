use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of the residency classification, computed fresh per calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidencyDetermination {
    /// Excluded from the Substantial Presence Test (and from FICA) for the
    /// filing year under the exempt-individual rule.
    pub is_exempt_individual: bool,

    /// The Substantial Presence Test was met. A resident alien files
    /// Form 1040, so the rest of this engine's output does not apply.
    pub is_resident_alien: bool,

    /// Weighted SPT day count: `days + prior/3 + two_prior/6`, kept exact.
    /// Zero when the exempt-individual rule short-circuits the test.
    pub weighted_presence_days: Decimal,
}
