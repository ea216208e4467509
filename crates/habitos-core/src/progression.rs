//! XP-driven rank progression.
//!
//! Rank is a pure function of cumulative XP: the highest tier whose minimum
//! threshold is less than or equal to the XP value (boundary inclusive).
//! Ranks are never stored independently of XP or set directly.

use serde::{Deserialize, Serialize};

/// Named progression tier derived from cumulative XP.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Rank {
    #[default]
    Novice,
    Operator,
    Architect,
    Warlord,
    Sovereign,
    Archon,
}

/// Tier thresholds, lowest first. A tier owns every XP value from its
/// threshold up to (but excluding) the next tier's threshold.
pub const RANK_THRESHOLDS: [(Rank, u32); 6] = [
    (Rank::Novice, 0),
    (Rank::Operator, 100),
    (Rank::Architect, 500),
    (Rank::Warlord, 1_000),
    (Rank::Sovereign, 2_500),
    (Rank::Archon, 5_000),
];

impl Rank {
    /// The tier owning `xp`: the highest threshold that is `<= xp`. Total
    /// over all inputs; values below every threshold map to Novice.
    pub fn for_xp(xp: u32) -> Rank {
        RANK_THRESHOLDS
            .iter()
            .rev()
            .find(|(_, threshold)| xp >= *threshold)
            .map(|(rank, _)| *rank)
            .unwrap_or(Rank::Novice)
    }

    /// Minimum XP for this tier.
    pub fn threshold(&self) -> u32 {
        match self {
            Rank::Novice => 0,
            Rank::Operator => 100,
            Rank::Architect => 500,
            Rank::Warlord => 1_000,
            Rank::Sovereign => 2_500,
            Rank::Archon => 5_000,
        }
    }

    /// The next tier up, if any.
    pub fn next(&self) -> Option<Rank> {
        match self {
            Rank::Novice => Some(Rank::Operator),
            Rank::Operator => Some(Rank::Architect),
            Rank::Architect => Some(Rank::Warlord),
            Rank::Warlord => Some(Rank::Sovereign),
            Rank::Sovereign => Some(Rank::Archon),
            Rank::Archon => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Novice => "Novice",
            Rank::Operator => "Operator",
            Rank::Architect => "Architect",
            Rank::Warlord => "Warlord",
            Rank::Sovereign => "Sovereign",
            Rank::Archon => "Archon",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "novice" => Some(Rank::Novice),
            "operator" => Some(Rank::Operator),
            "architect" => Some(Rank::Architect),
            "warlord" => Some(Rank::Warlord),
            "sovereign" => Some(Rank::Sovereign),
            "archon" => Some(Rank::Archon),
            _ => None,
        }
    }
}

/// One-shot rank-up notification. Armed when an XP award crosses a tier
/// threshold; cleared only by an explicit dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankUp {
    /// Tier before the award.
    pub from: Rank,
    /// Tier after the award.
    pub to: Rank,
}
