use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sport::Sport;

/// Rank tiers, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankTier {
    Rookie,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Elite,
}

impl RankTier {
    pub const ALL: [RankTier; 6] = [
        RankTier::Rookie,
        RankTier::Bronze,
        RankTier::Silver,
        RankTier::Gold,
        RankTier::Platinum,
        RankTier::Elite,
    ];
}

impl std::fmt::Display for RankTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankTier::Rookie => write!(f, "Rookie"),
            RankTier::Bronze => write!(f, "Bronze"),
            RankTier::Silver => write!(f, "Silver"),
            RankTier::Gold => write!(f, "Gold"),
            RankTier::Platinum => write!(f, "Platinum"),
            RankTier::Elite => write!(f, "Elite"),
        }
    }
}

/// Resolved tier for one player and sport. Derived, not authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionRecord {
    pub player_id: Uuid,
    pub sport: Sport,
    pub tier: RankTier,
    pub current_rating: f64,
}
