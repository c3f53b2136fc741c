//! Matchmaking fairness.
//!
//!   fairness = 1 / (1 + |R(A) - R(B)| / scale)
//!
//! The scale is `MatchRules::FAIRNESS_SCALE_FACTOR`. A 20 point gap scores
//! ~0.952 and a 600 point gap scores 0.4.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::player::Player;
use crate::models::sport::Sport;
use crate::policy::MatchRules;

/// Pairings scoring below this are not recommended
pub const MINIMUM_RECOMMENDED_FAIRNESS: f64 = 0.6;

/// Fairness in [0, 1] of pairing two ratings in `sport`
pub fn fairness_score(rating_a: f64, rating_b: f64, sport: Sport) -> f64 {
    let scale = fairness_scale(sport);
    1.0 / (1.0 + (rating_a - rating_b).abs() / scale)
}

fn fairness_scale(sport: Sport) -> f64 {
    match sport {
        Sport::Basketball | Sport::Football | Sport::Soccer | Sport::Tennis => {
            MatchRules::FAIRNESS_SCALE_FACTOR
        }
    }
}

pub fn is_recommended(rating_a: f64, rating_b: f64, sport: Sport) -> bool {
    fairness_score(rating_a, rating_b, sport) >= MINIMUM_RECOMMENDED_FAIRNESS
}

/// A candidate opponent and how fair the pairing would be
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSuggestion {
    pub opponent_id: Uuid,
    pub opponent_rating: f64,
    pub fairness: f64,
}

/// Recommended opponents for `player` in `sport`, fairest first.
///
/// The player itself is skipped if it appears among `candidates`.
pub fn recommend_opponents<'a>(
    player: &Player,
    candidates: impl IntoIterator<Item = &'a Player>,
    sport: Sport,
) -> Vec<MatchSuggestion> {
    let rating = player.rating(sport);
    let mut suggestions: Vec<MatchSuggestion> = candidates
        .into_iter()
        .filter(|c| c.id != player.id)
        .map(|c| {
            let opponent_rating = c.rating(sport);
            MatchSuggestion {
                opponent_id: c.id,
                opponent_rating,
                fairness: fairness_score(rating, opponent_rating, sport),
            }
        })
        .filter(|s| s.fairness >= MINIMUM_RECOMMENDED_FAIRNESS)
        .collect();
    suggestions.sort_by(|a, b| b.fairness.total_cmp(&a.fairness));
    suggestions
}
