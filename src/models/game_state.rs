use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::match_result::MatchResult;
use crate::models::player::Player;
use crate::models::progression::RankTier;
use crate::models::sport::Sport;
use crate::service::progression_engine;

/// Immutable snapshot of the roster and match history.
///
/// `sequence` is 0 for the authority's initial empty state and increases by
/// exactly one for every published snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub sequence: u64,
    pub players: Vec<Player>,
    pub matches: Vec<MatchResult>,
}

/// One leaderboard row for a sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: Uuid,
    pub name: String,
    pub rating: f64,
    pub match_count: u32,
    pub tier: RankTier,
}

impl GameState {
    pub fn player(&self, player_id: Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn matches_for(&self, sport: Sport) -> impl Iterator<Item = &MatchResult> {
        self.matches.iter().filter(move |m| m.sport == sport)
    }

    /// Leaderboard for `sport`, highest rating first. Ties keep roster order.
    pub fn standings(&self, sport: Sport) -> Vec<Standing> {
        let mut rows: Vec<Standing> = self
            .players
            .iter()
            .map(|p| {
                let rating = p.rating(sport);
                Standing {
                    player_id: p.id,
                    name: p.name.clone(),
                    rating,
                    match_count: p.match_count(sport),
                    tier: progression_engine::tier(rating),
                }
            })
            .collect();
        rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        rows
    }
}
