use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sport::Sport;

/// Outcome of a completed match. `sport` selects the rating track updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner_id: Uuid,
    pub loser_id: Uuid,
    pub sport: Sport,
    pub played_at: DateTime<Utc>,
}

impl MatchResult {
    pub fn new(winner_id: Uuid, loser_id: Uuid, sport: Sport, played_at: DateTime<Utc>) -> Self {
        Self {
            winner_id,
            loser_id,
            sport,
            played_at,
        }
    }
}
