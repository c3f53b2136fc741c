use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::sport::Sport;
use crate::policy::SportConfig;

/// A player tracked by the state authority.
///
/// Ratings and match counts are kept per sport. A sport with no entry has
/// never been played: its rating is the sport's initial rating and its
/// match count is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub ratings: HashMap<Sport, f64>,
    #[serde(default)]
    pub match_counts: HashMap<Sport, u32>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ratings: HashMap::new(),
            match_counts: HashMap::new(),
        }
    }

    /// Current rating for `sport`, or the initial rating if never played
    pub fn rating(&self, sport: Sport) -> f64 {
        self.ratings
            .get(&sport)
            .copied()
            .unwrap_or_else(|| SportConfig::for_sport(sport).initial_rating)
    }

    pub fn match_count(&self, sport: Sport) -> u32 {
        self.match_counts.get(&sport).copied().unwrap_or(0)
    }

    /// Point-in-time copy of this player's rating track for one sport
    pub fn rating_record(&self, sport: Sport, recorded_at: DateTime<Utc>) -> RatingRecord {
        RatingRecord {
            player_id: self.id,
            sport,
            rating: self.rating(sport),
            match_count: self.match_count(sport),
            recorded_at,
        }
    }

    pub(crate) fn record_result(&mut self, sport: Sport, new_rating: f64) {
        self.ratings.insert(sport, new_rating);
        *self.match_counts.entry(sport).or_insert(0) += 1;
    }
}

/// Historical rating snapshot for one player and sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub player_id: Uuid,
    pub sport: Sport,
    pub rating: f64,
    pub match_count: u32,
    pub recorded_at: DateTime<Utc>,
}
