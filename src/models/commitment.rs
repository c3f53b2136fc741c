use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::sport::Sport;

/// A player's no-show history for one sport.
///
/// Strikes only accumulate. Cooldown is not stored here: it is derived on
/// demand from `strike_count` and `last_strike_at` by the commitment engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentRecord {
    pub player_id: Uuid,
    pub sport: Sport,
    pub strike_count: u32,
    /// `None` iff `strike_count` is zero
    pub last_strike_at: Option<DateTime<Utc>>,
}

impl CommitmentRecord {
    /// Clean record with no strikes
    pub fn new(player_id: Uuid, sport: Sport) -> Self {
        Self {
            player_id,
            sport,
            strike_count: 0,
            last_strike_at: None,
        }
    }
}

/// Penalty state derived from a `CommitmentRecord` at a reference time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PenaltyState {
    /// No restriction
    Clear,
    /// Strikes on record, no restriction
    Warned,
    /// Participation restricted until `until`
    Cooldown { until: DateTime<Utc> },
}

impl PenaltyState {
    pub fn is_restricted(&self) -> bool {
        matches!(self, PenaltyState::Cooldown { .. })
    }
}
