//! Policy constants consumed by the rating, commitment, progression and
//! matchmaking engines.
//!
//! All sports currently share one `SportConfig`. `SportConfig::for_sport`
//! is the lookup point for per-sport tuning.

use chrono::Duration;
use uuid::Uuid;

use crate::error::SportsHubError;
use crate::models::sport::Sport;

/// Rating configuration for one sport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportConfig {
    /// Rating assigned to a player who has not played the sport yet
    pub initial_rating: f64,
    /// K-factor while a player is still provisional
    pub k_factor_provisional: f64,
    /// K-factor once a player has left the provisional period
    pub k_factor_standard: f64,
    /// K-factor above `high_rated_threshold`
    pub k_factor_high_rated: f64,
    /// Match count at which the provisional period ends
    pub provisional_match_threshold: u32,
    /// Ratings strictly above this use `k_factor_high_rated`
    pub high_rated_threshold: f64,
    /// Denominator of the expected-score exponent
    pub elo_scale: f64,
}

impl SportConfig {
    pub const DEFAULT: SportConfig = SportConfig {
        initial_rating: 1000.0,
        k_factor_provisional: 40.0,
        k_factor_standard: 24.0,
        k_factor_high_rated: 16.0,
        provisional_match_threshold: 10,
        high_rated_threshold: 1600.0,
        elo_scale: 400.0,
    };

    pub fn for_sport(sport: Sport) -> Self {
        match sport {
            Sport::Basketball | Sport::Football | Sport::Soccer | Sport::Tennis => Self::DEFAULT,
        }
    }

    /// Resolve the K-factor for one player.
    ///
    /// Priority order, first match wins:
    /// 1. rating > high_rated_threshold -> high-rated K
    /// 2. match_count < provisional_match_threshold -> provisional K
    /// 3. standard K
    pub fn k_factor(&self, rating: f64, match_count: u32) -> f64 {
        if rating > self.high_rated_threshold {
            self.k_factor_high_rated
        } else if match_count < self.provisional_match_threshold {
            self.k_factor_provisional
        } else {
            self.k_factor_standard
        }
    }
}

impl Default for SportConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// No-show strike thresholds and cooldown windows
pub struct PenaltyPolicy;

impl PenaltyPolicy {
    pub const WARNING_STRIKE_COUNT: u32 = 1;
    pub const SHORT_COOLDOWN_STRIKE_COUNT: u32 = 2;
    pub const LONG_COOLDOWN_STRIKE_COUNT: u32 = 3;

    pub const SHORT_COOLDOWN_HOURS: i64 = 24;
    pub const LONG_COOLDOWN_HOURS: i64 = 72;

    pub fn short_cooldown() -> Duration {
        Duration::hours(Self::SHORT_COOLDOWN_HOURS)
    }

    pub fn long_cooldown() -> Duration {
        Duration::hours(Self::LONG_COOLDOWN_HOURS)
    }
}

/// Inclusive lower bounds of each rank tier. Identical across sports.
pub struct ProgressionPolicy;

impl ProgressionPolicy {
    pub const BRONZE_FLOOR: f64 = 900.0;
    pub const SILVER_FLOOR: f64 = 1100.0;
    pub const GOLD_FLOOR: f64 = 1300.0;
    pub const PLATINUM_FLOOR: f64 = 1500.0;
    pub const ELITE_FLOOR: f64 = 1700.0;
}

/// Rules for a reportable match result and the matchmaking scale
pub struct MatchRules;

impl MatchRules {
    pub const REQUIRED_PLAYER_COUNT: usize = 2;

    /// Fairness decays on the same scale the rating engine uses: a 400 point
    /// gap is a ~91% expected win for the stronger player.
    pub const FAIRNESS_SCALE_FACTOR: f64 = 400.0;

    /// Check that a proposed result names two distinct players
    pub fn validate(winner_id: Uuid, loser_id: Uuid) -> Result<(), SportsHubError> {
        if winner_id == loser_id {
            return Err(SportsHubError::invalid_match(format!(
                "winner and loser must differ (both {})",
                winner_id
            )));
        }
        Ok(())
    }
}
