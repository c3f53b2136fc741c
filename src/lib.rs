//! SportsHub core
//!
//! Multi-sport player tracking:
//! - ELO rating changes per sport with per-player K-factors
//! - No-show strikes and derived cooldown state
//! - Rank tiers from rating thresholds
//! - Matchmaking fairness scores and recommendations
//! - A single state authority that owns the roster and match history and
//!   pushes every change to its subscribers as an immutable snapshot

pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod service;
pub mod telemetry;

pub use error::SportsHubError;
pub use models::{
    CommitmentRecord, GameState, MatchResult, PenaltyState, Player, ProgressionRecord, RankTier,
    RatingRecord, Sport, Standing,
};
pub use service::{RatingDelta, StateAuthority, Subscription};
