// Service layer for SportsHub
pub mod commitment_engine;
pub mod matchmaking_engine;
pub mod progression_engine;
pub mod rating_engine;
pub mod state_authority;


pub use rating_engine::RatingDelta;
pub use state_authority::{StateAuthority, Subscription};
