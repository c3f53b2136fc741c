// Core models
pub mod commitment;
pub mod game_state;
pub mod match_result;
pub mod player;
pub mod progression;
pub mod sport;

// Re-export commonly used types
pub use commitment::*;
pub use game_state::*;
pub use match_result::*;
pub use player::*;
pub use progression::*;
pub use sport::*;
