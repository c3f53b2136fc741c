use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SportsHubError {
    #[error("Player not found: {0}")]
    PlayerNotFound(Uuid),

    #[error("Invalid match: {0}")]
    InvalidMatch(String),

    #[error("Unknown sport: {0}")]
    UnknownSport(String),
}

impl SportsHubError {
    pub fn invalid_match(message: impl Into<String>) -> Self {
        SportsHubError::InvalidMatch(message.into())
    }

    pub fn unknown_sport(name: impl Into<String>) -> Self {
        SportsHubError::UnknownSport(name.into())
    }

    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            SportsHubError::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            SportsHubError::InvalidMatch(_) => "INVALID_MATCH",
            SportsHubError::UnknownSport(_) => "UNKNOWN_SPORT",
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            error: self.to_string(),
            code: self.code(),
        }
    }
}

/// Serializable form of an error, for observers that log or forward rejections
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub code: &'static str,
}
