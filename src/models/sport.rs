use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SportsHubError;

/// Supported sports. Each sport carries an independent rating track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Basketball,
    Football,
    Soccer,
    Tennis,
}

impl Sport {
    pub const ALL: [Sport; 4] = [
        Sport::Basketball,
        Sport::Football,
        Sport::Soccer,
        Sport::Tennis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Basketball => "basketball",
            Sport::Football => "football",
            Sport::Soccer => "soccer",
            Sport::Tennis => "tennis",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sport {
    type Err = SportsHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basketball" => Ok(Sport::Basketball),
            "football" => Ok(Sport::Football),
            "soccer" => Ok(Sport::Soccer),
            "tennis" => Ok(Sport::Tennis),
            other => Err(SportsHubError::unknown_sport(other)),
        }
    }
}
