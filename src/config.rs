use serde::Deserialize;
use std::env;
use validator::Validate;

use crate::models::sport::Sport;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

/// Settings for the demo match simulation
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct SimulationConfig {
    #[validate(range(min = 1, max = 10000))]
    pub matches: u32,
    pub sport: Sport,
    #[validate(range(max = 60000))]
    pub interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            matches: 10,
            sport: Sport::Basketball,
            interval_ms: 250,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let defaults = SimulationConfig::default();

        let matches: u32 = match env::var("SIM_MATCHES") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.matches,
        };
        let sport: Sport = match env::var("SIM_SPORT") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.sport,
        };
        let interval_ms: u64 = match env::var("SIM_INTERVAL_MS") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.interval_ms,
        };
        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "sportshub=info".to_string());

        let simulation = SimulationConfig {
            matches,
            sport,
            interval_ms,
        };
        simulation.validate()?;

        Ok(Config {
            simulation,
            logging: LoggingConfig { rust_log },
        })
    }
}
