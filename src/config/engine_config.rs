use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const ADR_MODE_VAR: &str = "SCOREBOARD_ADR_MODE";
pub const INITIAL_ROUND_VAR: &str = "SCOREBOARD_INITIAL_ROUND";

/// How average damage per round is divided.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdrMode {
    /// Floating-point division.
    #[default]
    Fractional,
    /// Integer division, dropping the remainder.
    Truncated,
}

impl AdrMode {
    /// Divides `total_damage` by `rounds` according to the mode.
    pub fn average(self, total_damage: u32, rounds: u32) -> f64 {
        match self {
            AdrMode::Fractional => f64::from(total_damage) / f64::from(rounds),
            AdrMode::Truncated => f64::from(total_damage / rounds),
        }
    }
}

impl FromStr for AdrMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fractional" => Ok(AdrMode::Fractional),
            "truncated" => Ok(AdrMode::Truncated),
            _ => Err(ConfigError::InvalidAdrMode(value.to_owned())),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid ADR mode {0:?}, expected \"fractional\" or \"truncated\"")]
    InvalidAdrMode(String),

    #[error("invalid initial round {0:?}, expected an integer of at least 1")]
    InvalidInitialRound(String),
}

/// Tunables of the aggregation engine.
///
/// # Fields
///
/// * `initial_round` - The value the round counter starts at. Never zero.
/// * `adr_mode` - How ADR divides cumulative damage by the round counter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub initial_round: u32,
    pub adr_mode: AdrMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            initial_round: 1,
            adr_mode: AdrMode::Fractional,
        }
    }
}

impl EngineConfig {
    /// Reads the configuration from the process environment, falling back to
    /// the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = EngineConfig::default();

        if let Some(mode) = lookup(ADR_MODE_VAR) {
            config.adr_mode = mode.parse()?;
        }
        if let Some(round) = lookup(INITIAL_ROUND_VAR) {
            config.initial_round = match round.trim().parse::<u32>() {
                Ok(value) if value >= 1 => value,
                _ => return Err(ConfigError::InvalidInitialRound(round)),
            };
        }

        Ok(config)
    }
}
