use crate::Strategy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use threeshot_execution::{GameError, Wagers};
use threeshot_types::casino::Paytables;
use tracing::Level;

/// Simulator configuration, usually loaded from YAML.
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub seed: u64,
    pub rounds: u64,
    pub first_shot_bet: i64,
    pub five_shot_bet: i64,
    pub strategy: Strategy,
    pub log_level: String,
    pub paytables: Paytables,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 0,
            rounds: 100_000,
            first_shot_bet: 10,
            five_shot_bet: 0,
            strategy: Strategy::Basic,
            log_level: "info".to_string(),
            paytables: Paytables::grand_sierra(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
    #[error(transparent)]
    InvalidWager(#[from] GameError),
    #[error("{table} pay table lists {hand} more than once")]
    DuplicatePaytableEntry { table: &'static str, hand: String },
}

/// A [Config] whose values have been checked.
#[derive(Clone, Debug)]
pub struct ValidatedConfig {
    pub seed: u64,
    pub rounds: u64,
    pub wagers: Wagers,
    pub strategy: Strategy,
    pub log_level: Level,
    pub paytables: Paytables,
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let log_level = Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
            value: self.log_level.clone(),
        })?;
        if self.rounds == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "rounds",
                value: self.rounds,
            });
        }
        let wagers = Wagers::new(self.first_shot_bet, self.five_shot_bet)?;
        if let Some(hand) = self.paytables.shot.duplicate_category() {
            return Err(ConfigError::DuplicatePaytableEntry {
                table: "shot",
                hand: hand.to_string(),
            });
        }
        if let Some(hand) = self.paytables.five_shot.duplicate_category() {
            return Err(ConfigError::DuplicatePaytableEntry {
                table: "five_shot",
                hand: hand.to_string(),
            });
        }

        Ok(ValidatedConfig {
            seed: self.seed,
            rounds: self.rounds,
            wagers,
            strategy: self.strategy,
            log_level,
            paytables: self.paytables.clone(),
        })
    }
}
