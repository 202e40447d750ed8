//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; an empty file reproduces the default demo of one
//! round with 23 players betting $10 to $100 on "Team A Wins" or "Team B Wins".
//!
//! # Example
//!
//! ```no_run
//! use parimutuel::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::domain::{BettorId, OutcomeSet, DEFAULT_OUTCOMES};
use crate::error::{ConfigError, Result};

/// Players in the default demo roster.
pub const DEFAULT_PLAYERS: [&str; 23] = [
    "Alice", "Bob", "Dave", "Frank", "Grace", "Eve", "Andrew", "Joe", "Tom", "Pieter", "Maria",
    "Anna", "Michael", "Barry", "Leo", "Alex", "Martha", "Jen", "Mia", "Antony", "Jack", "Lea",
    "Steve",
];

/// Outcomes every round is run over.
#[derive(Debug, Clone, Deserialize)]
pub struct RoundConfig {
    #[serde(default = "default_outcomes")]
    pub outcomes: Vec<String>,
}

fn default_outcomes() -> Vec<String> {
    DEFAULT_OUTCOMES.iter().map(ToString::to_string).collect()
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            outcomes: default_outcomes(),
        }
    }
}

/// Demo simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent rounds to play.
    #[serde(default = "default_rounds")]
    pub rounds: u32,
    /// Smallest whole-dollar stake a player draws.
    #[serde(default = "default_min_bet")]
    pub min_bet: u32,
    /// Largest whole-dollar stake a player draws.
    #[serde(default = "default_max_bet")]
    pub max_bet: u32,
    /// Fixed RNG seed for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Player roster, one bet each per round.
    #[serde(default = "default_players")]
    pub players: Vec<String>,
}

const fn default_rounds() -> u32 {
    1
}

const fn default_min_bet() -> u32 {
    10
}

const fn default_max_bet() -> u32 {
    100
}

fn default_players() -> Vec<String> {
    DEFAULT_PLAYERS.iter().map(ToString::to_string).collect()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            min_bet: default_min_bet(),
            max_bet: default_max_bet(),
            seed: None,
            players: default_players(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Outcome set shared by every round.
    #[serde(default)]
    pub round: RoundConfig,

    /// Demo simulation parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or is invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// The validated outcome set.
    ///
    /// # Errors
    ///
    /// Returns an error if the outcomes are empty or repeat.
    pub fn outcome_set(&self) -> Result<OutcomeSet> {
        Ok(OutcomeSet::try_new(self.round.outcomes.iter().map(String::as_str))?)
    }

    /// The player roster as bettor identifiers.
    #[must_use]
    pub fn players(&self) -> Vec<BettorId> {
        self.simulation
            .players
            .iter()
            .map(|name| BettorId::new(name.trim()))
            .collect()
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let outcomes = OutcomeSet::try_new(self.round.outcomes.iter().map(String::as_str))
            .and_then(|set| set.ensure_contested());
        if let Err(e) = outcomes {
            return Err(ConfigError::InvalidValue {
                field: "outcomes",
                reason: e.to_string(),
            }
            .into());
        }
        if self.simulation.players.is_empty() {
            return Err(ConfigError::MissingField { field: "players" }.into());
        }
        if self.simulation.players.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "players",
                reason: "player names cannot be blank".to_string(),
            }
            .into());
        }
        if self.simulation.min_bet == 0 {
            return Err(ConfigError::InvalidValue {
                field: "min_bet",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.simulation.max_bet < self.simulation.min_bet {
            return Err(ConfigError::InvalidValue {
                field: "max_bet",
                reason: "must be at least min_bet".to_string(),
            }
            .into());
        }
        if self.simulation.rounds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rounds",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
