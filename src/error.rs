use thiserror::Error;

use crate::domain::{InvalidBetError, InvalidOutcomeError};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Betting round lifecycle errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("round is closed to new bets")]
    Closed,

    #[error("round is still open; close it before settling")]
    StillOpen,

    #[error(transparent)]
    Bet(#[from] InvalidBetError),

    #[error(transparent)]
    Outcome(#[from] InvalidOutcomeError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Round(#[from] RoundError),

    #[error(transparent)]
    Bet(#[from] InvalidBetError),

    #[error(transparent)]
    Outcome(#[from] InvalidOutcomeError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse bet sheet: {0}")]
    BetSheet(#[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
