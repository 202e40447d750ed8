//! Bet sheets: a TOML list of bets to replay into a round.
//!
//! ```toml
//! outcomes = ["Team A Wins", "Team B Wins"]   # optional
//!
//! [[bets]]
//! bettor = "Alice"
//! amount = 100
//! outcome = "Team A Wins"
//! ```
//!
//! Amounts may be integers, floats, or decimal strings (`"12.50"`, `"1e5"`). Floats
//! go through [`stake_from_f64`], so `nan` and `inf` are rejected as bets
//! rather than as malformed TOML.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::BettingRound;
use crate::domain::money::stake_from_f64;
use crate::domain::{Amount, Bet, InvalidBetError, OutcomeSet};
use crate::error::{Error, Result};

/// One line of a bet sheet, amount not yet validated.
#[derive(Debug, Clone, Deserialize)]
pub struct BetEntry {
    pub bettor: String,
    pub amount: toml::Value,
    pub outcome: String,
}

impl BetEntry {
    /// Convert the raw amount into a positive decimal stake.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBetError`] if the amount is not a finite positive
    /// number.
    pub fn stake(&self) -> std::result::Result<Amount, InvalidBetError> {
        let amount = match &self.amount {
            toml::Value::Integer(i) => Decimal::from(*i),
            toml::Value::Float(f) => return stake_from_f64(*f),
            toml::Value::String(s) => {
                let trimmed = s.trim();
                Decimal::from_str(trimmed)
                    .or_else(|_| Decimal::from_scientific(trimmed))
                    .map_err(|_| InvalidBetError::NonFiniteAmount { raw: s.clone() })?
            }
            other => {
                return Err(InvalidBetError::NonFiniteAmount {
                    raw: other.to_string(),
                })
            }
        };
        if amount <= Decimal::ZERO {
            return Err(InvalidBetError::NonPositiveAmount { amount });
        }
        Ok(amount)
    }
}

/// A parsed bet sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct BetSheet {
    #[serde(default)]
    pub outcomes: Option<Vec<String>>,
    #[serde(default)]
    pub bets: Vec<BetEntry>,
}

impl BetSheet {
    /// Parse a bet sheet from TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BetSheet`] if the content is not a valid sheet.
    pub fn parse_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::BetSheet)
    }

    /// Load a bet sheet from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// The sheet's own outcome set, or `fallback` when it declares none.
    ///
    /// # Errors
    ///
    /// Returns an error if the declared outcomes are empty, repeat, or name
    /// only one outcome.
    pub fn outcome_set(&self, fallback: &OutcomeSet) -> Result<OutcomeSet> {
        match &self.outcomes {
            Some(outcomes) => {
                let set = OutcomeSet::try_new(outcomes.iter().map(String::as_str))?;
                set.ensure_contested()?;
                Ok(set)
            }
            None => Ok(fallback.clone()),
        }
    }

    /// Place every bet into `round`, in sheet order.
    ///
    /// # Errors
    ///
    /// Stops at the first invalid bet; bets before it stay recorded.
    pub fn place_all(&self, round: &BettingRound) -> Result<Vec<Bet>> {
        self.bets
            .iter()
            .map(|entry| -> Result<Bet> {
                let amount = entry.stake()?;
                Ok(round.place_bet(entry.bettor.as_str(), amount, entry.outcome.as_str())?)
            })
            .collect()
    }
}
