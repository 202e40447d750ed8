//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bettor identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BettorId(String);

impl BettorId {
    /// Create a new `BettorId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the bettor ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BettorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BettorId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BettorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&BettorId> for BettorId {
    fn from(id: &BettorId) -> Self {
        id.clone()
    }
}

/// Outcome identifier - newtype for type safety.
///
/// Outcomes are compared by their exact name, so `"Team A Wins"` and
/// `"team a wins"` are different outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeId(String);

impl OutcomeId {
    /// Create a new `OutcomeId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the outcome ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutcomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OutcomeId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for OutcomeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<&OutcomeId> for OutcomeId {
    fn from(id: &OutcomeId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bettor_id_displays_inner_name() {
        let id = BettorId::from("Alice");

        assert_eq!(id.to_string(), "Alice");
        assert_eq!(id.as_str(), "Alice");
    }

    #[test]
    fn outcome_id_is_case_sensitive() {
        assert_ne!(OutcomeId::from("Team A Wins"), OutcomeId::from("team a wins"));
    }

    #[test]
    fn outcome_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&OutcomeId::from("Team B Wins")).unwrap();

        assert_eq!(json, "\"Team B Wins\"");
    }
}
