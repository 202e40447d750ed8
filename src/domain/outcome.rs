//! The fixed set of mutually exclusive outcomes a pool is run over.

use std::collections::HashSet;

use serde::Serialize;

use super::error::InvalidOutcomeError;
use super::id::OutcomeId;

/// Default outcome names for a head-to-head event.
pub const DEFAULT_OUTCOMES: [&str; 2] = ["Team A Wins", "Team B Wins"];

/// An ordered, non-empty set of distinct outcomes.
///
/// Order is preserved so that reports and per-outcome totals render in the
/// order the caller declared them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutcomeSet {
    outcomes: Vec<OutcomeId>,
}

impl OutcomeSet {
    /// Create an outcome set with domain invariant validation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOutcomeError::EmptyOutcomeSet`] when `outcomes` is
    /// empty and [`InvalidOutcomeError::DuplicateOutcome`] when a name repeats.
    pub fn try_new<I, O>(outcomes: I) -> Result<Self, InvalidOutcomeError>
    where
        I: IntoIterator<Item = O>,
        O: Into<OutcomeId>,
    {
        let outcomes: Vec<OutcomeId> = outcomes.into_iter().map(Into::into).collect();
        if outcomes.is_empty() {
            return Err(InvalidOutcomeError::EmptyOutcomeSet);
        }

        let mut seen = HashSet::with_capacity(outcomes.len());
        for outcome in &outcomes {
            if !seen.insert(outcome) {
                return Err(InvalidOutcomeError::DuplicateOutcome {
                    outcome: outcome.clone(),
                });
            }
        }

        Ok(Self { outcomes })
    }

    /// The default two-sided event: "Team A Wins" vs "Team B Wins".
    #[must_use]
    pub fn binary() -> Self {
        Self {
            outcomes: DEFAULT_OUTCOMES.iter().copied().map(OutcomeId::from).collect(),
        }
    }

    /// Returns true if `outcome` belongs to this set.
    #[must_use]
    pub fn contains(&self, outcome: &OutcomeId) -> bool {
        self.outcomes.contains(outcome)
    }

    /// Validate that `outcome` can be declared the winner.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOutcomeError`] if the set is empty or the outcome is
    /// not a member.
    pub fn check_winner(&self, outcome: &OutcomeId) -> Result<(), InvalidOutcomeError> {
        if self.outcomes.is_empty() {
            return Err(InvalidOutcomeError::EmptyOutcomeSet);
        }
        if !self.contains(outcome) {
            return Err(InvalidOutcomeError::UnknownOutcome {
                outcome: outcome.clone(),
            });
        }
        Ok(())
    }

    /// Require a second outcome to bet against.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOutcomeError::SingleOutcome`] for a one-outcome set.
    pub fn ensure_contested(&self) -> Result<(), InvalidOutcomeError> {
        match self.outcomes.as_slice() {
            [only] => Err(InvalidOutcomeError::SingleOutcome {
                outcome: only.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Outcomes in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[OutcomeId] {
        &self.outcomes
    }

    /// Iterate outcomes in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OutcomeId> {
        self.outcomes.iter()
    }

    /// Number of outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Always false for a validated set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl Default for OutcomeSet {
    fn default() -> Self {
        Self::binary()
    }
}

impl<'a> IntoIterator for &'a OutcomeSet {
    type Item = &'a OutcomeId;
    type IntoIter = std::slice::Iter<'a, OutcomeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_set_has_two_outcomes_in_order() {
        let set = OutcomeSet::binary();

        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[0].as_str(), "Team A Wins");
        assert_eq!(set.as_slice()[1].as_str(), "Team B Wins");
    }

    #[test]
    fn try_new_rejects_empty() {
        let result = OutcomeSet::try_new(Vec::<&str>::new());

        assert_eq!(result, Err(InvalidOutcomeError::EmptyOutcomeSet));
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let result = OutcomeSet::try_new(["Home", "Away", "Home"]);

        assert_eq!(
            result,
            Err(InvalidOutcomeError::DuplicateOutcome {
                outcome: OutcomeId::from("Home"),
            })
        );
    }

    #[test]
    fn try_new_accepts_more_than_two_outcomes() {
        let set = OutcomeSet::try_new(["Home", "Draw", "Away"]).unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.contains(&OutcomeId::from("Draw")));
    }

    #[test]
    fn check_winner_rejects_non_member() {
        let set = OutcomeSet::binary();

        assert!(set.check_winner(&OutcomeId::from("Team A Wins")).is_ok());
        assert!(matches!(
            set.check_winner(&OutcomeId::from("Draw")),
            Err(InvalidOutcomeError::UnknownOutcome { .. })
        ));
    }

    #[test]
    fn single_outcome_set_is_not_contested() {
        let single = OutcomeSet::try_new(["Only"]).unwrap();

        assert_eq!(
            single.ensure_contested(),
            Err(InvalidOutcomeError::SingleOutcome {
                outcome: OutcomeId::from("Only"),
            })
        );
        assert!(OutcomeSet::binary().ensure_contested().is_ok());
    }
}
