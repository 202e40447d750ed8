//! Recorded bets and point-in-time quotes.

use serde::Serialize;

use super::id::{BettorId, OutcomeId};
use super::money::{Amount, Probability};

/// Odds and winnings a stake would receive against the current pool.
///
/// A quote includes the stake itself in the pool, so the first bet on an
/// empty pool is always quoted at probability 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BetQuote {
    /// Share of the pool held by the chosen outcome after this stake.
    pub implied_probability: Probability,
    /// `amount / implied_probability`, or zero when the probability is zero.
    pub potential_winnings: Amount,
}

/// A bet recorded in the pool ledger.
///
/// Immutable once recorded. The probability and winnings are frozen at the
/// moment of placement; later bets do not revise them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bet {
    bettor: BettorId,
    amount: Amount,
    outcome: OutcomeId,
    implied_probability: Probability,
    potential_winnings: Amount,
}

impl Bet {
    pub(crate) fn new(bettor: BettorId, amount: Amount, outcome: OutcomeId, quote: BetQuote) -> Self {
        Self {
            bettor,
            amount,
            outcome,
            implied_probability: quote.implied_probability,
            potential_winnings: quote.potential_winnings,
        }
    }

    /// Who placed the bet.
    #[must_use]
    pub fn bettor(&self) -> &BettorId {
        &self.bettor
    }

    /// The stake.
    #[must_use]
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The chosen outcome.
    #[must_use]
    pub fn outcome(&self) -> &OutcomeId {
        &self.outcome
    }

    /// Pool share of the chosen outcome when the bet was recorded.
    #[must_use]
    pub fn implied_probability(&self) -> Probability {
        self.implied_probability
    }

    /// Payout promised at placement, before any settlement adjustment.
    #[must_use]
    pub fn potential_winnings(&self) -> Amount {
        self.potential_winnings
    }

    /// Returns true if this bet backed `outcome`.
    #[must_use]
    pub fn backs(&self, outcome: &OutcomeId) -> bool {
        &self.outcome == outcome
    }
}
