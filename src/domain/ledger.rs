//! Pool ledger: running totals and the append-only bet book.
//!
//! The ledger prices every bet against the pool as it stands at that
//! instant, including the bet's own stake:
//!
//! ```text
//! p = (stake_on_outcome + amount) / (total_pool + amount)
//! w = amount / p = amount * (total_pool + amount) / (stake_on_outcome + amount)
//! ```
//!
//! The second form is what gets evaluated: the pool-to-stake ratio (decimal
//! odds) times the stake.
//!
//! Quoting is pure. [`PoolLedger::place_bet`] quotes first and only then
//! commits, so a rejected bet never leaves a partial update behind.
//!
//! The ledger is single-writer. Concurrent callers go through
//! [`crate::application::BettingRound`], which serialises the whole
//! quote-and-commit sequence.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::bet::{Bet, BetQuote};
use super::error::InvalidBetError;
use super::id::{BettorId, OutcomeId};
use super::money::Amount;
use super::outcome::OutcomeSet;

/// Fully committed, owned view of a ledger.
///
/// This is what the settlement engine consumes. It carries the outcome set
/// so a winner can be validated without reaching back into the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSnapshot {
    pub outcomes: OutcomeSet,
    pub total_pool: Amount,
    pub stake_by_outcome: HashMap<OutcomeId, Amount>,
    pub potential_payout_by_outcome: HashMap<OutcomeId, Amount>,
    pub bets: Vec<Bet>,
}

impl LedgerSnapshot {
    /// Total staked on `outcome`, zero for unknown outcomes.
    #[must_use]
    pub fn stake_on(&self, outcome: &OutcomeId) -> Amount {
        self.stake_by_outcome.get(outcome).copied().unwrap_or_default()
    }

    /// Sum of promised winnings on `outcome`, zero for unknown outcomes.
    #[must_use]
    pub fn potential_payout_on(&self, outcome: &OutcomeId) -> Amount {
        self.potential_payout_by_outcome
            .get(outcome)
            .copied()
            .unwrap_or_default()
    }
}

/// Running totals and bets for a single round.
#[derive(Debug, Clone)]
pub struct PoolLedger {
    outcomes: OutcomeSet,
    total_pool: Amount,
    stake_by_outcome: HashMap<OutcomeId, Amount>,
    potential_payout_by_outcome: HashMap<OutcomeId, Amount>,
    bets: Vec<Bet>,
}

impl PoolLedger {
    /// Create an empty ledger with a zero stake on every outcome.
    #[must_use]
    pub fn new(outcomes: OutcomeSet) -> Self {
        let zeroed: HashMap<OutcomeId, Amount> = outcomes
            .iter()
            .map(|outcome| (outcome.clone(), Decimal::ZERO))
            .collect();

        Self {
            outcomes,
            total_pool: Decimal::ZERO,
            stake_by_outcome: zeroed.clone(),
            potential_payout_by_outcome: zeroed,
            bets: Vec::new(),
        }
    }

    /// Price a stake against the current pool without recording it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBetError`] if the amount is not positive, the outcome
    /// is not in this pool, or the totals would overflow or round.
    pub fn quote(&self, amount: Amount, outcome: &OutcomeId) -> Result<BetQuote, InvalidBetError> {
        if amount <= Decimal::ZERO {
            return Err(InvalidBetError::NonPositiveAmount { amount });
        }
        let stake = self
            .stake_by_outcome
            .get(outcome)
            .copied()
            .ok_or_else(|| InvalidBetError::UnknownOutcome {
                outcome: outcome.clone(),
            })?;

        let overflow = || InvalidBetError::Overflow { amount };
        let provisional_pool = self.total_pool.checked_add(amount).ok_or_else(overflow)?;
        let provisional_stake = stake.checked_add(amount).ok_or_else(overflow)?;
        // Past 28 significant digits an addition rounds instead of overflowing.
        if provisional_pool - self.total_pool != amount || provisional_stake - stake != amount {
            return Err(InvalidBetError::PrecisionLoss { amount });
        }

        let implied_probability = if provisional_pool > Decimal::ZERO {
            provisional_stake
                .checked_div(provisional_pool)
                .ok_or_else(overflow)?
        } else {
            Decimal::ZERO
        };

        // amount / p, priced through decimal odds so a rounded p is never a divisor.
        let potential_winnings = if implied_probability > Decimal::ZERO {
            provisional_pool
                .checked_div(provisional_stake)
                .and_then(|odds| odds.checked_mul(amount))
                .ok_or_else(overflow)?
        } else {
            Decimal::ZERO
        };

        Ok(BetQuote {
            implied_probability,
            potential_winnings,
        })
    }

    /// Validate, price, and record a bet.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBetError`] for a blank bettor name or any error from
    /// [`PoolLedger::quote`]. On error the ledger is unchanged.
    pub fn place_bet(
        &mut self,
        bettor: impl Into<BettorId>,
        amount: Amount,
        outcome: impl Into<OutcomeId>,
    ) -> Result<Bet, InvalidBetError> {
        let bettor = bettor.into();
        let outcome = outcome.into();
        if bettor.as_str().trim().is_empty() {
            return Err(InvalidBetError::EmptyBettor);
        }

        let quote = self.quote(amount, &outcome)?;
        let overflow = || InvalidBetError::Overflow { amount };
        let payout_on_outcome = self
            .potential_payout_on(&outcome)
            .checked_add(quote.potential_winnings)
            .ok_or_else(overflow)?;

        // Everything below is infallible.
        self.total_pool += amount;
        *self.stake_by_outcome.entry(outcome.clone()).or_default() += amount;
        self.potential_payout_by_outcome
            .insert(outcome.clone(), payout_on_outcome);

        let bet = Bet::new(bettor, amount, outcome, quote);
        self.bets.push(bet.clone());
        Ok(bet)
    }

    /// Owned copy of the committed state.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            outcomes: self.outcomes.clone(),
            total_pool: self.total_pool,
            stake_by_outcome: self.stake_by_outcome.clone(),
            potential_payout_by_outcome: self.potential_payout_by_outcome.clone(),
            bets: self.bets.clone(),
        }
    }

    /// The outcomes this pool accepts.
    #[must_use]
    pub fn outcomes(&self) -> &OutcomeSet {
        &self.outcomes
    }

    /// Sum of every recorded stake.
    #[must_use]
    pub fn total_pool(&self) -> Amount {
        self.total_pool
    }

    /// Total staked on `outcome`, zero for unknown outcomes.
    #[must_use]
    pub fn stake_on(&self, outcome: &OutcomeId) -> Amount {
        self.stake_by_outcome.get(outcome).copied().unwrap_or_default()
    }

    /// Sum of promised winnings on `outcome`, zero for unknown outcomes.
    #[must_use]
    pub fn potential_payout_on(&self, outcome: &OutcomeId) -> Amount {
        self.potential_payout_by_outcome
            .get(outcome)
            .copied()
            .unwrap_or_default()
    }

    /// Recorded bets in placement order.
    #[must_use]
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Number of recorded bets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bets.len()
    }

    /// Returns true if no bet has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
}

impl Default for PoolLedger {
    fn default() -> Self {
        Self::new(OutcomeSet::binary())
    }
}
