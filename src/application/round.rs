//! A betting round shared between concurrent bettors.
//!
//! [`BettingRound`] owns one [`PoolLedger`] behind a mutex. Every bet holds
//! the lock across validate, quote, and commit, so no two bets are ever
//! priced against the same pool state. Closing the round is the barrier that
//! hands the final snapshot to settlement; bets arriving afterwards are
//! rejected.

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{
    settle, Amount, Bet, BetQuote, BettorId, LedgerSnapshot, OutcomeId, OutcomeSet, PoolLedger,
    SettlementReport,
};
use crate::error::RoundError;

struct RoundState {
    ledger: PoolLedger,
    open: bool,
}

/// One round of betting over a fixed outcome set.
pub struct BettingRound {
    state: Mutex<RoundState>,
}

impl BettingRound {
    /// Open a new round with an empty pool.
    #[must_use]
    pub fn new(outcomes: OutcomeSet) -> Self {
        Self {
            state: Mutex::new(RoundState {
                ledger: PoolLedger::new(outcomes),
                open: true,
            }),
        }
    }

    /// Record a bet.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Closed`] once the round has been closed, or
    /// [`RoundError::Bet`] if the ledger rejects the bet.
    pub fn place_bet(
        &self,
        bettor: impl Into<BettorId>,
        amount: Amount,
        outcome: impl Into<OutcomeId>,
    ) -> Result<Bet, RoundError> {
        let bettor = bettor.into();
        let outcome = outcome.into();

        let mut state = self.state.lock();
        if !state.open {
            return Err(RoundError::Closed);
        }
        let bet = state.ledger.place_bet(bettor, amount, outcome)?;
        let total_pool = state.ledger.total_pool();
        drop(state);

        debug!(
            bettor = %bet.bettor(),
            amount = %bet.amount(),
            outcome = %bet.outcome(),
            implied_probability = %bet.implied_probability(),
            potential_winnings = %bet.potential_winnings(),
            total_pool = %total_pool,
            "Bet placed"
        );
        Ok(bet)
    }

    /// Price a stake against the current pool without recording it.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Bet`] if the stake or outcome is invalid.
    pub fn quote(&self, amount: Amount, outcome: &OutcomeId) -> Result<BetQuote, RoundError> {
        Ok(self.state.lock().ledger.quote(amount, outcome)?)
    }

    /// Fully committed copy of the ledger.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.state.lock().ledger.snapshot()
    }

    /// Returns true while bets are still accepted.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    /// Stop accepting bets and return the final snapshot.
    ///
    /// Closing an already closed round returns the same snapshot again.
    pub fn close(&self) -> LedgerSnapshot {
        let mut state = self.state.lock();
        if state.open {
            state.open = false;
            info!(
                bets = state.ledger.len(),
                total_pool = %state.ledger.total_pool(),
                "Round closed"
            );
        }
        state.ledger.snapshot()
    }

    /// Settle a closed round against `winning_outcome`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::StillOpen`] if [`BettingRound::close`] has not
    /// been called, or [`RoundError::Outcome`] for an unknown winner.
    pub fn settle(&self, winning_outcome: &OutcomeId) -> Result<SettlementReport, RoundError> {
        let snapshot = {
            let state = self.state.lock();
            if state.open {
                return Err(RoundError::StillOpen);
            }
            state.ledger.snapshot()
        };

        let report = settle(&snapshot, winning_outcome)?;
        if report.is_adjusted() {
            warn!(
                adjustment_factor = %report.adjustment_factor,
                total_potential_payouts = %report.total_potential_payouts,
                total_pool = %report.total_pool,
                "Payouts scaled down to fit the pool"
            );
        }
        info!(
            winning_outcome = %report.winning_outcome,
            winners = report.winners().count(),
            platform_gain = %report.platform_gain,
            "Round settled"
        );
        Ok(report)
    }
}
