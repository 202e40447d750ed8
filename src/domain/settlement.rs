//! Settlement engine: pays winners out of a closed pool.
//!
//! Winners are owed the potential winnings frozen at placement. When those
//! promises add up to more than the pool, every winner is scaled by the same
//! adjustment factor `total_pool / total_potential_payouts`, so the amount
//! paid out never exceeds what was collected. Whatever the winners do not
//! claim is the platform's gain.
//!
//! A winning bet can still show a negative profit: a bettor who backed the
//! favourite at long odds-on may be scaled below their own stake. That is
//! the pool working as intended, not an accounting error.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::InvalidOutcomeError;
use super::id::{BettorId, OutcomeId};
use super::ledger::LedgerSnapshot;
use super::money::Amount;

/// Settlement result for a single bet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BetResult {
    pub bettor: BettorId,
    pub amount: Amount,
    pub outcome: OutcomeId,
    pub won: bool,
    /// Scaled payout for winners, zero for losers.
    pub adjusted_payout: Amount,
    /// `adjusted_payout - amount`.
    pub profit: Decimal,
}

/// Full settlement of one pool against one winning outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementReport {
    pub winning_outcome: OutcomeId,
    pub total_pool: Amount,
    /// Sum of promised winnings on the winning outcome, before scaling.
    pub total_potential_payouts: Amount,
    /// One when the pool covers every promise, otherwise strictly below one.
    pub adjustment_factor: Decimal,
    /// Results in bet placement order.
    pub per_bet: Vec<BetResult>,
    pub platform_gain: Amount,
}

impl SettlementReport {
    /// Returns true if winners were scaled down to fit the pool.
    #[must_use]
    pub fn is_adjusted(&self) -> bool {
        self.adjustment_factor < Decimal::ONE
    }

    /// Sum of every adjusted payout.
    #[must_use]
    pub fn total_paid_out(&self) -> Amount {
        self.per_bet.iter().map(|r| r.adjusted_payout).sum()
    }

    /// Results for bets on the winning outcome.
    pub fn winners(&self) -> impl Iterator<Item = &BetResult> {
        self.per_bet.iter().filter(|r| r.won)
    }

    /// Results for bets on any other outcome.
    pub fn losers(&self) -> impl Iterator<Item = &BetResult> {
        self.per_bet.iter().filter(|r| !r.won)
    }
}

/// Settle `snapshot` with `winning_outcome` declared the winner.
///
/// Pure: the same snapshot and winner always produce an identical report.
///
/// # Errors
///
/// Returns [`InvalidOutcomeError`] if the snapshot has no outcomes or the
/// winner is not one of them.
pub fn settle(
    snapshot: &LedgerSnapshot,
    winning_outcome: &OutcomeId,
) -> Result<SettlementReport, InvalidOutcomeError> {
    snapshot.outcomes.check_winner(winning_outcome)?;

    let total_pool = snapshot.total_pool;
    let total_potential_payouts: Amount = snapshot
        .bets
        .iter()
        .filter(|bet| bet.backs(winning_outcome))
        .map(|bet| bet.potential_winnings())
        .sum();

    // The <= also covers the no-winners case, so the division below never sees zero.
    let adjustment_factor = if total_potential_payouts <= total_pool {
        Decimal::ONE
    } else {
        total_pool / total_potential_payouts
    };

    let per_bet = snapshot
        .bets
        .iter()
        .map(|bet| {
            let won = bet.backs(winning_outcome);
            let adjusted_payout = if won {
                bet.potential_winnings() * adjustment_factor
            } else {
                Decimal::ZERO
            };
            BetResult {
                bettor: bet.bettor().clone(),
                amount: bet.amount(),
                outcome: bet.outcome().clone(),
                won,
                adjusted_payout,
                profit: adjusted_payout - bet.amount(),
            }
        })
        .collect();

    // A scaled-down payout consumes the pool; drop decimal rounding residue.
    let platform_gain = (total_pool - total_potential_payouts * adjustment_factor).max(Decimal::ZERO);

    Ok(SettlementReport {
        winning_outcome: winning_outcome.clone(),
        total_pool,
        total_potential_payouts,
        adjustment_factor,
        per_bet,
        platform_gain,
    })
}
