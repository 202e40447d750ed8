//! Core domain types for parimutuel.
//!
//! ## Pool Types
//!
//! - [`PoolLedger`] - Running totals and the append-only bet book for one round
//! - [`LedgerSnapshot`] - Owned, fully committed view handed to settlement
//! - [`Bet`] - A recorded bet with its point-in-time odds
//! - [`BetQuote`] - Odds a stake would receive without recording it
//!
//! ## Settlement Types
//!
//! - [`settle`] - Pay winners out of a snapshot, scaling to stay solvent
//! - [`SettlementReport`] - Pool-level settlement figures
//! - [`BetResult`] - Per-bet payout and profit
//!
//! ## Identifier Types
//!
//! - [`BettorId`] - Who placed a bet
//! - [`OutcomeId`] - One of the mutually exclusive outcomes
//! - [`OutcomeSet`] - The validated outcomes a pool runs over

mod bet;
mod error;
mod id;
mod ledger;
pub mod money;
mod outcome;
mod settlement;

pub use bet::{Bet, BetQuote};
pub use error::{InvalidBetError, InvalidOutcomeError};
pub use id::{BettorId, OutcomeId};
pub use ledger::{LedgerSnapshot, PoolLedger};
pub use money::{Amount, Probability};
pub use outcome::{OutcomeSet, DEFAULT_OUTCOMES};
pub use settlement::{settle, BetResult, SettlementReport};
