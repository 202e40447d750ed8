//! Validation errors for the pool ledger and settlement engine.
//!
//! Both error kinds are raised synchronously, before any state is touched.
//! A failed call leaves the ledger exactly as it was.
//!
//! # Examples
//!
//! ```
//! use parimutuel::domain::{InvalidBetError, OutcomeSet, PoolLedger};
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = PoolLedger::new(OutcomeSet::binary());
//! let result = ledger.place_bet("X", dec!(-5), "Team A Wins");
//!
//! assert!(matches!(result, Err(InvalidBetError::NonPositiveAmount { .. })));
//! assert!(ledger.is_empty());
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use super::id::OutcomeId;

/// A bet was rejected before it touched the pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBetError {
    /// Stakes must be strictly positive.
    #[error("bet amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// The amount could not be represented as a finite decimal.
    #[error("bet amount must be a finite number, got {raw}")]
    NonFiniteAmount {
        /// Textual form of the rejected input.
        raw: String,
    },

    /// The chosen outcome is not part of this pool.
    #[error("unknown outcome '{outcome}'")]
    UnknownOutcome {
        /// The rejected outcome.
        outcome: OutcomeId,
    },

    /// Every bet needs someone to pay out to.
    #[error("bettor name cannot be empty")]
    EmptyBettor,

    /// The pool totals would exceed the decimal range.
    #[error("bet of {amount} would overflow the pool totals")]
    Overflow {
        /// The rejected amount.
        amount: Decimal,
    },

    /// Adding the stake to the pool totals would round it.
    #[error("bet of {amount} cannot be added to the pool totals exactly")]
    PrecisionLoss {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// An outcome set or winning outcome was malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOutcomeError {
    /// A pool needs at least one outcome to settle against.
    #[error("outcome set cannot be empty")]
    EmptyOutcomeSet,

    /// Outcome names must be unique within a pool.
    #[error("duplicate outcome '{outcome}'")]
    DuplicateOutcome {
        /// The repeated outcome.
        outcome: OutcomeId,
    },

    /// A pool over a single outcome has nothing to bet against.
    #[error("a pool needs at least two outcomes, got only '{outcome}'")]
    SingleOutcome {
        /// The lone outcome.
        outcome: OutcomeId,
    },

    /// The winning outcome is not part of this pool.
    #[error("unknown winning outcome '{outcome}'")]
    UnknownOutcome {
        /// The rejected outcome.
        outcome: OutcomeId,
    },
}
