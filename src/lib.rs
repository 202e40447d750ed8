//! Parimutuel - dynamic odds and settlement for a shared betting pool.
//!
//! Every bet is priced against the pool as it stands when the bet lands:
//! the chosen outcome's share of the pool is the bet's implied probability,
//! and the stake divided by that share is its potential winnings. At
//! settlement, winners are paid those winnings, scaled down together when
//! the promises exceed the pool, so the operator never pays out more than
//! it collected.
//!
//! # Modules
//!
//! - [`domain`] - Pool ledger, bets, and the settlement engine
//! - [`application`] - Thread-safe betting rounds and the simulation driver
//! - [`infrastructure`] - TOML configuration, logging, and bet sheets
//! - [`cli`] - Command-line handlers and text rendering
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use parimutuel::domain::{settle, OutcomeSet, PoolLedger};
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = PoolLedger::new(OutcomeSet::binary());
//! ledger.place_bet("Bob", dec!(100), "Team B Wins").unwrap();
//! let alice = ledger.place_bet("Alice", dec!(100), "Team A Wins").unwrap();
//! assert_eq!(alice.potential_winnings(), dec!(200));
//!
//! let report = settle(&ledger.snapshot(), &"Team A Wins".into()).unwrap();
//! assert_eq!(report.per_bet[1].profit, dec!(100));
//! assert_eq!(report.platform_gain, dec!(0));
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
