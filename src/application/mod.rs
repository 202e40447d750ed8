//! Application layer: shared betting rounds and the simulation driver.

pub mod round;
pub mod simulation;

pub use round::BettingRound;
pub use simulation::{
    seeded_rngs, BetGenerator, OutcomeChooser, ProposedBet, RandomBetGenerator, RoundSummary,
    Simulation, UniformOutcomeChooser,
};
