//! Demo driver: random bettors, random winner, one settlement per round.
//!
//! Randomness lives behind two small traits so the pool math stays
//! deterministic under test:
//!
//! - [`BetGenerator`] proposes a stake and side for each player
//! - [`OutcomeChooser`] draws the winning outcome
//!
//! Each round starts from an empty pool; nothing carries over.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use tracing::info;

use super::round::BettingRound;
use crate::domain::{Amount, Bet, BettorId, InvalidOutcomeError, OutcomeId, OutcomeSet, SettlementReport};
use crate::error::RoundError;

/// Offset applied to the seed for the winner draw, so bets and winner use
/// independent streams.
const CHOOSER_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// A stake and side proposed for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposedBet {
    pub amount: Amount,
    pub outcome: OutcomeId,
}

/// Source of bets for the simulation.
pub trait BetGenerator {
    /// Propose a bet for `bettor`, or `None` to sit the round out.
    fn next_bet(&mut self, bettor: &BettorId, outcomes: &OutcomeSet) -> Option<ProposedBet>;
}

/// Source of the winning outcome.
pub trait OutcomeChooser {
    /// Pick the winner.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOutcomeError::EmptyOutcomeSet`] if there is nothing
    /// to choose from.
    fn choose(&mut self, outcomes: &OutcomeSet) -> Result<OutcomeId, InvalidOutcomeError>;
}

/// Whole-dollar stakes drawn uniformly from `[min_bet, max_bet]` on a
/// uniformly chosen side.
#[derive(Debug)]
pub struct RandomBetGenerator<R> {
    rng: R,
    min_bet: u32,
    max_bet: u32,
}

impl<R: Rng> RandomBetGenerator<R> {
    /// Create a generator. Bounds are swapped if given in reverse.
    pub fn new(rng: R, min_bet: u32, max_bet: u32) -> Self {
        Self {
            rng,
            min_bet: min_bet.min(max_bet),
            max_bet: min_bet.max(max_bet),
        }
    }
}

impl<R: Rng> BetGenerator for RandomBetGenerator<R> {
    fn next_bet(&mut self, _bettor: &BettorId, outcomes: &OutcomeSet) -> Option<ProposedBet> {
        let amount = Decimal::from(self.rng.gen_range(self.min_bet..=self.max_bet));
        let outcome = outcomes.as_slice().choose(&mut self.rng)?.clone();
        Some(ProposedBet { amount, outcome })
    }
}

/// Uniform draw over the outcome set.
#[derive(Debug)]
pub struct UniformOutcomeChooser<R> {
    rng: R,
}

impl<R: Rng> UniformOutcomeChooser<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> OutcomeChooser for UniformOutcomeChooser<R> {
    fn choose(&mut self, outcomes: &OutcomeSet) -> Result<OutcomeId, InvalidOutcomeError> {
        outcomes
            .as_slice()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(InvalidOutcomeError::EmptyOutcomeSet)
    }
}

/// Random number generators for a simulation, seeded when reproducibility
/// is wanted.
#[must_use]
pub fn seeded_rngs(seed: Option<u64>) -> (StdRng, StdRng) {
    match seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed ^ CHOOSER_STREAM),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    }
}

/// Everything that happened in one simulated round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// One-based round number.
    pub round: u32,
    /// Bets in placement order, with the odds each was given.
    pub bets: Vec<Bet>,
    pub report: SettlementReport,
}

/// Runs independent betting rounds for a fixed roster of players.
pub struct Simulation<G, C> {
    outcomes: OutcomeSet,
    players: Vec<BettorId>,
    generator: G,
    chooser: C,
}

impl<G: BetGenerator, C: OutcomeChooser> Simulation<G, C> {
    pub fn new(outcomes: OutcomeSet, players: Vec<BettorId>, generator: G, chooser: C) -> Self {
        Self {
            outcomes,
            players,
            generator,
            chooser,
        }
    }

    /// Play one round: every player bets once, then a winner is drawn and
    /// the pool is settled.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError`] if a proposed bet is invalid or the winner
    /// cannot be drawn.
    pub fn run_round(&mut self, round: u32) -> Result<RoundSummary, RoundError> {
        info!(round, players = self.players.len(), "Round started");
        let betting = BettingRound::new(self.outcomes.clone());

        let mut bets = Vec::with_capacity(self.players.len());
        for player in &self.players {
            let Some(proposed) = self.generator.next_bet(player, &self.outcomes) else {
                continue;
            };
            bets.push(betting.place_bet(player, proposed.amount, proposed.outcome)?);
        }

        betting.close();
        let winner = self.chooser.choose(&self.outcomes)?;
        info!(round, winning_outcome = %winner, "Winner drawn");
        let report = betting.settle(&winner)?;

        Ok(RoundSummary {
            round,
            bets,
            report,
        })
    }

    /// Play `rounds` rounds in sequence, numbered from one.
    ///
    /// # Errors
    ///
    /// Stops at the first round that fails.
    pub fn run(&mut self, rounds: u32) -> Result<Vec<RoundSummary>, RoundError> {
        (1..=rounds).map(|round| self.run_round(round)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct Scripted(Vec<ProposedBet>);

    impl BetGenerator for Scripted {
        fn next_bet(&mut self, _bettor: &BettorId, _outcomes: &OutcomeSet) -> Option<ProposedBet> {
            if self.0.is_empty() {
                None
            } else {
                Some(self.0.remove(0))
            }
        }
    }

    struct Fixed(&'static str);

    impl OutcomeChooser for Fixed {
        fn choose(&mut self, _outcomes: &OutcomeSet) -> Result<OutcomeId, InvalidOutcomeError> {
            Ok(OutcomeId::from(self.0))
        }
    }

    fn players(names: &[&str]) -> Vec<BettorId> {
        names.iter().copied().map(BettorId::from).collect()
    }

    #[test]
    fn random_generator_stays_within_bounds() {
        let mut generator = RandomBetGenerator::new(StdRng::seed_from_u64(7), 10, 100);
        let outcomes = OutcomeSet::binary();
        let bettor = BettorId::from("Alice");

        for _ in 0..500 {
            let bet = generator.next_bet(&bettor, &outcomes).unwrap();
            assert!(bet.amount >= dec!(10) && bet.amount <= dec!(100));
            assert!(outcomes.contains(&bet.outcome));
        }
    }

    #[test]
    fn random_generator_swaps_reversed_bounds() {
        let mut generator = RandomBetGenerator::new(StdRng::seed_from_u64(7), 50, 20);
        let bet = generator
            .next_bet(&BettorId::from("Alice"), &OutcomeSet::binary())
            .unwrap();

        assert!(bet.amount >= dec!(20) && bet.amount <= dec!(50));
    }

    #[test]
    fn uniform_chooser_hits_every_outcome() {
        let mut chooser = UniformOutcomeChooser::new(StdRng::seed_from_u64(11));
        let outcomes = OutcomeSet::binary();

        let draws: Vec<OutcomeId> = (0..200).map(|_| chooser.choose(&outcomes).unwrap()).collect();

        for outcome in &outcomes {
            assert!(draws.contains(outcome), "never drew {outcome}");
        }
    }

    #[test]
    fn scripted_round_settles_against_chosen_winner() {
        let script = Scripted(vec![
            ProposedBet {
                amount: dec!(100),
                outcome: "Team B Wins".into(),
            },
            ProposedBet {
                amount: dec!(100),
                outcome: "Team A Wins".into(),
            },
        ]);
        let mut simulation = Simulation::new(
            OutcomeSet::binary(),
            players(&["Bob", "Alice"]),
            script,
            Fixed("Team A Wins"),
        );

        let summary = simulation.run_round(1).unwrap();

        assert_eq!(summary.bets.len(), 2);
        assert_eq!(summary.report.total_pool, dec!(200));
        assert_eq!(summary.report.per_bet[1].profit, dec!(100));
        assert_eq!(summary.report.platform_gain, dec!(0));
    }

    #[test]
    fn players_without_a_bet_sit_out() {
        let script = Scripted(vec![ProposedBet {
            amount: dec!(25),
            outcome: "Team A Wins".into(),
        }]);
        let mut simulation = Simulation::new(
            OutcomeSet::binary(),
            players(&["Alice", "Bob", "Dave"]),
            script,
            Fixed("Team A Wins"),
        );

        let summary = simulation.run_round(1).unwrap();

        assert_eq!(summary.bets.len(), 1);
        assert_eq!(summary.report.total_pool, dec!(25));
    }

    #[test]
    fn chooser_returning_unknown_outcome_fails_the_round() {
        let mut simulation = Simulation::new(
            OutcomeSet::binary(),
            players(&["Alice"]),
            Scripted(vec![]),
            Fixed("Draw"),
        );

        assert!(matches!(
            simulation.run_round(1),
            Err(RoundError::Outcome(_))
        ));
    }

    #[test]
    fn rounds_do_not_carry_over() {
        let (bets, winner) = seeded_rngs(Some(42));
        let mut simulation = Simulation::new(
            OutcomeSet::binary(),
            players(&["Alice", "Bob", "Dave"]),
            RandomBetGenerator::new(bets, 10, 100),
            UniformOutcomeChooser::new(winner),
        );

        let summaries = simulation.run(3).unwrap();

        assert_eq!(summaries.len(), 3);
        for summary in &summaries {
            let staked: Decimal = summary.bets.iter().map(Bet::amount).sum();
            assert_eq!(summary.report.total_pool, staked);
        }
        assert_eq!(
            summaries.iter().map(|s| s.round).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn same_seed_replays_identically() {
        let run = |seed| {
            let (bets, winner) = seeded_rngs(Some(seed));
            Simulation::new(
                OutcomeSet::binary(),
                players(&["Alice", "Bob", "Dave", "Eve"]),
                RandomBetGenerator::new(bets, 10, 100),
                UniformOutcomeChooser::new(winner),
            )
            .run(2)
            .unwrap()
        };

        assert_eq!(run(1234), run(1234));
    }
}
