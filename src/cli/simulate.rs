//! Handler for the `simulate` command.

use tracing::info;

use super::{output, render, SimulateArgs};
use crate::application::{seeded_rngs, RandomBetGenerator, Simulation, UniformOutcomeChooser};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute `simulate`.
pub fn execute(args: &SimulateArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if let Some(rounds) = args.rounds {
        config.simulation.rounds = rounds;
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }
    config.validate()?;
    config.init_logging();

    let rounds = config.simulation.rounds;
    let seed = config.simulation.seed;
    let (bet_rng, winner_rng) = seeded_rngs(seed);
    info!(rounds, ?seed, players = config.simulation.players.len(), "Simulation starting");

    let mut simulation = Simulation::new(
        config.outcome_set()?,
        config.players(),
        RandomBetGenerator::new(bet_rng, config.simulation.min_bet, config.simulation.max_bet),
        UniformOutcomeChooser::new(winner_rng),
    );

    for round in 1..=rounds {
        let summary = simulation.run_round(round)?;
        if output::is_json() {
            for bet in &summary.bets {
                output::record("bet", bet)?;
            }
            output::record("settlement", &summary.report)?;
            continue;
        }

        output::section(&format!("--- Round {round} ---"));
        render::print_bets(&summary.bets);
        render::print_report(&summary.report, &summary.bets);
    }

    Ok(())
}
