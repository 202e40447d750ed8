//! Handler for the `settle` command.

use tracing::info;

use super::{output, render, SettleArgs};
use crate::application::{seeded_rngs, BettingRound, OutcomeChooser, UniformOutcomeChooser};
use crate::domain::OutcomeId;
use crate::error::Result;
use crate::infrastructure::bet_sheet::BetSheet;
use crate::infrastructure::config::Config;

/// Execute `settle`.
pub fn execute(args: &SettleArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    config.init_logging();

    let sheet = BetSheet::load(&args.bets)?;
    let outcomes = sheet.outcome_set(&config.outcome_set()?)?;
    let round = BettingRound::new(outcomes.clone());
    let bets = sheet.place_all(&round)?;
    round.close();
    info!(path = %args.bets.display(), bets = bets.len(), "Bet sheet loaded");

    let winner = match &args.winner {
        Some(name) => OutcomeId::new(name.as_str()),
        None => {
            let (_, winner_rng) = seeded_rngs(args.seed);
            UniformOutcomeChooser::new(winner_rng).choose(&outcomes)?
        }
    };
    let report = round.settle(&winner)?;

    if output::is_json() {
        for bet in &bets {
            output::record("bet", bet)?;
        }
        output::record("settlement", &report)?;
        return Ok(());
    }

    output::section("Bets");
    render::print_bets(&bets);
    render::print_report(&report, &bets);
    Ok(())
}
