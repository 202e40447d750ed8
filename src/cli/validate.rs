//! Handler for the `validate` command.

use super::{output, ConfigPathArg};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute `validate`.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;
    let outcomes = config.outcome_set()?;

    output::section("Configuration");
    output::field("Path", args.config.display());
    output::field(
        "Outcomes",
        outcomes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    );
    output::field("Players", config.simulation.players.len());
    output::field("Rounds", config.simulation.rounds);
    output::field(
        "Bet range",
        format!("${}-${}", config.simulation.min_bet, config.simulation.max_bet),
    );
    output::success("Configuration is valid");
    Ok(())
}
