//! Command-line interface definitions.
//!
//! Defines the CLI structure for the parimutuel application using `clap`.

pub mod output;
pub mod render;
pub mod settle;
pub mod simulate;
pub mod validate;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pari-mutuel pool odds and settlement
#[derive(Parser, Debug)]
#[command(name = "parimutuel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolve to a yes/no decision for stdout.
    #[must_use]
    pub fn enabled(&self) -> bool {
        match self {
            Self::Auto => std::io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Top-level subcommands for the parimutuel CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate betting rounds with random players and a random winner
    Simulate(SimulateArgs),

    /// Settle a pool from a bet sheet
    Settle(SettleArgs),

    /// Validate a configuration file
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "parimutuel.toml")]
    pub config: PathBuf,
}

/// Arguments for the `simulate` subcommand.
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Path to configuration file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "parimutuel.toml")]
    pub config: PathBuf,

    /// Override number of rounds
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Override RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Arguments for the `settle` subcommand.
#[derive(Parser, Debug)]
pub struct SettleArgs {
    /// Path to the bet sheet (TOML with [[bets]] entries)
    #[arg(short, long)]
    pub bets: PathBuf,

    /// Winning outcome; drawn uniformly at random when omitted
    #[arg(short, long)]
    pub winner: Option<String>,

    /// RNG seed for the winner draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to configuration file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "parimutuel.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simulate_with_overrides() {
        let cli = Cli::try_parse_from(["parimutuel", "simulate", "--rounds", "3", "--seed", "7"])
            .unwrap();

        match cli.command {
            Commands::Simulate(args) => {
                assert_eq!(args.rounds, Some(3));
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.config, PathBuf::from("parimutuel.toml"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn settle_requires_bet_sheet() {
        assert!(Cli::try_parse_from(["parimutuel", "settle"]).is_err());
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from([
            "parimutuel",
            "settle",
            "--bets",
            "bets.toml",
            "--winner",
            "Team A Wins",
            "--json",
            "--color",
            "never",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(matches!(cli.color, ColorChoice::Never));
        assert!(!cli.color.enabled());
    }
}
