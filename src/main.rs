use clap::Parser;
use tracing::error;

use parimutuel::cli::{output, settle, simulate, validate, Cli, Commands};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.color.enabled(),
    ));

    let result = match &cli.command {
        Commands::Simulate(args) => simulate::execute(args),
        Commands::Settle(args) => settle::execute(args),
        Commands::Validate(args) => validate::execute(args),
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
