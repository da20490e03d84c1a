use std::io;

use clap::Parser;
use tracing::debug;
use trisum::cli::{Cli, Commands, commands};
use trisum::{Settings, logging};

fn main() {
    let cli = Cli::parse();

    // A broken configuration degrades to defaults with a warning; the
    // read-compute-print contract still holds.
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default settings.");
        Settings::default()
    });

    logging::init_with_config(&settings.logging);

    let strategy = cli.strategy.unwrap_or(settings.strategy);
    debug!(%strategy, "strategy selected");

    let code = match cli.command {
        None => commands::sum::run(io::stdin().lock(), strategy),
        Some(Commands::Compare { count }) => commands::compare::run(count),
        Some(Commands::Config) => commands::config::run(&settings),
    };

    std::process::exit(code as i32);
}
