//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};

use crate::sum::Strategy;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Parser)]
#[command(
    name = "trisum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sum the integers from 1 to n, three ways",
    long_about = "Reads one non-negative integer from standard input and prints the sum of\n\
                  1..=n. The same triangular number is computed by one of three strategies:\n\
                  the closed-form formula (constant time), loop accumulation (linear time),\n\
                  or the recursive definition (linear time and space).",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to a custom trisum.toml settings file
    #[arg(short, long, env = "TRISUM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Computing strategy for the bare read-compute-print cycle
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run every strategy and report results, agreement, and timing
    #[command(about = "Run every strategy and check they agree")]
    Compare {
        /// Value to sum to; omit to run the built-in verification table
        #[arg(value_name = "N")]
        count: Option<u64>,
    },

    /// Show current configuration
    #[command(about = "Display active settings")]
    Config,
}
