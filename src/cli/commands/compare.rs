//! Compare command - run every strategy, check agreement, report timing.
//!
//! With no value given, runs the built-in verification table; with a
//! value, evaluates every strategy at that point. Any disagreement
//! between strategies exits nonzero.

use std::time::Instant;

use console::style;

use crate::error::ExitCode;
use crate::sum::{ALL_STRATEGIES, sum_closed_form};

/// Known input/expected pairs for the verification run.
const VERIFICATION_TABLE: [(u64, u64); 6] = [
    (0, 0),
    (1, 1),
    (5, 15),
    (10, 55),
    (100, 5050),
    (1000, 500500),
];

/// Run the compare command.
pub fn run(count: Option<u64>) -> ExitCode {
    match count {
        Some(n) => compare_at(n),
        None => run_table(),
    }
}

/// Evaluate every strategy at `n` and check they agree.
fn compare_at(n: u64) -> ExitCode {
    println!("{}", style(format!("sum 1..={n}")).cyan().bold());

    let reference = sum_closed_form(n);
    let mut disagreement = false;
    for strategy in ALL_STRATEGIES {
        let start = Instant::now();
        let result = strategy.apply(n);
        let elapsed = start.elapsed();

        let mark = if result == reference {
            style("✓").green()
        } else {
            disagreement = true;
            style("✗").red()
        };
        println!("  {mark} {strategy:<12} {result} ({elapsed:.2?})");
    }

    if disagreement {
        eprintln!("Error: strategies disagree at n = {n}");
        ExitCode::GeneralError
    } else {
        ExitCode::Success
    }
}

/// Run the verification table through every strategy.
fn run_table() -> ExitCode {
    let mut failures = 0usize;

    for strategy in ALL_STRATEGIES {
        println!("{}", style(format!("{strategy} strategy")).cyan().bold());

        let start = Instant::now();
        let mut passed = 0usize;
        for (n, expected) in VERIFICATION_TABLE {
            let result = strategy.apply(n);
            if result == expected {
                passed += 1;
                println!("  {} sum({n}) = {result}", style("✓").green());
            } else {
                failures += 1;
                println!(
                    "  {} sum({n}) = {result}, expected {expected}",
                    style("✗").red()
                );
            }
        }
        let elapsed = start.elapsed();
        println!(
            "  passed {passed}/{} in {elapsed:.2?}\n",
            VERIFICATION_TABLE.len()
        );
    }

    if failures > 0 {
        eprintln!("Error: {failures} verification check(s) failed");
        ExitCode::GeneralError
    } else {
        ExitCode::Success
    }
}
