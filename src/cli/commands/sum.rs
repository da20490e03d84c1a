//! Default command - the bare read-compute-print cycle.

use std::io::Read;

use tracing::debug;

use crate::error::ExitCode;
use crate::input::read_count;
use crate::sum::Strategy;

/// Read one integer from `input`, sum `1..=n` with `strategy`, and print
/// the decimal result on stdout followed by a newline.
///
/// Diagnostics go to stderr; the returned exit code reflects the error
/// kind.
pub fn run<R: Read>(input: R, strategy: Strategy) -> ExitCode {
    match read_count(input) {
        Ok(n) => {
            debug!(n, %strategy, "input parsed");
            println!("{}", strategy.apply(n));
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Printed output is covered by the integration tests against the real
    // binary; here only the exit codes for in-memory readers.

    #[test]
    fn test_success_exit_code() {
        assert_eq!(run("5".as_bytes(), Strategy::ClosedForm), ExitCode::Success);
    }

    #[test]
    fn test_invalid_token_exit_code() {
        assert_eq!(
            run("abc".as_bytes(), Strategy::ClosedForm),
            ExitCode::InvalidInput
        );
    }

    #[test]
    fn test_empty_input_exit_code() {
        assert_eq!(run("".as_bytes(), Strategy::Iterative), ExitCode::InvalidInput);
    }
}
