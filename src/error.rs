//! Error types and process exit codes.

use thiserror::Error;

pub type SumResult<T> = Result<T, SumError>;

/// Errors from one read-compute-print cycle.
///
/// None of these are recovered: they propagate to the binary edge, get
/// printed to stderr, and map to an [`ExitCode`].
#[derive(Error, Debug)]
pub enum SumError {
    #[error(
        "no input: expected one whitespace-delimited integer on stdin\n\
         Suggestion: pipe a number in, e.g. `echo 42 | trisum`"
    )]
    EmptyInput,

    #[error(
        "invalid input '{token}': not a non-negative integer that fits 64 bits\n\
         Suggestion: pass a single base-10 integer between 0 and 18446744073709551615"
    )]
    InputFormat {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("failed to read standard input: {0}")]
    Io(#[from] std::io::Error),
}

impl SumError {
    /// Exit code the process should terminate with for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::EmptyInput | Self::InputFormat { .. } => ExitCode::InvalidInput,
            Self::Io(_) => ExitCode::GeneralError,
        }
    }
}

/// Process exit codes for the trisum binary.
///
/// Commands return one of these; `main` performs the single
/// `std::process::exit(code as i32)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Result printed, or command completed with all checks passing.
    Success = 0,
    /// Failure not covered by a more specific code.
    GeneralError = 1,
    /// Standard input did not hold a parseable non-negative integer.
    InvalidInput = 2,
}
