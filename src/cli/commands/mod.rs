//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and returns the
//! [`ExitCode`](crate::error::ExitCode) the process should end with;
//! `main` performs the single `std::process::exit`.

pub mod compare;
pub mod config;
pub mod sum;
