pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod sum;

pub use config::Settings;
pub use error::{ExitCode, SumError, SumResult};
pub use input::{parse_count, read_count};
pub use sum::{ALL_STRATEGIES, Strategy, sum_closed_form, sum_iterative, sum_recursive};
