//! Config command - display active settings.

use console::style;

use crate::config::Settings;
use crate::error::ExitCode;

/// Print the active settings as pretty TOML.
pub fn run(settings: &Settings) -> ExitCode {
    match toml::to_string_pretty(settings) {
        Ok(rendered) => {
            println!("{}", style("Active settings").cyan().bold());
            print!("{rendered}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error displaying settings: {e}");
            ExitCode::GeneralError
        }
    }
}
