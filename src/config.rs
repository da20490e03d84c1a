//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - `trisum.toml` in the working directory, or the `--config` path
//! - environment variables prefixed with `TRISUM_`, double underscores
//!   separating nesting levels: `TRISUM_STRATEGY=iterative`,
//!   `TRISUM_LOGGING__DEFAULT=debug`
//!
//! The `--strategy` CLI flag overrides the loaded strategy last.

use std::collections::HashMap;
use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::sum::Strategy;

/// Name of the optional settings file, looked up in the working directory.
pub const CONFIG_FILE: &str = "trisum.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Strategy used by the bare read-compute-print cycle.
    #[serde(default)]
    pub strategy: Strategy,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level filter: `error`, `warn`, `info`, `debug`, or `trace`.
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `"trisum::input" = "trace"`.
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            strategy: Strategy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from defaults, `trisum.toml`, and environment.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration with an explicit settings file path.
    ///
    /// A missing file is not an error; the remaining layers still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("TRISUM_").map(|key| {
                // Double underscore separates nesting levels; single
                // underscores stay inside field names.
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }
}
