//! Logging setup.
//!
//! `tracing` with per-module level configuration taken from
//! [`LoggingConfig`]; the `RUST_LOG` environment variable takes
//! precedence over configured levels:
//!
//! ```bash
//! RUST_LOG=debug trisum
//! RUST_LOG=trisum::input=trace trisum compare
//! ```
//!
//! All log output goes to stderr: stdout is reserved for the computed
//! result.

use std::sync::Once;

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Initialize logging with configuration.
///
/// Call once at startup. Safe to call multiple times; only the first call
/// takes effect.
///
/// The `RUST_LOG` environment variable takes precedence over config
/// settings.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        // RUST_LOG env var takes precedence over config
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            // Build filter string from config
            let mut filter_str = config.default.clone();
            for (module, level) in &config.modules {
                filter_str.push_str(&format!(",{module}={level}"));
            }
            EnvFilter::new(&filter_str)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            // stdout carries the result; diagnostics go to stderr
            .with_writer(std::io::stderr)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Initialize logging with default configuration.
///
/// Uses [`LoggingConfig::default`], which sets `warn` for quiet
/// operation. Use `RUST_LOG=debug` for verbose output.
pub fn init() {
    init_with_config(&LoggingConfig::default());
}
