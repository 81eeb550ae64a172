//! Diagnostic logging for the benchmark binary.
//!
//! Built on `tracing`. Everything goes to stderr so that stdout carries only
//! the report blocks and the summary line.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level when `RUST_LOG` is unset
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: Level::WARN }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(config.level.into()))
}

/// Install the global stderr subscriber.
///
/// Returns false if a subscriber was already installed.
pub fn init_logging(config: LogConfig) -> bool {
    fmt()
        .with_env_filter(build_filter(&config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
