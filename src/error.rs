//! Error types for benchmark configuration.

use thiserror::Error;

/// Result type for benchmark construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rejected benchmark or driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A pass needs at least one buffer slot to pick from.
    #[error("buffer pool must hold at least one buffer")]
    EmptyPool,

    /// The driver averages over its runs.
    #[error("at least one benchmark run is required")]
    NoRuns,
}
