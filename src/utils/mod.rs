//! Utility modules for timing, seeding and logging.

pub mod bench;
pub mod clock;
pub mod logging;

// Re-export commonly used items
pub use bench::{seeded_rng, time_seed};
pub use clock::{read_realtime, Clock, Timestamp};
