//! Runtime settings for the sampling loop.

use std::time::Duration;

/// Scheduler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Interval between two samples.
    pub tick_rate: Duration,
    /// Upper bound for a single `load` call.
    pub load_timeout: Duration,
}

impl Config {
    pub const DEFAULT_TICK_RATE: Duration = Duration::from_secs(1);
    pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Self::DEFAULT_TICK_RATE,
            load_timeout: Self::DEFAULT_LOAD_TIMEOUT,
        }
    }
}
