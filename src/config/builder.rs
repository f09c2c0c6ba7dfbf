//! SnowGenConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::SnowGenConfig;

/// Default configuration values
pub(super) const DEFAULT_EPOCH_MS: u64 = 1577836800000; // January 1, 2020 UTC
pub(super) const DEFAULT_CLOCK_DRIFT_TOLERANCE_MS: u64 = 0;
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for SnowGenConfig
#[derive(Debug)]
pub struct SnowGenConfigBuilder {
    pub(super) epoch_ms: u64,
    pub(super) clock_drift_tolerance_ms: u64,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl SnowGenConfigBuilder {
    /// Create a new SnowGenConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch_ms: DEFAULT_EPOCH_MS,
            clock_drift_tolerance_ms: DEFAULT_CLOCK_DRIFT_TOLERANCE_MS,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set a custom epoch timestamp in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch_ms: u64) -> Self {
        self.epoch_ms = epoch_ms;
        self
    }

    /// Set the epoch from a UTC instant.
    ///
    /// Instants before the Unix epoch clamp to 0.
    pub fn epoch_utc(mut self, instant: DateTime<Utc>) -> Self {
        self.epoch_ms = instant.timestamp_millis().max(0) as u64;
        self
    }

    /// Set the largest backward clock step tolerated by blocking until the
    /// clock catches up. Regressions beyond it fail the call. Default 0:
    /// any regression is an error.
    pub const fn clock_drift_tolerance_ms(mut self, tolerance_ms: u64) -> Self {
        self.clock_drift_tolerance_ms = tolerance_ms;
        self
    }

    /// Enable or disable micro spin before sleep on sequence exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final SnowGenConfig
    pub fn build(self) -> SnowGenConfig {
        SnowGenConfig::from_builder(self)
    }
}

impl Default for SnowGenConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
