//! Configuration for the SnowGen generator

mod builder;

pub use builder::SnowGenConfigBuilder;
use builder::{
    DEFAULT_CLOCK_DRIFT_TOLERANCE_MS, DEFAULT_EPOCH_MS, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS,
    DEFAULT_SPIN_YIELD_EVERY,
};

/// Configuration for the SnowGen generator.
///
/// The bit layout (41-bit timestamp, 5+5 bit instance code, 12-bit
/// sequence) is fixed; configuration covers the epoch, the clock
/// regression tolerance, and the rollover wait tuning.
#[derive(Debug, Clone, Copy)]
pub struct SnowGenConfig {
    epoch_ms: u64,
    clock_drift_tolerance_ms: u64,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl SnowGenConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: SnowGenConfigBuilder) -> Self {
        Self {
            epoch_ms: b.epoch_ms,
            clock_drift_tolerance_ms: b.clock_drift_tolerance_ms,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowGenConfigBuilder {
        SnowGenConfigBuilder::new()
    }

    /// Epoch as milliseconds since the Unix epoch.
    ///
    /// Must never change once IDs have been issued for a deployment.
    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch_ms
    }

    /// Largest backward clock step tolerated by blocking instead of failing
    #[inline(always)]
    pub const fn clock_drift_tolerance_ms(&self) -> u64 {
        self.clock_drift_tolerance_ms
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for SnowGenConfig {
    fn default() -> Self {
        Self {
            epoch_ms: DEFAULT_EPOCH_MS,
            clock_drift_tolerance_ms: DEFAULT_CLOCK_DRIFT_TOLERANCE_MS,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
