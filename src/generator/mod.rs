//! Core SnowGen generator implementation
//!
//! Split into modules for testability:
//! - `state` - Sequencing state and its pure transition logic
//! - `wait` - Spin and backoff strategies for clock advancement
//! - `generate` - ID generation critical section

mod generate;
mod state;
mod wait;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::config::SnowGenConfig;
use crate::error::SnowGenError;
use crate::extractor::SnowGenExtractor;
use crate::instance::InstanceId;

use state::SequenceState;
use wait::{sleep_until, spin_until};

/// Coordination-free Snowflake-style ID generator.
///
/// One instance per process, identified by a validated [`InstanceId`].
/// `new_id`/`new_ids` are safe to call from many threads on a shared
/// reference; the full read-clock/advance-state/encode section runs under
/// an internal mutex.
#[derive(Debug)]
pub struct SnowGen<C: Clock = SystemClock> {
    pub(crate) state: Mutex<SequenceState>,
    stopped: AtomicBool,
    clock: C,

    pub instance: InstanceId,
    pub config: SnowGenConfig,
    pub extract: SnowGenExtractor,
}

impl SnowGen<SystemClock> {
    /// Create with default configuration and the system clock,
    /// validating the identity components
    pub fn new(cluster_id: u8, worker_id: u8) -> Result<Self, SnowGenError> {
        let instance = InstanceId::new(cluster_id, worker_id)?;
        Ok(Self::with_config(instance, SnowGenConfig::default()))
    }

    /// Create with custom configuration and the system clock
    pub fn with_config(instance: InstanceId, config: SnowGenConfig) -> Self {
        Self::with_clock(instance, config, SystemClock)
    }
}

impl<C: Clock> SnowGen<C> {
    /// Create with a caller-supplied clock, e.g. a deterministic one in tests
    pub fn with_clock(instance: InstanceId, config: SnowGenConfig, clock: C) -> Self {
        Self {
            state: Mutex::new(SequenceState::new()),
            stopped: AtomicBool::new(false),
            clock,
            instance,
            config,
            extract: SnowGenExtractor::new(config),
        }
    }

    /// Mark the generator stopped. Idempotent.
    ///
    /// The engine holds no background resource, so generation remains
    /// valid after `stop`; this only records the lifecycle transition for
    /// the embedding service.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Whether [`stop`](Self::stop) has been called
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Current time as milliseconds since the configured epoch.
    ///
    /// A clock reading earlier than the epoch is a configuration fault
    /// (the epoch lies in the future) and is reported as a regression of
    /// the full distance.
    #[inline(always)]
    pub(crate) fn elapsed_ms(&self) -> Result<u64, SnowGenError> {
        let now = self.clock.now_unix_ms();
        now.checked_sub(self.config.epoch())
            .ok_or_else(|| SnowGenError::ClockRegressed {
                delta_ms: self.config.epoch() - now,
            })
    }

    /// Infallible variant for wait loops; readings before the epoch
    /// saturate to 0, which simply keeps the wait going
    #[inline(always)]
    fn elapsed_ms_saturating(&self) -> u64 {
        self.clock
            .now_unix_ms()
            .saturating_sub(self.config.epoch())
    }

    /// Block until the clock reaches `target_ts` (ms since epoch)
    pub(crate) fn wait_until(&self, target_ts: u64) -> u64 {
        if let Some(new_ts) = spin_until(target_ts, &self.config, || self.elapsed_ms_saturating()) {
            return new_ts;
        }
        sleep_until(target_ts, 1, || self.elapsed_ms_saturating())
    }
}
