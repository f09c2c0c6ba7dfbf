//! Clock abstraction for SnowGen generation
//!
//! The engine's only external dependency is the current wall-clock time.
//! Keeping it behind a trait lets deterministic clocks drive the property
//! tests without real time passing.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of current wall-clock time in milliseconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now_unix_ms(&self) -> u64;
}

/// Default clock backed by `SystemTime`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now_unix_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System time before Unix epoch!")
            .as_millis() as u64
    }
}
