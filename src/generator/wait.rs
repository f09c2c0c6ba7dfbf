//! Wait and backoff strategies for clock advancement
//!
//! Used when the sequence is exhausted within a millisecond (wait for the
//! next millisecond) and when a tolerated clock regression must catch back
//! up. Spin first with cooperative yields, then sleep with exponential
//! backoff.

use std::thread;
use std::time::Duration;

use crate::config::SnowGenConfig;

/// Maximum backoff duration in milliseconds
pub const MAX_BACKOFF_MS: u64 = 100;

/// Spin until `get_time()` reaches `target_ts`.
///
/// Returns Some(new_ts) once the target is reached, None if the configured
/// spin loops are exhausted first.
#[inline]
pub fn spin_until<F>(target_ts: u64, config: &SnowGenConfig, get_time: F) -> Option<u64>
where
    F: Fn() -> u64,
{
    if !config.spin_enabled() || config.spin_loops() == 0 {
        return None;
    }

    let yield_every = config.spin_yield_every();

    for i in 0..config.spin_loops() {
        let new_ts = get_time();
        if new_ts >= target_ts {
            return Some(new_ts);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep with exponential backoff until `get_time()` reaches `target_ts`
#[inline]
pub fn sleep_until<F>(target_ts: u64, mut backoff_ms: u64, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    loop {
        thread::sleep(Duration::from_millis(backoff_ms));
        let new_ts = get_time();
        if new_ts >= target_ts {
            return new_ts;
        }
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Calculate next backoff duration with exponential growth capped at MAX_BACKOFF_MS
#[inline(always)]
pub const fn next_backoff(current: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > MAX_BACKOFF_MS {
        MAX_BACKOFF_MS
    } else {
        next
    }
}
