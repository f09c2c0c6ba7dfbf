//! ID generation critical section
//!
//! `new_id` and `new_ids` run the full read-clock/advance-state/encode
//! sequence under the generator's mutex, so each call is atomic with
//! respect to concurrent callers.

use std::sync::MutexGuard;

use tracing::{debug, warn};

use crate::clock::Clock;
use crate::codec::encode;
use crate::error::SnowGenError;

use super::state::{SequenceState, Tick};
use super::SnowGen;

impl<C: Clock> SnowGen<C> {
    /// Generate one ID.
    ///
    /// Fails with [`SnowGenError::ClockRegressed`] if the clock moved
    /// backwards beyond the configured tolerance, or with
    /// [`SnowGenError::TimestampOverflow`] once the deployment outlives
    /// the 41-bit timestamp field. Sequence exhaustion within a
    /// millisecond is absorbed by waiting for the next one and never
    /// surfaces as an error.
    pub fn new_id(&self) -> Result<u64, SnowGenError> {
        let mut state = self.lock_state();
        self.next_locked(&mut state)
    }

    /// Generate `count` strictly increasing IDs under a single critical
    /// section.
    ///
    /// Equivalent to `count` sequential [`new_id`](Self::new_id) calls
    /// against the same clock trace. All-or-nothing: on failure no IDs
    /// are returned and the error carries the position at which
    /// generation stopped. `count == 0` yields an empty Vec; bounding
    /// the request size is the caller's responsibility.
    pub fn new_ids(&self, count: usize) -> Result<Vec<u64>, SnowGenError> {
        let mut ids = Vec::with_capacity(count);
        let mut state = self.lock_state();
        for position in 0..count {
            match self.next_locked(&mut state) {
                Ok(id) => ids.push(id),
                Err(source) => {
                    return Err(SnowGenError::BatchAborted {
                        position,
                        source: Box::new(source),
                    })
                }
            }
        }
        Ok(ids)
    }

    /// Claim the next (timestamp, sequence) slot and encode it.
    ///
    /// Runs with the state mutex held. Loops only for the bounded
    /// rollover wait and the tolerance-bounded regression catch-up.
    fn next_locked(&self, state: &mut MutexGuard<'_, SequenceState>) -> Result<u64, SnowGenError> {
        loop {
            let now = self.elapsed_ms()?;
            match state.tick(now) {
                Tick::Issued {
                    timestamp,
                    sequence,
                } => return encode(timestamp, self.instance.code(), sequence),
                Tick::Exhausted => {
                    debug!(
                        timestamp = state.last_timestamp(),
                        "sequence exhausted, waiting for next millisecond"
                    );
                    self.wait_until(state.last_timestamp() + 1);
                }
                Tick::Regressed { delta_ms } => {
                    if delta_ms <= self.config.clock_drift_tolerance_ms() {
                        warn!(delta_ms, "clock moved backwards within tolerance, waiting");
                        self.wait_until(state.last_timestamp());
                    } else {
                        warn!(delta_ms, "clock moved backwards, rejecting generation");
                        return Err(SnowGenError::ClockRegressed { delta_ms });
                    }
                }
            }
        }
    }

    /// Lock the sequencing state, recovering it if a prior caller panicked
    fn lock_state(&self) -> MutexGuard<'_, SequenceState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
