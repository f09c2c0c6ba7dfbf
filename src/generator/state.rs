//! Per-generator sequencing state
//!
//! `SequenceState` holds the last issued millisecond and the sequence
//! counter within it. The transition logic is a pure function of (state,
//! observed time) so it can be unit tested without a clock.

use crate::codec::MAX_SEQUENCE;

/// Mutable sequencing state, owned by the generator behind its mutex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SequenceState {
    last_timestamp: u64,
    sequence: u16,
}

/// Outcome of observing the clock against the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tick {
    /// A (timestamp, sequence) slot was claimed
    Issued { timestamp: u64, sequence: u16 },
    /// The 12-bit sequence is exhausted for the current millisecond;
    /// state is unchanged, the caller must wait for the clock to advance
    Exhausted,
    /// The clock reads earlier than the last issued millisecond;
    /// state is unchanged
    Regressed { delta_ms: u64 },
}

impl SequenceState {
    pub(crate) const fn new() -> Self {
        Self {
            last_timestamp: 0,
            sequence: 0,
        }
    }

    /// Last millisecond an ID was issued for
    #[inline(always)]
    pub(crate) const fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    /// Advance the state for an observed time `now` (ms since epoch).
    ///
    /// On `Issued`, the state already reflects the claimed slot. On
    /// `Exhausted` and `Regressed` the state is untouched so the caller
    /// can retry after waiting.
    pub(crate) fn tick(&mut self, now: u64) -> Tick {
        if now < self.last_timestamp {
            return Tick::Regressed {
                delta_ms: self.last_timestamp - now,
            };
        }

        if now == self.last_timestamp {
            if self.sequence >= MAX_SEQUENCE {
                return Tick::Exhausted;
            }
            self.sequence += 1;
        } else {
            self.last_timestamp = now;
            self.sequence = 0;
        }

        Tick::Issued {
            timestamp: self.last_timestamp,
            sequence: self.sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_millisecond_starts_at_zero() {
        let mut state = SequenceState::new();
        assert_eq!(
            state.tick(1000),
            Tick::Issued {
                timestamp: 1000,
                sequence: 0
            }
        );
        assert_eq!(state.last_timestamp(), 1000);
    }

    #[test]
    fn test_same_millisecond_increments_sequence() {
        let mut state = SequenceState::new();
        state.tick(1000);
        assert_eq!(
            state.tick(1000),
            Tick::Issued {
                timestamp: 1000,
                sequence: 1
            }
        );
        assert_eq!(
            state.tick(1000),
            Tick::Issued {
                timestamp: 1000,
                sequence: 2
            }
        );
    }

    #[test]
    fn test_advance_resets_sequence() {
        let mut state = SequenceState::new();
        state.tick(1000);
        state.tick(1000);
        assert_eq!(
            state.tick(1001),
            Tick::Issued {
                timestamp: 1001,
                sequence: 0
            }
        );
    }

    #[test]
    fn test_sequence_exhaustion() {
        let mut state = SequenceState::new();
        for expected in 0..=MAX_SEQUENCE {
            match state.tick(1000) {
                Tick::Issued { sequence, .. } => assert_eq!(sequence, expected),
                other => panic!("unexpected tick at {expected}: {other:?}"),
            }
        }
        // 4097th request in the same millisecond must not issue
        assert_eq!(state.tick(1000), Tick::Exhausted);
        // State untouched; the next millisecond issues sequence 0
        assert_eq!(
            state.tick(1001),
            Tick::Issued {
                timestamp: 1001,
                sequence: 0
            }
        );
    }

    #[test]
    fn test_regression_reports_delta_and_keeps_state() {
        let mut state = SequenceState::new();
        state.tick(1000);
        assert_eq!(state.tick(990), Tick::Regressed { delta_ms: 10 });
        assert_eq!(state.last_timestamp(), 1000);
        // Catch-up to the same millisecond resumes the sequence
        assert_eq!(
            state.tick(1000),
            Tick::Issued {
                timestamp: 1000,
                sequence: 1
            }
        );
    }
}
