//! Bit layout and pure encode/decode
//!
//! Layout, most to least significant: 1 unused sign bit, 41-bit timestamp
//! (milliseconds since the configured epoch), 10-bit instance code, 12-bit
//! sequence. The layout is fixed; only the epoch is configurable.

use crate::error::SnowGenError;

/// Number of bits for the timestamp field
pub const TIMESTAMP_BITS: u32 = 41;
/// Number of bits for the combined instance code
pub const INSTANCE_BITS: u32 = 10;
/// Number of bits for the intra-millisecond sequence
pub const SEQUENCE_BITS: u32 = 12;

/// Maximum milliseconds since epoch the timestamp field can hold (~69 years)
pub const MAX_TIMESTAMP_MS: u64 = (1 << TIMESTAMP_BITS) - 1;
/// Maximum instance code (inclusive)
pub const MAX_INSTANCE_CODE: u16 = (1 << INSTANCE_BITS) - 1;
/// Maximum sequence value within one millisecond (inclusive)
pub const MAX_SEQUENCE: u16 = (1 << SEQUENCE_BITS) - 1;

pub(crate) const TIMESTAMP_SHIFT: u32 = INSTANCE_BITS + SEQUENCE_BITS;
pub(crate) const INSTANCE_SHIFT: u32 = SEQUENCE_BITS;

/// Pack (elapsed ms, instance code, sequence) into a 64-bit ID.
///
/// Fails with `TimestampOverflow` once the elapsed time no longer fits the
/// 41-bit field, which is the deployment's designed end of life.
#[inline]
pub fn encode(elapsed_ms: u64, instance_code: u16, sequence: u16) -> Result<u64, SnowGenError> {
    if elapsed_ms > MAX_TIMESTAMP_MS {
        return Err(SnowGenError::TimestampOverflow {
            elapsed_ms,
            max_ms: MAX_TIMESTAMP_MS,
        });
    }
    Ok((elapsed_ms << TIMESTAMP_SHIFT)
        | ((instance_code as u64 & MAX_INSTANCE_CODE as u64) << INSTANCE_SHIFT)
        | (sequence as u64 & MAX_SEQUENCE as u64))
}

/// Exact inverse of [`encode`]: (elapsed ms, instance code, sequence)
#[inline]
pub const fn decode(id: u64) -> (u64, u16, u16) {
    let elapsed_ms = (id >> TIMESTAMP_SHIFT) & MAX_TIMESTAMP_MS;
    let instance_code = ((id >> INSTANCE_SHIFT) & MAX_INSTANCE_CODE as u64) as u16;
    let sequence = (id & MAX_SEQUENCE as u64) as u16;
    (elapsed_ms, instance_code, sequence)
}
