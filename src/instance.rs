//! Validated cluster/worker identity
//!
//! An `InstanceId` combines a 5-bit cluster ID and a 5-bit worker ID into
//! the 10-bit instance code embedded in every generated ID. Validation runs
//! once at construction; a generator cannot exist with an invalid identity.

use std::fmt;

use crate::error::SnowGenError;

/// Number of bits for the cluster component
pub const CLUSTER_BITS: u32 = 5;
/// Number of bits for the worker component
pub const WORKER_BITS: u32 = 5;
/// Maximum cluster ID (inclusive)
pub const MAX_CLUSTER_ID: u8 = (1 << CLUSTER_BITS) - 1;
/// Maximum worker ID (inclusive)
pub const MAX_WORKER_ID: u8 = (1 << WORKER_BITS) - 1;

/// Immutable cluster/worker identity of one generator instance.
///
/// Uniqueness of the combined code across the fleet is an operational
/// contract; the engine only enforces the field ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId {
    cluster_id: u8,
    worker_id: u8,
}

impl InstanceId {
    /// Create a new identity, validating that both components fit in 5 bits
    pub fn new(cluster_id: u8, worker_id: u8) -> Result<Self, SnowGenError> {
        if cluster_id > MAX_CLUSTER_ID {
            return Err(SnowGenError::InvalidClusterId {
                cluster_id,
                max: MAX_CLUSTER_ID,
            });
        }
        if worker_id > MAX_WORKER_ID {
            return Err(SnowGenError::InvalidWorkerId {
                worker_id,
                max: MAX_WORKER_ID,
            });
        }
        Ok(Self {
            cluster_id,
            worker_id,
        })
    }

    /// Rebuild an identity from a 10-bit instance code (diagnostics)
    #[inline]
    pub const fn from_code(code: u16) -> Self {
        Self {
            cluster_id: ((code >> WORKER_BITS) & MAX_CLUSTER_ID as u16) as u8,
            worker_id: (code & MAX_WORKER_ID as u16) as u8,
        }
    }

    /// Combined 10-bit instance code: `cluster_id << 5 | worker_id`
    #[inline(always)]
    pub const fn code(&self) -> u16 {
        ((self.cluster_id as u16) << WORKER_BITS) | self.worker_id as u16
    }

    #[inline(always)]
    pub const fn cluster_id(&self) -> u8 {
        self.cluster_id
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u8 {
        self.worker_id
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.cluster_id, self.worker_id)
    }
}
