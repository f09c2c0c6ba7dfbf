use chrono::{DateTime, Utc};

use crate::codec;
use crate::config::SnowGenConfig;
use crate::instance::InstanceId;

/// SnowGen component extractor, used for diagnostics and testing
#[derive(Debug, Copy, Clone)]
pub struct SnowGenExtractor {
    config: SnowGenConfig,
}

impl SnowGenExtractor {
    /// Create a new extractor with the given configuration
    pub(crate) fn new(config: SnowGenConfig) -> Self {
        Self { config }
    }

    /// Extract the timestamp component: milliseconds since the configured epoch
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        codec::decode(id).0
    }

    /// Extract the 10-bit instance code
    #[inline(always)]
    pub fn instance_code(&self, id: u64) -> u16 {
        codec::decode(id).1
    }

    /// Extract the cluster half of the instance code
    #[inline(always)]
    pub fn cluster_id(&self, id: u64) -> u8 {
        InstanceId::from_code(self.instance_code(id)).cluster_id()
    }

    /// Extract the worker half of the instance code
    #[inline(always)]
    pub fn worker_id(&self, id: u64) -> u8 {
        InstanceId::from_code(self.instance_code(id)).worker_id()
    }

    /// Extract the sequence component
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u16 {
        codec::decode(id).2
    }

    /// Decompose an ID into its components: timestamp, instance code, and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u16, u16) {
        codec::decode(id)
    }

    /// The UTC instant the ID was issued at, resolved against the epoch.
    ///
    /// Returns `None` only if the resulting instant is out of chrono's range.
    pub fn timestamp_utc(&self, id: u64) -> Option<DateTime<Utc>> {
        let unix_ms = self.timestamp(id) + self.config.epoch();
        DateTime::<Utc>::from_timestamp_millis(unix_ms as i64)
    }
}
