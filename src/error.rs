use thiserror::Error;

/// Represents errors that can occur during SnowGen operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnowGenError {
    /// Error when cluster ID exceeds the maximum allowed value
    #[error("Cluster ID {cluster_id} is invalid. Maximum allowed value is {max}")]
    InvalidClusterId { cluster_id: u8, max: u8 },
    /// Error when worker ID exceeds the maximum allowed value
    #[error("Worker ID {worker_id} is invalid. Maximum allowed value is {max}")]
    InvalidWorkerId { worker_id: u8, max: u8 },
    /// Error when the clock moves backwards beyond the configured tolerance
    #[error("Clock moved backwards. Refusing to generate id for {delta_ms} milliseconds")]
    ClockRegressed { delta_ms: u64 },
    /// Error when the elapsed time no longer fits the 41-bit timestamp field
    #[error("Timestamp {elapsed_ms}ms since epoch overflows the 41-bit field (maximum {max_ms}ms)")]
    TimestampOverflow { elapsed_ms: u64, max_ms: u64 },
    /// Error when a batch stops partway; no IDs from the batch are returned
    #[error("Batch aborted at position {position}: {source}")]
    BatchAborted {
        position: usize,
        source: Box<SnowGenError>,
    },
}
