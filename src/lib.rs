//! # SnowGen
//!
//! A coordination-free Snowflake-style ID engine with a 41-bit timestamp
//! and a 5+5 bit cluster/worker identity.
//!
//! Generate 64-bit unique identifiers that are:
//! - 🔒 Unique across every instance in a cluster
//! - 📈 Monotonically increasing per instance
//! - ⏱ Roughly time-ordered cluster-wide
//! - 🧵 Thread-safe behind a `&self` API
//! - 🌐 Coordination-free at request time

#![forbid(unsafe_code)]

mod clock;
mod codec;
mod config;
mod error;
mod extractor;
mod generator;
mod instance;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use codec::{
    decode, encode, INSTANCE_BITS, MAX_INSTANCE_CODE, MAX_SEQUENCE, MAX_TIMESTAMP_MS,
    SEQUENCE_BITS, TIMESTAMP_BITS,
};
pub use config::{SnowGenConfig, SnowGenConfigBuilder};
pub use error::SnowGenError;
pub use extractor::SnowGenExtractor;
pub use generator::SnowGen;
pub use instance::{InstanceId, CLUSTER_BITS, MAX_CLUSTER_ID, MAX_WORKER_ID, WORKER_BITS};
