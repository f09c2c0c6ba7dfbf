use rand::Rng;

use crate::codec::{decode, encode};
use crate::*;

#[test]
fn test_roundtrip_randomized() {
    let mut rng = rand::rng();

    for _ in 0..10_000 {
        let timestamp = rng.random_range(0..=MAX_TIMESTAMP_MS);
        let code = rng.random_range(0..=MAX_INSTANCE_CODE);
        let sequence = rng.random_range(0..=MAX_SEQUENCE);

        let id = encode(timestamp, code, sequence).unwrap();
        assert_eq!(decode(id), (timestamp, code, sequence));
    }
}

#[test]
fn test_field_widths() {
    assert_eq!(TIMESTAMP_BITS + INSTANCE_BITS + SEQUENCE_BITS, 63);
    assert_eq!(MAX_TIMESTAMP_MS, (1 << 41) - 1);
    assert_eq!(MAX_INSTANCE_CODE, 1023);
    assert_eq!(MAX_SEQUENCE, 4095);
}

#[test]
fn test_ordering_follows_fields() {
    // Timestamp dominates instance code and sequence
    let low_ts = encode(1000, MAX_INSTANCE_CODE, MAX_SEQUENCE).unwrap();
    let high_ts = encode(1001, 0, 0).unwrap();
    assert!(high_ts > low_ts);

    // Within a millisecond, sequence orders IDs
    let seq0 = encode(1000, 34, 0).unwrap();
    let seq1 = encode(1000, 34, 1).unwrap();
    assert!(seq1 > seq0);
}

#[test]
fn test_zero_id() {
    let id = encode(0, 0, 0).unwrap();
    assert_eq!(id, 0);
    assert_eq!(decode(0), (0, 0, 0));
}
