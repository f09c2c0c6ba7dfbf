use crate::*;

#[test]
fn test_valid_bounds() {
    assert!(InstanceId::new(0, 0).is_ok());
    assert!(InstanceId::new(31, 31).is_ok());
    assert!(InstanceId::new(0, 31).is_ok());
    assert!(InstanceId::new(31, 0).is_ok());
}

#[test]
fn test_cluster_out_of_range() {
    let err = InstanceId::new(32, 0).unwrap_err();
    assert_eq!(
        err,
        SnowGenError::InvalidClusterId {
            cluster_id: 32,
            max: 31
        }
    );
}

#[test]
fn test_worker_out_of_range() {
    let err = InstanceId::new(0, 255).unwrap_err();
    assert_eq!(
        err,
        SnowGenError::InvalidWorkerId {
            worker_id: 255,
            max: 31
        }
    );
}

#[test]
fn test_code_packing() {
    let instance = InstanceId::new(1, 2).unwrap();
    assert_eq!(instance.code(), 34);

    let max = InstanceId::new(31, 31).unwrap();
    assert_eq!(max.code(), MAX_INSTANCE_CODE);
}

#[test]
fn test_from_code_roundtrip() {
    for cluster_id in [0u8, 1, 15, 31] {
        for worker_id in [0u8, 2, 16, 31] {
            let instance = InstanceId::new(cluster_id, worker_id).unwrap();
            let rebuilt = InstanceId::from_code(instance.code());
            assert_eq!(rebuilt, instance);
            assert_eq!(rebuilt.cluster_id(), cluster_id);
            assert_eq!(rebuilt.worker_id(), worker_id);
        }
    }
}

#[test]
fn test_display() {
    let instance = InstanceId::new(1, 2).unwrap();
    assert_eq!(instance.to_string(), "1/2");
}

#[test]
fn test_generator_rejects_invalid_identity() {
    assert!(SnowGen::new(32, 0).is_err());
    assert!(SnowGen::new(0, 32).is_err());
    assert!(SnowGen::new(5, 5).is_ok());
}
