use snowgen::{InstanceId, SnowGen, SnowGenConfig};
use std::collections::HashSet;

fn main() {
    // Three instances of the same fleet: one cluster, distinct workers.
    // In production each runs in its own process; the identity is assigned
    // externally and must be unique fleet-wide.
    let config = SnowGenConfig::default();
    let generators: Vec<SnowGen> = (0..3)
        .map(|worker_id| {
            let instance = InstanceId::new(1, worker_id).unwrap();
            SnowGen::with_config(instance, config)
        })
        .collect();

    let mut all_ids = HashSet::new();
    for generator in &generators {
        for id in generator.new_ids(1000).unwrap() {
            assert!(all_ids.insert(id), "collision across instances: {id}");
        }
    }

    println!(
        "{} IDs from {} instances, no collisions",
        all_ids.len(),
        generators.len()
    );

    for generator in &generators {
        let id = generator.new_id().unwrap();
        println!(
            "instance {} issued {id} (cluster {}, worker {})",
            generator.instance,
            generator.extract.cluster_id(id),
            generator.extract.worker_id(id),
        );
    }
}
