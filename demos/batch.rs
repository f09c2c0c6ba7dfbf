use snowgen::SnowGen;

fn main() {
    let generator = SnowGen::new(0, 1).unwrap();

    // A batch runs under one critical section and is strictly increasing
    let ids = generator.new_ids(10).unwrap();

    println!("Batch of {} IDs:", ids.len());
    for id in &ids {
        let (ts, _, seq) = generator.extract.decompose(*id);
        println!("  {id}  (timestamp {ts}, sequence {seq})");
    }

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    println!("strictly increasing: yes");
}
