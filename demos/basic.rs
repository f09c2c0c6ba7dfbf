use snowgen::SnowGen;

fn main() {
    // Create a generator for cluster 1, worker 2
    let generator = SnowGen::new(1, 2).unwrap();

    let id1 = generator.new_id().unwrap();
    let id2 = generator.new_id().unwrap();
    let id3 = generator.new_id().unwrap();

    println!("Generated IDs (strictly increasing per instance):");
    for id in [id1, id2, id3] {
        print_id(id, &generator);
    }

    // Or extract components individually
    let ts = generator.extract.timestamp(id2);
    let code = generator.extract.instance_code(id2);
    let seq = generator.extract.sequence(id2);
    println!("\nComponents of the second ID:");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  Instance code: {code}");
    println!("  Sequence: {seq}");

    generator.stop();
}

fn print_id(id: u64, generator: &SnowGen) {
    let (since_epoch, code, sequence) = generator.extract.decompose(id);
    let datetime = generator.extract.timestamp_utc(id).unwrap();

    println!(
        "  ID: {id}, Timestamp: {since_epoch}, Human date: {datetime}, Instance: {code}, Sequence: {sequence}"
    );
}
