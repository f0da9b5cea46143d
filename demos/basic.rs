use flakeid::{Snowflake, SnowflakeConfig, SnowflakeGenerator};

fn main() {
    // Create a generator with node ID 1
    let config = SnowflakeConfig::builder().node_id(1).unwrap().build();
    let generator = SnowflakeGenerator::new(config);

    // Generate some IDs
    let id1 = generator.generate();
    let id2 = generator.generate();
    let id3 = generator.generate();

    println!("Generated IDs (guaranteed to be monotonic):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components individually
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {} ms since epoch", id2.timestamp());
    println!("  Node ID: {}", id2.node_id());
    println!("  Sequence: {}", id2.sequence());

    // The process-wide generator needs no setup
    println!("\nProcess-wide ID: {}", flakeid::generate());
}

fn print_id(id: Snowflake, generator: &SnowflakeGenerator) {
    let (since_epoch, node, sequence) = id.decompose();
    let timestamp = id.unix_millis(generator.epoch()).unwrap_or_default();
    let datetime = id
        .datetime(generator.epoch())
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    println!("  ID: {id}, Since epoch: {since_epoch}, Timestamp: {timestamp}, Human date: {datetime}, Node ID: {node}, Sequence: {sequence}");
}
