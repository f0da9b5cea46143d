use chrono::{TimeZone, Utc};
use flakeid::{layout, SnowflakeConfig, SnowflakeGenerator};

fn main() {
    // Count time from 2024-01-01 and run as node 42
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let config = SnowflakeConfig::builder()
        .epoch_datetime(epoch)
        .node_id(42)
        .unwrap()
        .spin_loops(128)
        .build();

    let generator = SnowflakeGenerator::new(config);

    println!("Generator configuration:");
    println!("  Epoch: {} ({})", generator.epoch(), epoch);
    println!("  Node ID: {} (of {})", generator.node_id(), layout::MAX_NODE_ID);
    println!("  Max sequence per ms: {}", layout::MAX_SEQUENCE);

    // Process-wide generator takes the first configuration it sees
    flakeid::init(config);

    match flakeid::try_generate() {
        Ok(id) => {
            let (ts, node, seq) = id.decompose();
            println!("\nGenerated ID: {}", id);
            println!("Components:");
            println!("  Timestamp: {} ms since epoch", ts);
            println!("  Node ID: {}", node);
            println!("  Sequence: {}", seq);
        }
        Err(e) => eprintln!("could not generate id: {e}"),
    }
}
