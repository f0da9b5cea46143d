use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use flakeid::{SnowflakeConfig, SnowflakeGenerator};

fn main() {
    // One generator shared by every thread; the internal lock serializes minting
    let config = SnowflakeConfig::builder().node_id(1).unwrap().build();
    let generator = Arc::new(SnowflakeGenerator::new(config));
    let mut handles = vec![];

    // Spawn multiple threads simulating concurrent ID consumers
    for thread_id in 0..4 {
        let gen = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = gen.generate();
                let (ts, node, seq) = id.decompose();

                println!(
                    "Thread {} generated ID {} (ts={}, node={}, seq={})",
                    thread_id, i, ts, node, seq
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());

    let mut ids: Vec<_> = all_ids.into_iter().collect();
    ids.sort_unstable();
    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0], "IDs not monotonically increasing!");
    }
    println!("All IDs are unique and monotonically increasing!");
}
