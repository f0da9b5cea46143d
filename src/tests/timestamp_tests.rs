//! Timestamp accuracy and behavior tests against the system clock

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{
        assert_ids_monotonic, assert_timestamp_accurate, assert_unique_ids, wall_clock_ms,
    };
    use crate::*;
    use std::collections::HashSet;
    use std::thread;
    use std::time::Duration;

    /// Slack for wall-clock checks; scheduler stalls on busy machines easily
    /// exceed a few milliseconds
    const CLOCK_SLACK_MS: u64 = 250;

    fn default_generator() -> SnowflakeGenerator {
        SnowflakeGenerator::new(SnowflakeConfig::default())
    }

    #[test]
    fn test_timestamp_reflects_wall_clock() {
        let g = default_generator();
        let ts = g.generate().timestamp();
        assert_timestamp_accurate(ts, g.epoch(), CLOCK_SLACK_MS);
    }

    #[test]
    fn test_epoch_now_starts_near_zero() {
        let now = chrono::Utc::now().timestamp_millis();
        let cfg = SnowflakeConfig::builder().epoch(now).node_id(1).unwrap().build();
        let g = SnowflakeGenerator::new(cfg);
        assert!(g.generate().timestamp() < CLOCK_SLACK_MS);
    }

    #[test]
    fn test_timestamp_advances_with_real_sleep() {
        let g = default_generator();
        let ts1 = g.generate().timestamp();
        thread::sleep(Duration::from_millis(100));
        let ts2 = g.generate().timestamp();

        let diff = ts2 - ts1;
        // sleep never returns early, it may overshoot
        assert!(
            (99..=100 + CLOCK_SLACK_MS).contains(&diff),
            "Expected ~100ms, got {}ms",
            diff
        );
    }

    #[test]
    fn test_timestamp_accuracy_under_load() {
        let g = default_generator();
        let epoch = g.epoch();
        let mut max_drift: u64 = 0;

        for _ in 0..1000 {
            let before = wall_clock_ms(epoch);
            let ts = g.generate().timestamp();
            let after = wall_clock_ms(epoch);

            if ts < before {
                max_drift = max_drift.max(before - ts);
            }
            if ts > after {
                max_drift = max_drift.max(ts - after);
            }
        }
        // Each id is read between `before` and `after` on the same clock
        assert_eq!(max_drift, 0, "Max drift {}ms", max_drift);
    }

    #[test]
    fn test_datetime_matches_wall_clock() {
        let g = default_generator();
        let id = g.generate();
        let minted = id.datetime(g.epoch()).unwrap();
        let drift = (chrono::Utc::now() - minted).num_milliseconds().abs();
        assert!(drift < 1000, "Minting time off by {}ms", drift);
    }

    #[test]
    fn test_ids_sortable_by_time() {
        let g = default_generator();
        let ids: Vec<Snowflake> = (0..10)
            .map(|i| {
                if i % 3 == 0 && i > 0 {
                    thread::sleep(Duration::from_millis(5));
                }
                g.generate()
            })
            .collect();
        assert_ids_monotonic(&ids);
    }

    #[test]
    fn test_same_millisecond_generation() {
        let g = default_generator();
        let ids: Vec<Snowflake> = (0..100).map(|_| g.generate()).collect();
        assert_unique_ids(&ids, 100);
        assert_ids_monotonic(&ids);
    }

    #[test]
    fn test_custom_epoch_timestamp() {
        let epoch = 1577836800000i64;
        let cfg = SnowflakeConfig::builder().epoch(epoch).build();
        let g = SnowflakeGenerator::new(cfg);
        assert_timestamp_accurate(g.generate().timestamp(), epoch, CLOCK_SLACK_MS);
    }

    #[test]
    fn test_mixed_sleep_and_burst() {
        let g = default_generator();
        let mut ids: Vec<Snowflake> = Vec::new();

        for round in 0..3 {
            for _ in 0..50 {
                ids.push(g.generate());
            }
            if round < 2 {
                thread::sleep(Duration::from_millis(10));
            }
        }

        assert_ids_monotonic(&ids);
        let tss: HashSet<_> = ids.iter().map(|id| id.timestamp()).collect();
        assert!(tss.len() > 1, "Should cross ms boundaries");
    }
}
