//! Waiting out an exhausted millisecond
//!
//! The generator holds its lock while waiting, so the wait first spins on the
//! clock (cheap when the next millisecond is microseconds away) and only then
//! sleeps with a capped exponential backoff.

use std::thread;
use std::time::Duration;

use crate::config::SnowflakeConfig;

/// Upper bound on a single backoff sleep, in milliseconds
pub const MAX_BACKOFF_MS: u64 = 100;

/// Block until `get_time` reads past `last_timestamp` and return that reading.
///
/// Spins for `config.spin_loops()` reads when spinning is enabled, yielding
/// every `config.spin_yield_every()` of them, then sleeps 1, 2, 4 ... ms up to
/// [`MAX_BACKOFF_MS`] between reads.
pub fn wait_next_millis<F>(last_timestamp: i64, config: &SnowflakeConfig, get_time: F) -> i64
where
    F: Fn() -> i64,
{
    let spins = if config.spin_enabled() {
        config.spin_loops()
    } else {
        0
    };
    let yield_every = config.spin_yield_every();

    for i in 0..spins {
        let now = get_time();
        if now > last_timestamp {
            return now;
        }
        std::hint::spin_loop();
        if yield_every != 0 && (i + 1) % yield_every == 0 {
            thread::yield_now();
        }
    }

    let mut backoff_ms = 1;
    loop {
        thread::sleep(Duration::from_millis(backoff_ms));
        let now = get_time();
        if now > last_timestamp {
            return now;
        }
        backoff_ms = (backoff_ms * 2).min(MAX_BACKOFF_MS);
    }
}
