//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last timestamp + next sequence, guarded by the mutex
//! - `time` - Wall-clock time sources
//! - `wait` - Spin and backoff strategies
//! - `generate` - ID generation logic

mod generate;
mod state;
pub(crate) mod time;
mod wait;

use parking_lot::Mutex;

use crate::config::SnowflakeConfig;

use state::State;
use time::{SystemClock, TimeSource};

/// Snowflake ID generator.
///
/// All minting goes through one mutex, so a single generator can be shared
/// between threads by reference or `Arc` and still never repeats an id.
#[derive(Debug)]
pub struct SnowflakeGenerator<T: TimeSource = SystemClock> {
    state: Mutex<State>,
    config: SnowflakeConfig,
    time: T,
}

impl SnowflakeGenerator {
    /// Create a generator reading the system clock
    pub fn new(config: SnowflakeConfig) -> Self {
        Self::with_time_source(config, SystemClock)
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(SnowflakeConfig::default())
    }
}

impl<T: TimeSource> SnowflakeGenerator<T> {
    /// Create a generator with a custom time source.
    ///
    /// The current reading becomes the initial last timestamp, so ids minted
    /// in the construction millisecond start at sequence 0.
    pub fn with_time_source(config: SnowflakeConfig, time: T) -> Self {
        let state = State::new(time.unix_millis());
        Self {
            state: Mutex::new(state),
            config,
            time,
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    #[inline(always)]
    pub fn epoch(&self) -> i64 {
        self.config.epoch()
    }

    #[inline(always)]
    pub fn node_id(&self) -> u16 {
        self.config.node_id()
    }

    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        self.time.unix_millis()
    }

    pub(crate) fn wait_next_millis(&self, from_ts: i64) -> i64 {
        wait::wait_next_millis(from_ts, &self.config, || self.now_ms())
    }

    #[cfg(test)]
    pub(crate) fn state_snapshot(&self) -> State {
        *self.state.lock()
    }
}
