//! SnowflakeConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::SnowflakeConfig;
use crate::error::SnowflakeError;
use crate::layout::MAX_NODE_ID;

/// Default configuration values
pub(super) const DEFAULT_EPOCH: i64 = 1577808000000; // December 31, 2019 16:00 UTC
pub(super) const DEFAULT_NODE_ID: u16 = 0;
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for SnowflakeConfig
#[derive(Debug)]
pub struct SnowflakeConfigBuilder {
    pub(super) epoch: i64,
    pub(super) node_id: u16,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            node_id: DEFAULT_NODE_ID,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the node ID (0-1023)
    pub fn node_id(mut self, node_id: u16) -> Result<Self, SnowflakeError> {
        if node_id > MAX_NODE_ID {
            return Err(SnowflakeError::InvalidNodeId {
                node_id,
                max: MAX_NODE_ID,
            });
        }
        self.node_id = node_id;
        Ok(self)
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the epoch from a UTC datetime
    pub fn epoch_datetime(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch = epoch.timestamp_millis();
        self
    }

    /// Enable or disable micro spin before sleep on sequence exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final SnowflakeConfig
    pub const fn build(self) -> SnowflakeConfig {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
