//! Configuration for Snowflake generator

mod builder;

pub use builder::SnowflakeConfigBuilder;
use builder::{
    DEFAULT_EPOCH, DEFAULT_NODE_ID, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS,
    DEFAULT_SPIN_YIELD_EVERY,
};

/// Configuration for Snowflake generator
///
/// `epoch` and `node_id` are fixed for the generator's lifetime. The spin
/// settings tune how the generator waits out an exhausted millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SnowflakeConfig {
    epoch: i64,
    #[cfg_attr(feature = "serde", serde(rename = "machineId", alias = "nodeId"))]
    node_id: u16,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl SnowflakeConfig {
    /// Create a configuration without validating `node_id`.
    ///
    /// Values above 1023 are truncated to their low 10 bits when packed.
    /// Use [`SnowflakeConfig::builder`] for a checked node id.
    pub const fn new(epoch: i64, node_id: u16) -> Self {
        Self {
            epoch,
            node_id,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Create config from builder
    pub(crate) const fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        Self {
            epoch: b.epoch,
            node_id: b.node_id,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub const fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn node_id(&self) -> u16 {
        self.node_id
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH, DEFAULT_NODE_ID)
    }
}
