use std::num::ParseIntError;

use thiserror::Error;

/// Represents errors that can occur during Snowflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Error when node ID exceeds the maximum allowed value
    #[error("Node ID {node_id} is invalid. Maximum allowed value is {max}")]
    InvalidNodeId { node_id: u16, max: u16 },
    /// Error when clock moves backwards (system time issue)
    #[error("Clock moved backwards. Refusing to generate id for {delta} milliseconds")]
    ClockMovedBackwards { delta: i64 },
    /// Error when the timestamp delta no longer fits in 41 bits
    #[error("Epoch exhausted: {elapsed} milliseconds elapsed, maximum is {max}")]
    EpochExhausted { elapsed: u64, max: u64 },
    /// Error when the clock reads earlier than the configured epoch
    #[error("Epoch {epoch} is ahead of current time {now}")]
    EpochInFuture { epoch: i64, now: i64 },
}

/// Error returned when parsing a decimal identifier fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid snowflake id: {0}")]
pub struct ParseSnowflakeError(#[from] ParseIntError);
