//! # flakeid
//!
//! A Rust implementation of the classic Snowflake ID generator.
//!
//! Generate 64-bit unique identifiers made of a 41-bit millisecond timestamp,
//! a 10-bit node id and a 12-bit sequence. They are:
//! - 📈 Time-sorted
//! - 🔄 Monotonic per node
//! - 🔒 Thread-safe
//! - 🌐 Distributed-ready, given distinct node ids
//!
//! ```
//! use flakeid::{SnowflakeConfig, SnowflakeGenerator};
//!
//! let config = SnowflakeConfig::builder().node_id(3).unwrap().build();
//! let generator = SnowflakeGenerator::new(config);
//!
//! let id = generator.generate();
//! assert_eq!(id.node_id(), 3);
//! assert_eq!(id.to_string().parse::<i64>().unwrap(), id.as_i64());
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod generator;
mod global;
mod id;
pub mod layout;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{SnowflakeConfig, SnowflakeConfigBuilder};
pub use error::{ParseSnowflakeError, SnowflakeError};
pub use generator::time::{SystemClock, TimeSource};
pub use generator::SnowflakeGenerator;
pub use global::{generate, global, init, try_generate, GeneratorCell};
pub use id::Snowflake;
