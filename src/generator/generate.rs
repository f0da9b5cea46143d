//! ID generation logic

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::time::TimeSource;
use super::SnowflakeGenerator;
use crate::error::SnowflakeError;
use crate::id::Snowflake;
use crate::layout::MAX_TIMESTAMP;

impl<T: TimeSource> SnowflakeGenerator<T> {
    /// Generate a new Snowflake, or [`Snowflake::INVALID`] if none can be
    /// produced right now (epoch exhausted, clock before epoch, or clock
    /// moved backwards).
    #[inline]
    pub fn generate(&self) -> Snowflake {
        self.try_generate().unwrap_or(Snowflake::INVALID)
    }

    /// Generate a new Snowflake, reporting why generation failed.
    ///
    /// A failed request leaves the generator state untouched. When all 4096
    /// sequences of the current millisecond are taken, this blocks until the
    /// clock moves on.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), err(level = "warn")))]
    pub fn try_generate(&self) -> Result<Snowflake, SnowflakeError> {
        let mut state = self.state.lock();

        let mut now = self.now_ms();
        let mut elapsed = self.elapsed_since_epoch(now)?;

        let last = state.last_timestamp();
        if now < last {
            return Err(SnowflakeError::ClockMovedBackwards { delta: last - now });
        }

        if now == last && state.is_exhausted() {
            now = self.wait_next_millis(last);
            elapsed = self.elapsed_since_epoch(now)?;
        }

        let sequence = state.advance(now);
        Ok(Snowflake::from_parts(elapsed, self.config.node_id(), sequence))
    }

    #[inline]
    fn elapsed_since_epoch(&self, now: i64) -> Result<u64, SnowflakeError> {
        let epoch = self.config.epoch();
        if now < epoch {
            return Err(SnowflakeError::EpochInFuture { epoch, now });
        }
        let elapsed = now.abs_diff(epoch);
        if elapsed > MAX_TIMESTAMP {
            return Err(SnowflakeError::EpochExhausted {
                elapsed,
                max: MAX_TIMESTAMP,
            });
        }
        Ok(elapsed)
    }
}
