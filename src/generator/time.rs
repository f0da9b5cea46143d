//! Time sources for Snowflake generation
//!
//! Provides wall-clock time in absolute Unix milliseconds

use chrono::Utc;

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// The generator subtracts its own epoch, so implementations report absolute
/// time. Tests plug in fixed or stepping clocks.
pub trait TimeSource {
    fn unix_millis(&self) -> i64;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn unix_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline(always)]
    fn unix_millis(&self) -> i64 {
        (**self).unix_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    #[inline(always)]
    fn unix_millis(&self) -> i64 {
        (**self).unix_millis()
    }
}
