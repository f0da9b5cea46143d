//! Snowflake identifier value

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::ParseSnowflakeError;
use crate::layout;

/// A generated 64-bit identifier.
///
/// Ordering follows the integer value, so identifiers from one node sort by
/// minting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Snowflake(i64);

impl Snowflake {
    /// All-zero identifier returned by [`SnowflakeGenerator::generate`] when
    /// no identifier could be produced.
    ///
    /// [`SnowflakeGenerator::generate`]: crate::SnowflakeGenerator::generate
    pub const INVALID: Snowflake = Snowflake(0);

    #[inline(always)]
    pub const fn from_i64(raw: i64) -> Self {
        Self(raw)
    }

    /// Pack fields using the standard layout
    #[inline(always)]
    pub const fn from_parts(timestamp: u64, node_id: u16, sequence: u16) -> Self {
        Self(layout::compose(timestamp, node_id, sequence))
    }

    #[inline(always)]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// `false` only for the all-zero sentinel
    #[inline(always)]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Milliseconds since the generator's epoch
    #[inline(always)]
    pub const fn timestamp(self) -> u64 {
        layout::timestamp(self.0)
    }

    #[inline(always)]
    pub const fn node_id(self) -> u16 {
        layout::node_id(self.0)
    }

    #[inline(always)]
    pub const fn sequence(self) -> u16 {
        layout::sequence(self.0)
    }

    #[inline]
    pub const fn decompose(self) -> (u64, u16, u16) {
        layout::decompose(self.0)
    }

    /// Absolute Unix milliseconds at which this id was minted, `None` if
    /// `epoch` plus the timestamp overflows `i64`
    #[inline]
    pub const fn unix_millis(self, epoch: i64) -> Option<i64> {
        epoch.checked_add(self.timestamp() as i64)
    }

    /// Minting time as a UTC datetime, `None` if out of range
    pub fn datetime(self, epoch: i64) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.unix_millis(epoch)?)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Snowflake {
    type Err = ParseSnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse::<i64>()?))
    }
}

impl From<i64> for Snowflake {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_decimal() {
        let id = Snowflake::from_i64(1234567890123456789);
        assert_eq!(id.to_string(), "1234567890123456789");
        assert_eq!(format!("{id:>22}"), "   1234567890123456789");
    }

    #[test]
    fn test_parse() {
        let id: Snowflake = "4194305".parse().unwrap();
        assert_eq!(id.as_i64(), 4194305);
        assert_eq!(id.decompose(), (1, 0, 1));

        assert!("".parse::<Snowflake>().is_err());
        assert!("12a".parse::<Snowflake>().is_err());
        assert!("9223372036854775808".parse::<Snowflake>().is_err());
    }

    #[test]
    fn test_string_roundtrip() {
        let id = Snowflake::from_parts(987654321, 3, 17);
        let parsed: Snowflake = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_invalid_sentinel() {
        assert!(!Snowflake::INVALID.is_valid());
        assert_eq!(Snowflake::default(), Snowflake::INVALID);
        assert!(Snowflake::from_parts(0, 0, 1).is_valid());
    }

    #[test]
    fn test_conversions() {
        let id = Snowflake::from(42i64);
        let raw: i64 = id.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_ordering_follows_value() {
        let a = Snowflake::from_parts(10, 1023, 4095);
        let b = Snowflake::from_parts(11, 0, 0);
        assert!(a < b);
    }

    #[test]
    fn test_datetime() {
        let epoch = 1577808000000; // 2019-12-31T16:00:00Z
        let id = Snowflake::from_parts(60_000, 0, 0);
        assert_eq!(id.unix_millis(epoch), Some(epoch + 60_000));

        let dt = id.datetime(epoch).unwrap();
        assert_eq!(dt.to_rfc3339(), "2019-12-31T16:01:00+00:00");
    }

    #[test]
    fn test_datetime_out_of_range() {
        let id = Snowflake::from_parts(10, 0, 0);
        assert_eq!(id.unix_millis(i64::MAX - 5), None);
        assert_eq!(id.datetime(i64::MAX - 5), None);

        // Fits in i64 but not in chrono's calendar
        assert_eq!(id.unix_millis(i64::MAX - 10), Some(i64::MAX));
        assert_eq!(id.datetime(i64::MAX - 10), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_transparent() {
        let id = Snowflake::from_i64(77);
        assert_eq!(serde_json::to_string(&id).unwrap(), "77");
        let back: Snowflake = serde_json::from_str("77").unwrap();
        assert_eq!(back, id);
    }
}
