//! This module implements `TimeOffset`.

use core::{fmt, str::FromStr};

use num_traits::FromPrimitive;

use crate::{
    parsers::{FixedFormatParser, OFFSET_LEN},
    TimeError, TimeResult,
};

/// Minutes per offset code.
const MINUTES_PER_CODE: i32 = zonedb::MINUTES_PER_CODE;
/// Largest offset code, +16:00.
const MAX_CODE: i8 = 64;

/// A signed offset from UTC with a 15 minute resolution.
///
/// The offset is stored as a single byte counting 15 minute units, which
/// covers every offset observed in the time zone database within
/// -16:00..=+16:00.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOffset(i8);

impl TimeOffset {
    /// The zero offset.
    pub const UTC: Self = Self(0);

    /// Creates an offset from minutes.
    ///
    /// ```rust
    /// use tinytz::TimeOffset;
    ///
    /// let offset = TimeOffset::from_minutes(5 * 60 + 45).unwrap();
    /// assert_eq!(offset.minutes(), 345);
    ///
    /// // Not a multiple of 15 minutes.
    /// assert!(TimeOffset::from_minutes(10).is_err());
    /// ```
    pub fn from_minutes(minutes: i32) -> TimeResult<Self> {
        if minutes % MINUTES_PER_CODE != 0 {
            return Err(TimeError::range().with_message("offset is not a multiple of 15 minutes."));
        }
        i8::from_i32(minutes / MINUTES_PER_CODE)
            .filter(|code| (-MAX_CODE..=MAX_CODE).contains(code))
            .map(Self)
            .ok_or(TimeError::range().with_message("offset out of range."))
    }

    /// Creates an offset from whole hours.
    pub fn from_hours(hours: i32) -> TimeResult<Self> {
        Self::from_minutes(hours.saturating_mul(60))
    }

    /// Creates an offset from an hour and a minute component that share the
    /// same sign, `(-5, -45)` is `-05:45`.
    pub fn from_hour_minute(hour: i32, minute: i32) -> TimeResult<Self> {
        if hour.signum() * minute.signum() < 0 || minute.abs() > 59 {
            return Err(TimeError::range().with_message("invalid offset minute."));
        }
        Self::from_minutes(hour.saturating_mul(60).saturating_add(minute))
    }

    /// Returns the offset in minutes.
    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i32 {
        self.0 as i32 * MINUTES_PER_CODE
    }

    /// Returns the offset in seconds.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.minutes() as i64 * 60
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two offsets, failing when the sum is out of range.
    pub fn checked_add(&self, other: Self) -> TimeResult<Self> {
        Self::from_minutes(self.minutes() + other.minutes())
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.minutes();
        let sign = if minutes < 0 { '-' } else { '+' };
        let minutes = minutes.abs();
        write!(f, "{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl FromStr for TimeOffset {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = FixedFormatParser::new(s, OFFSET_LEN)?;
        let minutes = parser.offset()?;
        parser.finish()?;
        Self::from_minutes(minutes)
    }
}
