//! This module implements `LocalTime` and any directly related algorithms.

use core::{fmt, str::FromStr};

use crate::{
    parsers::{FixedFormatParser, TIME_LEN},
    TimeError, TimeResult, SECONDS_PER_DAY,
};

/// A wall clock time of day with second precision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl LocalTime {
    /// 00:00:00
    pub const MIDNIGHT: Self = Self::new_unchecked(0, 0, 0);

    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Creates a new `LocalTime`, rejecting any field that is not in a valid range.
    ///
    /// ```rust
    /// use tinytz::LocalTime;
    ///
    /// let time = LocalTime::try_new(23, 59, 59).unwrap();
    /// assert_eq!(time.to_seconds(), 86_399);
    ///
    /// assert!(LocalTime::try_new(24, 0, 0).is_err());
    /// ```
    pub fn try_new(hour: u8, minute: u8, second: u8) -> TimeResult<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::range().with_message("time field out of range."));
        }
        Ok(Self::new_unchecked(hour, minute, second))
    }

    /// Creates a `LocalTime` from seconds since midnight.
    pub fn from_seconds(seconds: u32) -> TimeResult<Self> {
        if i64::from(seconds) >= SECONDS_PER_DAY {
            return Err(TimeError::range().with_message("seconds of day out of range."));
        }
        Ok(Self::new_unchecked(
            (seconds / 3600) as u8,
            (seconds / 60 % 60) as u8,
            (seconds % 60) as u8,
        ))
    }

    /// Returns the number of seconds since midnight.
    #[inline]
    #[must_use]
    pub const fn to_seconds(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for LocalTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = FixedFormatParser::new(s, TIME_LEN)?;
        let record = parser.time()?;
        parser.finish()?;
        Self::try_new(record.hour, record.minute, record.second)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;
    use std::string::ToString;

    use super::LocalTime;

    #[test]
    fn seconds_round_trip() {
        for seconds in (0..86_400).step_by(37) {
            let time = LocalTime::from_seconds(seconds).unwrap();
            assert_eq!(time.to_seconds(), seconds);
        }
        assert!(LocalTime::from_seconds(86_400).is_err());
    }

    #[test]
    fn parse() {
        let time = LocalTime::from_str("01:02:03").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (1, 2, 3));
        assert_eq!(time.to_string(), "01:02:03");
        assert!(LocalTime::from_str("1:02:03").is_err());
        assert!(LocalTime::from_str("24:00:00").is_err());
        assert!(LocalTime::from_str("01-02-03").is_err());
    }
}
