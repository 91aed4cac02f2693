//! This module implements `LocalDateTime` and any directly related algorithms.

use core::{fmt, str::FromStr};

use crate::{
    components::{LocalDate, LocalTime},
    parsers::{FixedFormatParser, DATE_TIME_LEN},
    utils, TimeError, TimeResult,
};

/// A calendar date and wall clock time without an offset or time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {
    /// Creates a new `LocalDateTime` from a date and a time.
    #[inline]
    #[must_use]
    pub const fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Creates a new `LocalDateTime`, rejecting any field that is not in a valid range.
    ///
    /// ```rust
    /// use tinytz::LocalDateTime;
    ///
    /// let datetime = LocalDateTime::try_new(2000, 1, 1, 0, 0, 0).unwrap();
    /// assert_eq!(datetime.to_epoch_seconds(), 946_684_800);
    /// ```
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TimeResult<Self> {
        let date = LocalDate::try_new(year, month, day)?;
        let time = LocalTime::try_new(hour, minute, second)?;
        Ok(Self::new(date, time))
    }

    /// Creates the `LocalDateTime` of an instant read with a zero offset.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> TimeResult<Self> {
        let (epoch_days, seconds) = utils::epoch_days_and_seconds(epoch_seconds)?;
        let date = LocalDate::from_epoch_days(epoch_days)?;
        let time = LocalTime::from_seconds(seconds)?;
        Ok(Self::new(date, time))
    }

    /// Returns the seconds since 1970-01-01T00:00:00, reading this value as
    /// if it were UTC.
    #[inline]
    #[must_use]
    pub const fn to_epoch_seconds(&self) -> i64 {
        utils::epoch_seconds_for_epoch_days(self.date.to_epoch_days())
            + self.time.to_seconds() as i64
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> LocalDate {
        self.date
    }

    #[inline]
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.time
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.time.hour()
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.time.minute()
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.time.second()
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for LocalDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = FixedFormatParser::new(s, DATE_TIME_LEN)?;
        let date = parser.date()?;
        parser.expect(b'T')?;
        let time = parser.time()?;
        parser.finish()?;
        Self::try_new(
            date.year,
            date.month,
            date.day,
            time.hour,
            time.minute,
            time.second,
        )
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;
    use std::string::ToString;

    use super::LocalDateTime;

    #[test]
    fn epoch_seconds() {
        let datetime = LocalDateTime::try_new(2023, 11, 30, 1, 49, 12).unwrap();
        assert_eq!(datetime.to_epoch_seconds(), 1_701_308_952);
        assert_eq!(
            LocalDateTime::from_epoch_seconds(1_701_308_952).unwrap(),
            datetime
        );
        let before_epoch = LocalDateTime::from_epoch_seconds(-1).unwrap();
        assert_eq!(before_epoch.to_string(), "1969-12-31T23:59:59");
    }

    #[test]
    fn parse() {
        let datetime = LocalDateTime::from_str("2024-03-10T02:30:00").unwrap();
        assert_eq!(datetime.hour(), 2);
        assert_eq!(datetime.to_string(), "2024-03-10T02:30:00");
        assert!(LocalDateTime::from_str("2024-03-10 02:30:00").is_err());
        assert!(LocalDateTime::from_str("2024-03-10T02:30").is_err());
    }
}
