//! This module implements `OffsetDateTime`.

use core::{fmt, str::FromStr};

use crate::{
    components::{LocalDate, LocalDateTime, LocalTime, TimeOffset},
    parsers::{FixedFormatParser, OFFSET_DATE_TIME_LEN},
    TimeError, TimeResult,
};

/// A local date time paired with a fixed offset from UTC.
///
/// An `OffsetDateTime` identifies a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetDateTime {
    datetime: LocalDateTime,
    offset: TimeOffset,
}

impl OffsetDateTime {
    #[inline]
    #[must_use]
    pub const fn new(datetime: LocalDateTime, offset: TimeOffset) -> Self {
        Self { datetime, offset }
    }

    /// Creates a new `OffsetDateTime`, rejecting any field that is not in a valid range.
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        offset: TimeOffset,
    ) -> TimeResult<Self> {
        let datetime = LocalDateTime::try_new(year, month, day, hour, minute, second)?;
        Ok(Self::new(datetime, offset))
    }

    /// Creates the `OffsetDateTime` of an instant as seen with `offset`.
    ///
    /// ```rust
    /// use tinytz::{OffsetDateTime, TimeOffset};
    ///
    /// let offset = TimeOffset::from_hours(-8).unwrap();
    /// let odt = OffsetDateTime::for_epoch_seconds(1_710_064_799, offset).unwrap();
    /// assert_eq!(odt.hour(), 1);
    /// assert_eq!(odt.to_epoch_seconds(), 1_710_064_799);
    /// ```
    pub fn for_epoch_seconds(epoch_seconds: i64, offset: TimeOffset) -> TimeResult<Self> {
        let local = epoch_seconds
            .checked_add(offset.seconds())
            .ok_or(TimeError::range().with_message("epoch seconds out of range."))?;
        let datetime = LocalDateTime::from_epoch_seconds(local)?;
        Ok(Self::new(datetime, offset))
    }

    /// Returns the instant as seconds since 1970-01-01T00:00:00Z.
    #[inline]
    #[must_use]
    pub const fn to_epoch_seconds(&self) -> i64 {
        self.datetime.to_epoch_seconds() - self.offset.seconds()
    }

    /// Returns the same instant as seen with another offset.
    pub fn with_offset(&self, offset: TimeOffset) -> TimeResult<Self> {
        Self::for_epoch_seconds(self.to_epoch_seconds(), offset)
    }

    #[inline]
    #[must_use]
    pub const fn local_date_time(&self) -> LocalDateTime {
        self.datetime
    }

    #[inline]
    #[must_use]
    pub const fn date(&self) -> LocalDate {
        self.datetime.date()
    }

    #[inline]
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.datetime.time()
    }

    #[inline]
    #[must_use]
    pub const fn offset(&self) -> TimeOffset {
        self.offset
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.datetime.year()
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.datetime.month()
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.datetime.day()
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.datetime.hour()
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.datetime.minute()
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.datetime.second()
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.datetime, self.offset)
    }
}

impl FromStr for OffsetDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = FixedFormatParser::new(s, OFFSET_DATE_TIME_LEN)?;
        let date = parser.date()?;
        parser.expect(b'T')?;
        let time = parser.time()?;
        let minutes = parser.offset()?;
        parser.finish()?;
        Self::try_new(
            date.year,
            date.month,
            date.day,
            time.hour,
            time.minute,
            time.second,
            TimeOffset::from_minutes(minutes)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;
    use std::string::ToString;

    use super::OffsetDateTime;
    use crate::TimeOffset;

    #[test]
    fn epoch_seconds_round_trip() {
        for minutes in [-720, -480, -210, 0, 60, 345, 840] {
            let offset = TimeOffset::from_minutes(minutes).unwrap();
            for epoch_seconds in [-62_135_596_800 + 86_400, -1, 0, 951_782_400, 1_730_624_399] {
                let odt = OffsetDateTime::for_epoch_seconds(epoch_seconds, offset).unwrap();
                assert_eq!(odt.to_epoch_seconds(), epoch_seconds);
                let again = OffsetDateTime::for_epoch_seconds(odt.to_epoch_seconds(), odt.offset());
                assert_eq!(again.unwrap(), odt);
            }
        }
    }

    #[test]
    fn parse() {
        let odt = OffsetDateTime::from_str("2024-11-03T01:30:00-07:00").unwrap();
        assert_eq!(odt.to_epoch_seconds(), 1_730_622_600);
        assert_eq!(odt.to_string(), "2024-11-03T01:30:00-07:00");
        let utc = odt.with_offset(TimeOffset::UTC).unwrap();
        assert_eq!(utc.to_string(), "2024-11-03T08:30:00+00:00");
        assert!(OffsetDateTime::from_str("2024-11-03T01:30:00Z").is_err());
        assert!(OffsetDateTime::from_str("2024-11-03T01:30:00-0700").is_err());
    }

    #[test]
    fn out_of_range() {
        let offset = TimeOffset::from_hours(-1).unwrap();
        // 0001-01-01T00:00:00Z is 0000-12-31 at -01:00.
        assert!(OffsetDateTime::for_epoch_seconds(-62_135_596_800, offset).is_err());
        assert!(OffsetDateTime::for_epoch_seconds(i64::MAX, TimeOffset::UTC).is_err());
    }
}
