//! This module implements `LocalDate` and any directly related algorithms.

use core::{fmt, str::FromStr};

use date_equations::gregorian;
use num_traits::FromPrimitive;
use zonedb::WeekDay;

use crate::{
    parsers::{FixedFormatParser, DATE_LEN},
    utils, TimeError, TimeResult,
};

/// A proleptic Gregorian calendar date without a time zone.
///
/// A `LocalDate` is always a valid date between 0001-01-01 and 9999-12-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate {
    year: i16,
    month: u8,
    day: u8,
}

// ==== Private API ====

impl LocalDate {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(year: i16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

// ==== Public API ====

impl LocalDate {
    /// The earliest supported year.
    pub const MIN_YEAR: i32 = 1;
    /// The latest supported year.
    pub const MAX_YEAR: i32 = 9999;

    /// 0001-01-01
    pub const MIN: Self = Self::new_unchecked(1, 1, 1);
    /// 9999-12-31
    pub const MAX: Self = Self::new_unchecked(9999, 12, 31);

    /// Creates a new `LocalDate`, rejecting any field that is not in a valid range.
    ///
    /// ```rust
    /// use tinytz::LocalDate;
    ///
    /// let date = LocalDate::try_new(2024, 2, 29).unwrap();
    /// assert_eq!(date.day(), 29);
    ///
    /// assert!(LocalDate::try_new(2023, 2, 29).is_err());
    /// ```
    pub fn try_new(year: i32, month: u8, day: u8) -> TimeResult<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(TimeError::range().with_message("year out of range."));
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::range().with_message("month out of range."));
        }
        if day == 0 || day > gregorian::days_in_month(year, month) {
            return Err(TimeError::range().with_message("day out of range."));
        }
        let year = i16::from_i32(year).ok_or(TimeError::assert())?;
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a `LocalDate` from a count of days since 1970-01-01.
    pub fn from_epoch_days(epoch_days: i32) -> TimeResult<Self> {
        if epoch_days < Self::MIN.to_epoch_days() || epoch_days > Self::MAX.to_epoch_days() {
            return Err(TimeError::range().with_message("epoch days out of range."));
        }
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        let year = i16::from_i32(year).ok_or(TimeError::assert())?;
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates the `LocalDate` containing an instant read with a zero offset.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> TimeResult<Self> {
        let (epoch_days, _) = utils::epoch_days_and_seconds(epoch_seconds)?;
        Self::from_epoch_days(epoch_days)
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn to_epoch_days(&self) -> i32 {
        gregorian::epoch_days_from_gregorian_date(self.year as i32, self.month, self.day)
    }

    /// Returns the date `days` days away from this one.
    pub fn add_days(&self, days: i32) -> TimeResult<Self> {
        let epoch_days = self
            .to_epoch_days()
            .checked_add(days)
            .ok_or(TimeError::range().with_message("epoch days out of range."))?;
        Self::from_epoch_days(epoch_days)
    }

    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year as i32
    }

    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the day of the week.
    ///
    /// ```rust
    /// use tinytz::{LocalDate, WeekDay};
    ///
    /// let date = LocalDate::try_new(1970, 1, 1).unwrap();
    /// assert_eq!(date.day_of_week(), WeekDay::Thurs);
    /// ```
    #[must_use]
    pub const fn day_of_week(&self) -> WeekDay {
        WeekDay::from_epoch_days(self.to_epoch_days())
    }

    #[inline]
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        gregorian::is_leap_year(self.year as i32)
    }

    #[inline]
    #[must_use]
    pub const fn days_in_month(&self) -> u8 {
        gregorian::days_in_month(self.year as i32, self.month)
    }
}

// ==== Trait impls ====

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for LocalDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = FixedFormatParser::new(s, DATE_LEN)?;
        let record = parser.date()?;
        parser.finish()?;
        Self::try_new(record.year, record.month, record.day)
    }
}

// ==== Test land ====

#[cfg(test)]
mod tests {
    use core::str::FromStr;
    use std::string::ToString;

    use zonedb::WeekDay;

    use super::LocalDate;
    use crate::ErrorKind;

    #[test]
    fn epoch_days_round_trip() {
        let mut epoch_days = LocalDate::MIN.to_epoch_days();
        let max = LocalDate::MAX.to_epoch_days();
        assert_eq!(epoch_days, -719_162);
        assert_eq!(max, 2_932_896);
        while epoch_days <= max {
            let date = LocalDate::from_epoch_days(epoch_days).unwrap();
            assert_eq!(date.to_epoch_days(), epoch_days);
            epoch_days += 1;
        }
        assert!(LocalDate::from_epoch_days(-719_163).is_err());
        assert!(LocalDate::from_epoch_days(2_932_897).is_err());
    }

    #[test]
    fn field_validation() {
        assert!(LocalDate::try_new(0, 1, 1).is_err());
        assert!(LocalDate::try_new(10_000, 1, 1).is_err());
        assert!(LocalDate::try_new(2024, 13, 1).is_err());
        assert!(LocalDate::try_new(2024, 4, 31).is_err());
        assert!(LocalDate::try_new(1900, 2, 29).is_err());
        assert!(LocalDate::try_new(2000, 2, 29).is_ok());
    }

    #[test]
    fn weekday() {
        let epoch = LocalDate::try_new(1970, 1, 1).unwrap();
        assert_eq!(epoch.day_of_week(), WeekDay::Thurs);
        let date = LocalDate::try_new(2024, 3, 10).unwrap();
        assert_eq!(date.day_of_week(), WeekDay::Sun);
        for offset in -30..30 {
            let a = epoch.add_days(offset).unwrap();
            let b = epoch.add_days(offset + 7).unwrap();
            assert_eq!(a.day_of_week(), b.day_of_week());
        }
    }

    #[test]
    fn parse_and_display() {
        let date = LocalDate::from_str("2024-03-10").unwrap();
        assert_eq!(date, LocalDate::try_new(2024, 3, 10).unwrap());
        assert_eq!(date.to_string(), "2024-03-10");
        let early = LocalDate::try_new(5, 1, 2).unwrap();
        assert_eq!(early.to_string(), "0005-01-02");
    }

    #[test]
    fn malformed_strings() {
        for input in [
            "2024-03-1",
            "2024-03-100",
            "2024-0a-10",
            "2024/03/10",
            "20240310  ",
            "-024-03-10",
            "",
            "2024-02-30",
        ] {
            assert!(LocalDate::from_str(input).is_err(), "{input}");
        }
        let err = LocalDate::from_str("2024-03-1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        let err = LocalDate::from_str("2024-02-30").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}
