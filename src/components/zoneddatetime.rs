//! This module implements `ZonedDateTime` and any directly related algorithms.

use core::fmt;

use crate::{
    components::{
        timezone::TimeZone, LocalDate, LocalDateTime, LocalTime, OffsetDateTime, TimeOffset,
    },
    options::Disambiguation,
    processor::Abbreviation,
    TimeResult,
};

/// An instant seen through a [`TimeZone`].
///
/// The offset is resolved once at construction, so the accessors never
/// touch the processor cache. [`ZonedDateTime::abbreviation`] and
/// [`ZonedDateTime::is_dst`] query the time zone again.
///
/// ```rust
/// use tinytz::{manager::BasicZoneManager, zonedb::BASIC_REGISTRY, ZonedDateTime};
///
/// let manager = BasicZoneManager::<2>::new(&BASIC_REGISTRY);
/// let tz = manager.create_for_zone_name("America/Los_Angeles");
/// let zdt = ZonedDateTime::for_epoch_seconds(1_710_064_800, tz).unwrap();
/// assert_eq!(zdt.to_string(), "2024-03-10T03:00:00-07:00[America/Los_Angeles]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZonedDateTime<'a> {
    datetime: OffsetDateTime,
    tz: TimeZone<'a>,
}

impl<'a> ZonedDateTime<'a> {
    /// Creates the `ZonedDateTime` of an instant in `tz`.
    pub fn for_epoch_seconds(epoch_seconds: i64, tz: TimeZone<'a>) -> TimeResult<Self> {
        let offset = tz.utc_offset(epoch_seconds)?;
        let datetime = OffsetDateTime::for_epoch_seconds(epoch_seconds, offset)?;
        Ok(Self { datetime, tz })
    }

    /// Resolves a wall clock time in `tz`, using `disambiguation` for times
    /// that fall in a gap or an overlap.
    pub fn for_local_date_time(
        datetime: &LocalDateTime,
        tz: TimeZone<'a>,
        disambiguation: Disambiguation,
    ) -> TimeResult<Self> {
        let datetime = tz.offset_date_time(datetime, disambiguation)?;
        Ok(Self { datetime, tz })
    }

    /// Creates a new `ZonedDateTime` from its wall clock components.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        tz: TimeZone<'a>,
        disambiguation: Disambiguation,
    ) -> TimeResult<Self> {
        let datetime = LocalDateTime::try_new(year, month, day, hour, minute, second)?;
        Self::for_local_date_time(&datetime, tz, disambiguation)
    }

    /// Returns the same instant seen through another time zone.
    pub fn convert_to_time_zone<'b>(&self, tz: TimeZone<'b>) -> TimeResult<ZonedDateTime<'b>> {
        ZonedDateTime::for_epoch_seconds(self.to_epoch_seconds(), tz)
    }

    #[inline]
    #[must_use]
    pub const fn to_epoch_seconds(&self) -> i64 {
        self.datetime.to_epoch_seconds()
    }

    #[inline]
    #[must_use]
    pub const fn time_zone(&self) -> TimeZone<'a> {
        self.tz
    }

    pub fn abbreviation(&self) -> TimeResult<Abbreviation> {
        self.tz.abbreviation(self.to_epoch_seconds())
    }

    pub fn is_dst(&self) -> TimeResult<bool> {
        self.tz
            .offset_info(self.to_epoch_seconds())
            .map(|info| info.is_dst())
    }

    #[inline]
    #[must_use]
    pub const fn offset_date_time(&self) -> OffsetDateTime {
        self.datetime
    }

    #[inline]
    #[must_use]
    pub const fn local_date_time(&self) -> LocalDateTime {
        self.datetime.local_date_time()
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
        self.datetime.offset()
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

impl fmt::Display for ZonedDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.datetime, self.tz)
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::ZonedDateTime;
    use crate::{
        components::{timezone::TimeZone, TimeOffset},
        options::Disambiguation,
    };

    #[test]
    fn utc_zoned_date_time() {
        let zdt = ZonedDateTime::for_epoch_seconds(1_701_308_952, TimeZone::utc()).unwrap();
        assert_eq!(zdt.to_string(), "2023-11-30T01:49:12+00:00[UTC]");
        assert!(!zdt.is_dst().unwrap());
    }

    #[test]
    fn manual_zone_round_trip() {
        let tz = TimeZone::for_time_offset(TimeOffset::from_hours(9).unwrap(), TimeOffset::UTC);
        let zdt =
            ZonedDateTime::try_new(2024, 1, 1, 9, 0, 0, tz, Disambiguation::Compatible).unwrap();
        assert_eq!(zdt.to_epoch_seconds(), 1_704_067_200);
        assert_eq!(zdt.abbreviation().unwrap().as_str(), "STD");

        let utc = zdt.convert_to_time_zone(TimeZone::utc()).unwrap();
        assert_eq!((utc.day(), utc.hour()), (1, 0));
        assert_eq!(utc.to_epoch_seconds(), zdt.to_epoch_seconds());
    }

    #[test]
    fn error_zone_fails() {
        assert!(ZonedDateTime::for_epoch_seconds(0, TimeZone::for_error()).is_err());
    }
}
