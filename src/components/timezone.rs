//! This module implements `TimeZone`, the handle used to resolve instants
//! and wall clock times, and its persisted form `TimeZoneData`.

use core::fmt;

use tinystr::tinystr;
use zonedb::ZoneInfo;

use crate::{
    cache::ProcessorCache,
    components::{LocalDateTime, OffsetDateTime, TimeOffset},
    options::Disambiguation,
    processor::{
        Abbreviation, BasicZoneProcessor, ExtendedZoneProcessor, OffsetInfo, ZoneProcessor,
    },
    TimeError, TimeResult,
};

const INVALID_TIME_ZONE: TimeError = TimeError::general("time zone is invalid.");

/// A zone table paired with the processor cache that resolves it.
///
/// The handle does not own a processor. Every conversion acquires one from
/// the cache, so a handle stays correct after its zone has been evicted.
pub struct ZoneHandle<'a, P: ZoneProcessor> {
    zone_info: &'static ZoneInfo,
    cache: &'a dyn ProcessorCache<P>,
}

impl<'a, P: ZoneProcessor> ZoneHandle<'a, P> {
    #[inline]
    #[must_use]
    pub fn new(zone_info: &'static ZoneInfo, cache: &'a dyn ProcessorCache<P>) -> Self {
        Self { zone_info, cache }
    }

    #[inline]
    #[must_use]
    pub const fn zone_info(&self) -> &'static ZoneInfo {
        self.zone_info
    }

    pub fn offset_info(&self, epoch_seconds: i64) -> TimeResult<OffsetInfo> {
        self.cache.acquire(self.zone_info)?.offset_info(epoch_seconds)
    }

    pub fn offset_date_time(
        &self,
        datetime: &LocalDateTime,
        disambiguation: Disambiguation,
    ) -> TimeResult<OffsetDateTime> {
        self.cache
            .acquire(self.zone_info)?
            .offset_date_time(datetime, disambiguation)
    }
}

impl<P: ZoneProcessor> Clone for ZoneHandle<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ZoneProcessor> Copy for ZoneHandle<'_, P> {}

impl<P: ZoneProcessor> PartialEq for ZoneHandle<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.zone_info, other.zone_info)
            && core::ptr::addr_eq(self.cache, other.cache)
    }
}

impl<P: ZoneProcessor> Eq for ZoneHandle<'_, P> {}

impl<P: ZoneProcessor> fmt::Debug for ZoneHandle<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneHandle")
            .field("zone", &self.zone_info.name)
            .finish_non_exhaustive()
    }
}

/// The variant of a [`TimeZone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneKind {
    Error,
    Utc,
    Manual,
    Basic,
    Extended,
}

/// A time zone.
///
/// `Utc` and `Manual` zones are self contained. Zone-bound variants borrow
/// the processor cache of the [`ZoneManager`][crate::manager::ZoneManager]
/// that created them and cannot outlive it.
///
/// ```rust
/// use tinytz::{manager::BasicZoneManager, zonedb::BASIC_REGISTRY};
///
/// let manager = BasicZoneManager::<2>::new(&BASIC_REGISTRY);
/// let tz = manager.create_for_zone_name("America/Los_Angeles");
/// assert_eq!(tz.utc_offset(1_710_064_800).unwrap().minutes(), -7 * 60);
/// assert_eq!(tz.abbreviation(1_710_064_799).unwrap().as_str(), "PST");
///
/// let unknown = manager.create_for_zone_name("America/Atlantis");
/// assert!(unknown.is_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZone<'a> {
    /// The result of a failed lookup. Every conversion on it fails.
    #[default]
    Error,
    Utc,
    /// A fixed standard offset and a fixed daylight saving delta.
    Manual {
        std_offset: TimeOffset,
        dst_offset: TimeOffset,
    },
    Basic(ZoneHandle<'a, BasicZoneProcessor>),
    Extended(ZoneHandle<'a, ExtendedZoneProcessor>),
}

impl TimeZone<'_> {
    #[inline]
    #[must_use]
    pub const fn utc() -> Self {
        Self::Utc
    }

    /// Creates a zone that always applies `std_offset + dst_offset`.
    #[inline]
    #[must_use]
    pub const fn for_time_offset(std_offset: TimeOffset, dst_offset: TimeOffset) -> Self {
        Self::Manual {
            std_offset,
            dst_offset,
        }
    }

    #[inline]
    #[must_use]
    pub const fn for_error() -> Self {
        Self::Error
    }

    #[inline]
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    #[inline]
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        matches!(self, Self::Utc)
    }

    #[must_use]
    pub const fn kind(&self) -> TimeZoneKind {
        match self {
            Self::Error => TimeZoneKind::Error,
            Self::Utc => TimeZoneKind::Utc,
            Self::Manual { .. } => TimeZoneKind::Manual,
            Self::Basic(_) => TimeZoneKind::Basic,
            Self::Extended(_) => TimeZoneKind::Extended,
        }
    }

    /// The zone table of a zone-bound time zone.
    #[must_use]
    pub fn zone_info(&self) -> Option<&'static ZoneInfo> {
        match self {
            Self::Basic(handle) => Some(handle.zone_info()),
            Self::Extended(handle) => Some(handle.zone_info()),
            _ => None,
        }
    }

    #[must_use]
    pub fn zone_id(&self) -> Option<u32> {
        self.zone_info().map(|info| info.zone_id)
    }

    /// The full zone name, `"UTC"` for UTC.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Utc => Some("UTC"),
            _ => self.zone_info().map(|info| info.name),
        }
    }

    /// The last component of the zone name, e.g. `"Los_Angeles"`.
    ///
    /// Manual zones have no name; [`TimeZone::display_short`] renders them
    /// by their total offset instead.
    #[must_use]
    pub fn short_name(&self) -> Option<&'static str> {
        match self {
            Self::Utc => Some("UTC"),
            _ => self.zone_info().map(ZoneInfo::short_name),
        }
    }

    /// Returns the offset information in effect at `epoch_seconds`.
    pub fn offset_info(&self, epoch_seconds: i64) -> TimeResult<OffsetInfo> {
        match self {
            Self::Error => Err(INVALID_TIME_ZONE),
            Self::Utc => Ok(OffsetInfo {
                utc_offset: TimeOffset::UTC,
                delta_offset: TimeOffset::UTC,
                abbreviation: tinystr!(8, "UTC"),
                transition_epoch_seconds: None,
            }),
            Self::Manual {
                std_offset,
                dst_offset,
            } => Ok(OffsetInfo {
                utc_offset: std_offset.checked_add(*dst_offset)?,
                delta_offset: *dst_offset,
                abbreviation: manual_abbreviation(*dst_offset),
                transition_epoch_seconds: None,
            }),
            Self::Basic(handle) => handle.offset_info(epoch_seconds),
            Self::Extended(handle) => handle.offset_info(epoch_seconds),
        }
    }

    pub fn utc_offset(&self, epoch_seconds: i64) -> TimeResult<TimeOffset> {
        self.offset_info(epoch_seconds).map(|info| info.utc_offset)
    }

    pub fn delta_offset(&self, epoch_seconds: i64) -> TimeResult<TimeOffset> {
        self.offset_info(epoch_seconds).map(|info| info.delta_offset)
    }

    pub fn abbreviation(&self, epoch_seconds: i64) -> TimeResult<Abbreviation> {
        self.offset_info(epoch_seconds).map(|info| info.abbreviation)
    }

    /// Resolves a wall clock time in this zone to an instant.
    pub fn offset_date_time(
        &self,
        datetime: &LocalDateTime,
        disambiguation: Disambiguation,
    ) -> TimeResult<OffsetDateTime> {
        match self {
            Self::Error => Err(INVALID_TIME_ZONE),
            Self::Utc | Self::Manual { .. } => {
                let offset = self.utc_offset(datetime.to_epoch_seconds())?;
                Ok(OffsetDateTime::new(*datetime, offset))
            }
            Self::Basic(handle) => handle.offset_date_time(datetime, disambiguation),
            Self::Extended(handle) => handle.offset_date_time(datetime, disambiguation),
        }
    }

    /// Returns the persisted form of this time zone.
    #[must_use]
    pub fn to_time_zone_data(&self) -> TimeZoneData {
        match self {
            Self::Error => TimeZoneData::Error,
            Self::Utc => TimeZoneData::Utc,
            Self::Manual {
                std_offset,
                dst_offset,
            } => TimeZoneData::Manual {
                std_minutes: std_offset.minutes() as i16,
                dst_minutes: dst_offset.minutes() as i16,
            },
            Self::Basic(handle) => TimeZoneData::ZoneId(handle.zone_info().zone_id),
            Self::Extended(handle) => TimeZoneData::ZoneId(handle.zone_info().zone_id),
        }
    }
}

impl<'a> TimeZone<'a> {
    /// Returns a short form for display: the short zone name, `UTC`, or
    /// the total offset of a manual zone followed by `(STD)` or `(DST)`.
    ///
    /// ```rust
    /// use tinytz::{TimeOffset, TimeZone};
    ///
    /// let tz = TimeZone::for_time_offset(
    ///     TimeOffset::from_hours(-8).unwrap(),
    ///     TimeOffset::from_hours(1).unwrap(),
    /// );
    /// assert_eq!(tz.display_short().to_string(), "-07:00(DST)");
    /// ```
    #[inline]
    #[must_use]
    pub const fn display_short(&self) -> ShortTimeZone<'_, 'a> {
        ShortTimeZone(self)
    }
}

/// The short display form of a [`TimeZone`], see [`TimeZone::display_short`].
#[derive(Debug, Clone, Copy)]
pub struct ShortTimeZone<'z, 'a>(&'z TimeZone<'a>);

impl fmt::Display for ShortTimeZone<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TimeZone::Manual {
                std_offset,
                dst_offset,
            } => match std_offset.checked_add(*dst_offset) {
                Ok(total) if dst_offset.is_zero() => write!(f, "{total}(STD)"),
                Ok(total) => write!(f, "{total}(DST)"),
                Err(_) => f.write_str("<Error>"),
            },
            tz => match tz.short_name() {
                Some(name) => f.write_str(name),
                None => f.write_str("<Error>"),
            },
        }
    }
}

fn manual_abbreviation(dst_offset: TimeOffset) -> Abbreviation {
    if dst_offset.is_zero() {
        tinystr!(8, "STD")
    } else {
        tinystr!(8, "DST")
    }
}

impl fmt::Display for TimeZone<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("<Error>"),
            Self::Utc => f.write_str("UTC"),
            Self::Manual {
                std_offset,
                dst_offset,
            } => write!(f, "{std_offset}{dst_offset}"),
            Self::Basic(handle) => f.write_str(handle.zone_info().name),
            Self::Extended(handle) => f.write_str(handle.zone_info().name),
        }
    }
}

/// The length of the byte form of [`TimeZoneData`].
pub const TIME_ZONE_DATA_LEN: usize = 5;

/// The persisted form of a [`TimeZone`].
///
/// Zone-bound time zones are stored by zone id, so the data can be restored
/// through any manager whose registry contains the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeZoneData {
    #[default]
    Error,
    Utc,
    Manual { std_minutes: i16, dst_minutes: i16 },
    ZoneId(u32),
}

impl TimeZoneData {
    /// Encodes this data as a discriminant byte followed by a little-endian
    /// payload, zero padded.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; TIME_ZONE_DATA_LEN] {
        let mut bytes = [0; TIME_ZONE_DATA_LEN];
        match self {
            Self::Error => {}
            Self::Utc => bytes[0] = 1,
            Self::Manual {
                std_minutes,
                dst_minutes,
            } => {
                bytes[0] = 2;
                bytes[1..3].copy_from_slice(&std_minutes.to_le_bytes());
                bytes[3..5].copy_from_slice(&dst_minutes.to_le_bytes());
            }
            Self::ZoneId(zone_id) => {
                bytes[0] = 3;
                bytes[1..5].copy_from_slice(&zone_id.to_le_bytes());
            }
        }
        bytes
    }

    /// Decodes the byte form written by [`TimeZoneData::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> TimeResult<Self> {
        let bytes: [u8; TIME_ZONE_DATA_LEN] = bytes.try_into().map_err(|_| {
            TimeError::syntax().with_message("time zone data must be exactly 5 bytes.")
        })?;
        match bytes[0] {
            0 => Ok(Self::Error),
            1 => Ok(Self::Utc),
            2 => Ok(Self::Manual {
                std_minutes: i16::from_le_bytes([bytes[1], bytes[2]]),
                dst_minutes: i16::from_le_bytes([bytes[3], bytes[4]]),
            }),
            3 => Ok(Self::ZoneId(u32::from_le_bytes([
                bytes[1], bytes[2], bytes[3], bytes[4],
            ]))),
            _ => Err(TimeError::syntax().with_message("unknown time zone data discriminant.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::{TimeZone, TimeZoneData, TimeZoneKind};
    use crate::{components::TimeOffset, ErrorKind};

    #[test]
    fn manual_zone() {
        let tz = TimeZone::for_time_offset(
            TimeOffset::from_hours(-8).unwrap(),
            TimeOffset::from_hours(1).unwrap(),
        );
        assert_eq!(tz.kind(), TimeZoneKind::Manual);
        let info = tz.offset_info(0).unwrap();
        assert_eq!(info.utc_offset.minutes(), -7 * 60);
        assert!(info.is_dst());
        assert_eq!(info.abbreviation.as_str(), "DST");
        assert_eq!(tz.to_string(), "-08:00+01:00");
        assert!(tz.name().is_none());
        assert!(tz.short_name().is_none());
        assert_eq!(tz.display_short().to_string(), "-07:00(DST)");

        let standard =
            TimeZone::for_time_offset(TimeOffset::from_hour_minute(5, 30).unwrap(), TimeOffset::UTC);
        assert_eq!(standard.display_short().to_string(), "+05:30(STD)");
    }

    #[test]
    fn utc_and_error_zones() {
        let utc = TimeZone::utc();
        assert_eq!(utc.abbreviation(1_700_000_000).unwrap().as_str(), "UTC");
        assert_eq!(utc.to_string(), "UTC");
        assert_eq!(utc.display_short().to_string(), "UTC");

        let error = TimeZone::for_error();
        assert!(error.is_error());
        assert_eq!(error.to_string(), "<Error>");
        assert_eq!(error.display_short().to_string(), "<Error>");
        assert_eq!(error.utc_offset(0).unwrap_err().kind(), ErrorKind::Generic);
    }

    #[test]
    fn time_zone_data_bytes() {
        let manual = TimeZoneData::Manual {
            std_minutes: -480,
            dst_minutes: 60,
        };
        assert_eq!(manual.to_bytes(), [2, 0x20, 0xfe, 60, 0]);
        assert_eq!(TimeZoneData::from_bytes(&manual.to_bytes()), Ok(manual));

        let id = TimeZoneData::ZoneId(0x0102_0304);
        assert_eq!(id.to_bytes(), [3, 4, 3, 2, 1]);
        assert_eq!(TimeZoneData::Utc.to_bytes(), [1, 0, 0, 0, 0]);

        assert!(TimeZoneData::from_bytes(&[1, 0, 0]).is_err());
        assert!(TimeZoneData::from_bytes(&[9, 0, 0, 0, 0]).is_err());
    }
}
