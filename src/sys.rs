//! Access to the host clock and time zone.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::{
    components::{TimeZone, ZonedDateTime},
    manager::ZoneManager,
    processor::ZoneProcessor,
    TimeError, TimeResult,
};

const CLOCK_ERROR: TimeError = TimeError::general("Error fetching system time");

/// The current time of the host system.
///
/// Backed by [`std::time::SystemTime`] on native targets and by the
/// browser clock on `wasm32`.
pub struct Now;

impl Now {
    /// Returns the current time as seconds since 1970-01-01T00:00:00Z.
    pub fn epoch_seconds() -> TimeResult<i64> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| CLOCK_ERROR)?;
        i64::try_from(elapsed.as_secs()).map_err(|_| CLOCK_ERROR)
    }

    /// Returns the current time in `tz`.
    pub fn zoned_date_time(tz: TimeZone<'_>) -> TimeResult<ZonedDateTime<'_>> {
        ZonedDateTime::for_epoch_seconds(Self::epoch_seconds()?, tz)
    }

    /// Resolves the host time zone through `manager`.
    ///
    /// Returns [`TimeZone::Error`] when the host zone cannot be read or is
    /// not part of the manager's registry.
    pub fn host_time_zone<P: ZoneProcessor, const N: usize>(
        manager: &ZoneManager<P, N>,
    ) -> TimeZone<'_> {
        match iana_time_zone::get_timezone() {
            Ok(name) => manager.create_for_zone_name(&name),
            Err(err) => {
                log::debug!("cannot read the host time zone: {err}");
                TimeZone::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Now;
    use crate::{manager::ExtendedZoneManager, TimeZone};

    #[test]
    fn host_clock() {
        // 2020-01-01T00:00:00Z
        assert!(Now::epoch_seconds().unwrap() > 1_577_836_800);
        let zdt = Now::zoned_date_time(TimeZone::utc()).unwrap();
        assert!(zdt.year() >= 2020);
    }

    #[test]
    fn host_time_zone_never_panics() {
        let manager = ExtendedZoneManager::<1>::new(&zonedb::EXTENDED_REGISTRY);
        let tz = Now::host_time_zone(&manager);
        assert!(tz.is_error() || tz.zone_info().is_some());
    }
}
