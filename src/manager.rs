//! The zone manager, the entry point for creating zone-bound time zones.

use zonedb::ZoneInfo;

use crate::{
    cache::ZoneProcessorCache,
    components::{timezone::ZoneHandle, TimeOffset, TimeZone, TimeZoneData},
    processor::{BasicZoneProcessor, ExtendedZoneProcessor, ZoneProcessor},
    registrar::ZoneRegistrar,
};

/// A registry of zones paired with a cache of `N` zone processors.
///
/// Every [`TimeZone`] created by a manager borrows the manager's cache.
/// Lookup failures produce [`TimeZone::Error`] rather than an `Err`, so a
/// caller always receives a handle that can be displayed and persisted.
///
/// ```rust
/// use tinytz::{manager::ExtendedZoneManager, zonedb::EXTENDED_REGISTRY};
///
/// let manager = ExtendedZoneManager::<4>::new(&EXTENDED_REGISTRY);
/// let tz = manager.create_for_zone_name("Europe/Paris");
/// let data = tz.to_time_zone_data().to_bytes();
///
/// let restored = manager.create_for_persisted_data(&data);
/// assert_eq!(restored, tz);
/// ```
#[derive(Debug)]
pub struct ZoneManager<P, const N: usize> {
    registrar: ZoneRegistrar,
    cache: ZoneProcessorCache<P, N>,
}

/// A manager of [`BasicZoneProcessor`]s.
pub type BasicZoneManager<const N: usize> = ZoneManager<BasicZoneProcessor, N>;

/// A manager of [`ExtendedZoneProcessor`]s.
pub type ExtendedZoneManager<const N: usize> = ZoneManager<ExtendedZoneProcessor, N>;

impl<P: ZoneProcessor, const N: usize> ZoneManager<P, N> {
    pub fn new(registry: &'static [&'static ZoneInfo]) -> Self {
        Self {
            registrar: ZoneRegistrar::new(registry),
            cache: ZoneProcessorCache::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn registrar(&self) -> &ZoneRegistrar {
        &self.registrar
    }

    #[inline]
    #[must_use]
    pub const fn cache(&self) -> &ZoneProcessorCache<P, N> {
        &self.cache
    }

    /// Creates a time zone for `zone_info`, which does not need to be part
    /// of the registry.
    pub fn create_for_zone_info(&self, zone_info: &'static ZoneInfo) -> TimeZone<'_> {
        P::time_zone(ZoneHandle::new(zone_info, &self.cache))
    }

    pub fn create_for_zone_name(&self, name: &str) -> TimeZone<'_> {
        match self.registrar.find_by_name(name) {
            Some(zone_info) => self.create_for_zone_info(zone_info),
            None => {
                log::debug!("zone name {name} is not in the registry");
                TimeZone::Error
            }
        }
    }

    pub fn create_for_zone_id(&self, zone_id: u32) -> TimeZone<'_> {
        match self.registrar.find_by_id(zone_id) {
            Some(zone_info) => self.create_for_zone_info(zone_info),
            None => {
                log::debug!("zone id {zone_id:#010x} is not in the registry");
                TimeZone::Error
            }
        }
    }

    pub fn create_for_zone_index(&self, index: usize) -> TimeZone<'_> {
        match self.registrar.find_by_index(index) {
            Some(zone_info) => self.create_for_zone_info(zone_info),
            None => {
                log::debug!("zone index {index} is out of range");
                TimeZone::Error
            }
        }
    }

    /// Restores a time zone from its persisted form.
    pub fn create_for_time_zone_data(&self, data: TimeZoneData) -> TimeZone<'_> {
        match data {
            TimeZoneData::Error => TimeZone::Error,
            TimeZoneData::Utc => TimeZone::Utc,
            TimeZoneData::Manual {
                std_minutes,
                dst_minutes,
            } => match (
                TimeOffset::from_minutes(i32::from(std_minutes)),
                TimeOffset::from_minutes(i32::from(dst_minutes)),
            ) {
                (Ok(std_offset), Ok(dst_offset)) => {
                    TimeZone::for_time_offset(std_offset, dst_offset)
                }
                _ => {
                    log::debug!("invalid manual offsets {std_minutes}/{dst_minutes} minutes");
                    TimeZone::Error
                }
            },
            TimeZoneData::ZoneId(zone_id) => self.create_for_zone_id(zone_id),
        }
    }

    /// Restores a time zone from the bytes of [`TimeZoneData::to_bytes`].
    pub fn create_for_persisted_data(&self, bytes: &[u8]) -> TimeZone<'_> {
        match TimeZoneData::from_bytes(bytes) {
            Ok(data) => self.create_for_time_zone_data(data),
            Err(err) => {
                log::debug!("cannot restore time zone: {err}");
                TimeZone::Error
            }
        }
    }

    pub fn index_for_zone_name(&self, name: &str) -> Option<usize> {
        self.registrar.index_for_name(name)
    }

    pub fn index_for_zone_id(&self, zone_id: u32) -> Option<usize> {
        self.registrar.index_for_id(zone_id)
    }
}
