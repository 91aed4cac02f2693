use zonedb::ZoneInfo;

use super::{
    transition::{RuleCoverage, TransitionCache},
    OffsetInfo, Transition, ZoneProcessor,
};
use crate::{
    components::{
        timezone::{TimeZone, ZoneHandle},
        LocalDateTime, OffsetDateTime,
    },
    options::Disambiguation,
    TimeResult,
};

/// Transition buffer size of [`BasicZoneProcessor`].
pub const BASIC_TRANSITION_CAPACITY: usize = 12;

/// A zone processor for memory constrained devices.
///
/// Returns an [`ErrorKind::Unsupported`][crate::ErrorKind::Unsupported]
/// error for a year in which two rule transitions come from the same
/// month, and for rule letters longer than one character.
///
/// ```rust
/// use tinytz::{processor::{BasicZoneProcessor, ZoneProcessor}, zonedb::zones};
///
/// let mut processor = BasicZoneProcessor::new();
/// processor.set_zone_info(&zones::AMERICA_LOS_ANGELES);
/// let offset = processor.utc_offset(1_710_064_800).unwrap();
/// assert_eq!(offset.minutes(), -7 * 60);
/// ```
#[derive(Debug)]
pub struct BasicZoneProcessor {
    cache: TransitionCache<BASIC_TRANSITION_CAPACITY>,
}

impl Default for BasicZoneProcessor {
    fn default() -> Self {
        <Self as ZoneProcessor>::new()
    }
}

impl ZoneProcessor for BasicZoneProcessor {
    fn new() -> Self {
        Self {
            cache: TransitionCache::new(),
        }
    }

    fn zone_info(&self) -> Option<&'static ZoneInfo> {
        self.cache.zone_info()
    }

    fn set_zone_info(&mut self, zone_info: &'static ZoneInfo) {
        self.cache.bind(zone_info);
    }

    fn transitions(&self) -> &[Transition] {
        self.cache.transitions()
    }

    fn offset_info(&mut self, epoch_seconds: i64) -> TimeResult<OffsetInfo> {
        self.cache.offset_info(epoch_seconds, RuleCoverage::Basic)
    }

    fn offset_date_time(
        &mut self,
        datetime: &LocalDateTime,
        disambiguation: Disambiguation,
    ) -> TimeResult<OffsetDateTime> {
        self.cache
            .offset_date_time(datetime, disambiguation, RuleCoverage::Basic)
    }

    fn time_zone(handle: ZoneHandle<'_, Self>) -> TimeZone<'_> {
        TimeZone::Basic(handle)
    }
}
