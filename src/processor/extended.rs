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

/// Transition buffer size of [`ExtendedZoneProcessor`].
pub const EXTENDED_TRANSITION_CAPACITY: usize = 32;

/// A zone processor covering every rule shape of the zone tables.
///
/// ```rust
/// use tinytz::{processor::{ExtendedZoneProcessor, ZoneProcessor}, zonedb::zones};
///
/// let mut processor = ExtendedZoneProcessor::new();
/// processor.set_zone_info(&zones::AFRICA_CAIRO);
/// // 2010-09-09T22:00:00Z, daylight time resumes after Ramadan.
/// let info = processor.offset_info(1_284_069_600).unwrap();
/// assert_eq!(info.utc_offset.minutes(), 3 * 60);
/// assert_eq!(info.abbreviation.as_str(), "EEST");
/// ```
#[derive(Debug)]
pub struct ExtendedZoneProcessor {
    cache: TransitionCache<EXTENDED_TRANSITION_CAPACITY>,
}

impl Default for ExtendedZoneProcessor {
    fn default() -> Self {
        <Self as ZoneProcessor>::new()
    }
}

impl ZoneProcessor for ExtendedZoneProcessor {
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
        self.cache.offset_info(epoch_seconds, RuleCoverage::Extended)
    }

    fn offset_date_time(
        &mut self,
        datetime: &LocalDateTime,
        disambiguation: Disambiguation,
    ) -> TimeResult<OffsetDateTime> {
        self.cache
            .offset_date_time(datetime, disambiguation, RuleCoverage::Extended)
    }

    fn time_zone(handle: ZoneHandle<'_, Self>) -> TimeZone<'_> {
        TimeZone::Extended(handle)
    }
}

#[cfg(test)]
mod tests {
    use zonedb::zones;

    use super::ExtendedZoneProcessor;
    use crate::processor::ZoneProcessor;

    #[test]
    fn cairo_2010_ramadan() {
        let mut processor = ExtendedZoneProcessor::new();
        processor.set_zone_info(&zones::AFRICA_CAIRO);
        let cases = [
            // End of DST for Ramadan, 2010-08-10T21:00:00Z
            (1_281_474_000, 180, 120),
            // DST resumes, 2010-09-09T22:00:00Z
            (1_284_069_600, 120, 180),
            // End of DST, 2010-09-30T21:00:00Z
            (1_285_880_400, 180, 120),
        ];
        for (at, before, after) in cases {
            assert_eq!(processor.utc_offset(at - 1).unwrap().minutes(), before);
            assert_eq!(processor.utc_offset(at).unwrap().minutes(), after);
        }
        let info = processor.offset_info(1_285_880_400).unwrap();
        assert_eq!(info.transition_epoch_seconds, Some(1_285_880_400));
        assert_eq!(info.abbreviation.as_str(), "EET");
    }

    #[test]
    fn windhoek_negative_dst() {
        let mut processor = ExtendedZoneProcessor::new();
        processor.set_zone_info(&zones::AFRICA_WINDHOEK);
        // 2010-04-04T00:00:00Z, winter time WAT at +01:00
        let info = processor.offset_info(1_270_339_200).unwrap();
        assert_eq!(info.utc_offset.minutes(), 60);
        assert_eq!(info.delta_offset.minutes(), -60);
        assert_eq!(info.abbreviation.as_str(), "WAT");
        assert!(info.is_dst());
        // 2010-09-05T01:00:00Z, back to CAT at +02:00
        let info = processor.offset_info(1_283_648_400).unwrap();
        assert_eq!(info.utc_offset.minutes(), 120);
        assert_eq!(info.abbreviation.as_str(), "CAT");
        assert_eq!(processor.utc_offset(1_283_648_399).unwrap().minutes(), 60);
        // Rules end in 2017, CAT stays.
        assert_eq!(processor.abbreviation(1_704_067_200).unwrap().as_str(), "CAT");
    }
}
