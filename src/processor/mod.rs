//! Zone processors.
//!
//! A zone processor resolves instants against one [`ZoneInfo`] at a time.
//! It keeps the transitions of the most recently queried year in a
//! fixed-capacity buffer, so repeated queries within one year only cost a
//! binary search.
//!
//! Two variants exist:
//!
//! - [`BasicZoneProcessor`] has a small buffer and rejects zones whose rules
//!   use letters longer than one character or fire twice in one month.
//! - [`ExtendedZoneProcessor`] accepts every rule shape at the cost of a
//!   larger buffer.

mod basic;
mod extended;
pub(crate) mod transition;

pub use basic::{BasicZoneProcessor, BASIC_TRANSITION_CAPACITY};
pub use extended::{ExtendedZoneProcessor, EXTENDED_TRANSITION_CAPACITY};
pub use transition::{Abbreviation, Transition, ABBREVIATION_CAPACITY};

use zonedb::ZoneInfo;

use crate::{
    components::{
        timezone::{TimeZone, ZoneHandle},
        LocalDateTime, OffsetDateTime, TimeOffset,
    },
    options::Disambiguation,
    TimeResult,
};

/// The offset information in effect at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetInfo {
    /// Total offset from UTC, standard offset plus delta.
    pub utc_offset: TimeOffset,
    /// Daylight saving delta, may be negative.
    pub delta_offset: TimeOffset,
    pub abbreviation: Abbreviation,
    /// The start of the transition in effect, `None` when it is the
    /// beginning of time.
    pub transition_epoch_seconds: Option<i64>,
}

impl OffsetInfo {
    #[inline]
    #[must_use]
    pub const fn is_dst(&self) -> bool {
        !self.delta_offset.is_zero()
    }
}

/// The transition resolution contract shared by the processor variants.
pub trait ZoneProcessor: Sized {
    /// Creates a processor that is not bound to any zone.
    fn new() -> Self;

    /// The zone this processor is bound to.
    fn zone_info(&self) -> Option<&'static ZoneInfo>;

    /// Binds this processor to `zone_info`, discarding any cached transitions.
    fn set_zone_info(&mut self, zone_info: &'static ZoneInfo);

    /// Returns whether this processor is bound to `zone_info`.
    ///
    /// Zone tables are singletons, so binding is checked by reference identity.
    fn is_bound_to(&self, zone_info: &'static ZoneInfo) -> bool {
        self.zone_info()
            .is_some_and(|bound| core::ptr::eq(bound, zone_info))
    }

    /// The transitions computed for the most recently queried year.
    fn transitions(&self) -> &[Transition];

    /// Returns the offset information in effect at `epoch_seconds`.
    fn offset_info(&mut self, epoch_seconds: i64) -> TimeResult<OffsetInfo>;

    /// Returns the total UTC offset in effect at `epoch_seconds`.
    fn utc_offset(&mut self, epoch_seconds: i64) -> TimeResult<TimeOffset> {
        self.offset_info(epoch_seconds).map(|info| info.utc_offset)
    }

    /// Returns the daylight saving delta in effect at `epoch_seconds`.
    fn delta_offset(&mut self, epoch_seconds: i64) -> TimeResult<TimeOffset> {
        self.offset_info(epoch_seconds).map(|info| info.delta_offset)
    }

    /// Returns the abbreviation in effect at `epoch_seconds`.
    fn abbreviation(&mut self, epoch_seconds: i64) -> TimeResult<Abbreviation> {
        self.offset_info(epoch_seconds).map(|info| info.abbreviation)
    }

    /// Resolves a wall clock time to an instant with its offset.
    fn offset_date_time(
        &mut self,
        datetime: &LocalDateTime,
        disambiguation: Disambiguation,
    ) -> TimeResult<OffsetDateTime>;

    /// Wraps a handle to this processor kind into a [`TimeZone`].
    fn time_zone(handle: ZoneHandle<'_, Self>) -> TimeZone<'_>;
}
