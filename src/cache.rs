//! A fixed-size pool of zone processors.
//!
//! The pool hands out processors by zone: a processor already bound to the
//! requested zone is reused, otherwise the slot under a round-robin cursor
//! is rebound. Rebinding discards the slot's cached transitions, so an
//! evicted zone is recomputed on its next use and results never depend on
//! the cache state.
//!
//! The pool lives behind a [`RefCell`]: an acquisition made while another
//! one is still held returns an error instead of corrupting the slots. This
//! also keeps the cache `!Sync`; sharing it between threads requires an
//! outer lock around acquisition and processor use.

use core::cell::{RefCell, RefMut};

use zonedb::ZoneInfo;

use crate::{
    processor::{BasicZoneProcessor, ExtendedZoneProcessor, ZoneProcessor},
    TimeError, TimeResult,
};

/// A source of zone processors bound to a requested zone.
///
/// This is the object safe face of [`ZoneProcessorCache`], which lets a
/// [`TimeZone`][crate::TimeZone] hold a cache without carrying its
/// capacity in its type.
pub trait ProcessorCache<P: ZoneProcessor> {
    /// Returns a processor bound to `zone_info`.
    fn acquire(&self, zone_info: &'static ZoneInfo) -> TimeResult<RefMut<'_, P>>;
}

#[derive(Debug)]
struct Slots<P, const N: usize> {
    processors: [P; N],
    cursor: usize,
}

/// A round-robin cache of `N` zone processors.
#[derive(Debug)]
pub struct ZoneProcessorCache<P, const N: usize> {
    slots: RefCell<Slots<P, N>>,
}

/// A cache of [`BasicZoneProcessor`]s.
pub type BasicZoneProcessorCache<const N: usize> = ZoneProcessorCache<BasicZoneProcessor, N>;

/// A cache of [`ExtendedZoneProcessor`]s.
pub type ExtendedZoneProcessorCache<const N: usize> = ZoneProcessorCache<ExtendedZoneProcessor, N>;

impl<P: ZoneProcessor, const N: usize> ZoneProcessorCache<P, N> {
    /// Creates a cache of `N` unbound processors.
    pub fn new() -> Self {
        const { assert!(N > 0, "a zone processor cache needs at least one slot") };
        Self {
            slots: RefCell::new(Slots {
                processors: core::array::from_fn(|_| P::new()),
                cursor: 0,
            }),
        }
    }

    /// The number of processor slots.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the zone bound to the processor in `slot`.
    ///
    /// Fails when a processor of this cache is currently acquired.
    pub fn zone_info_at(&self, slot: usize) -> TimeResult<Option<&'static ZoneInfo>> {
        let slots = self.slots.try_borrow().map_err(|_| CACHE_BUSY)?;
        Ok(slots.processors.get(slot).and_then(ZoneProcessor::zone_info))
    }
}

impl<P: ZoneProcessor, const N: usize> Default for ZoneProcessorCache<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

const CACHE_BUSY: TimeError = TimeError::general("zone processor cache is already in use.");

impl<P: ZoneProcessor, const N: usize> ProcessorCache<P> for ZoneProcessorCache<P, N> {
    fn acquire(&self, zone_info: &'static ZoneInfo) -> TimeResult<RefMut<'_, P>> {
        let mut slots = self.slots.try_borrow_mut().map_err(|_| CACHE_BUSY)?;
        let index = match slots
            .processors
            .iter()
            .position(|processor| processor.is_bound_to(zone_info))
        {
            Some(index) => {
                log::trace!("processor cache hit for {} in slot {index}", zone_info.name);
                index
            }
            None => {
                let index = slots.cursor;
                slots.cursor = (index + 1) % N;
                if let Some(evicted) = slots.processors[index].zone_info() {
                    log::debug!(
                        "evicting {} from processor slot {index} for {}",
                        evicted.name,
                        zone_info.name
                    );
                }
                slots.processors[index].set_zone_info(zone_info);
                index
            }
        };
        Ok(RefMut::map(slots, |slots| &mut slots.processors[index]))
    }
}
