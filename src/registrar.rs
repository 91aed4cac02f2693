//! Lookup of zone tables by name, id or index.

use zonedb::ZoneInfo;

/// Registries with at least this many zones are searched by name with a
/// binary search, when sorted.
const BINARY_SEARCH_THRESHOLD: usize = 6;

/// A registry of zone tables.
///
/// A lookup miss is an expected outcome, such as a zone name that is not
/// part of the bundled data, and is reported as `None`.
#[derive(Debug, Clone, Copy)]
pub struct ZoneRegistrar {
    registry: &'static [&'static ZoneInfo],
    is_sorted: bool,
}

impl ZoneRegistrar {
    /// Creates a registrar, checking once whether `registry` is sorted by
    /// zone name.
    pub fn new(registry: &'static [&'static ZoneInfo]) -> Self {
        let is_sorted = registry.windows(2).all(|pair| pair[0].name <= pair[1].name);
        if !is_sorted {
            log::debug!("zone registry is not sorted, name lookups are linear");
        }
        Self {
            registry,
            is_sorted,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn is_sorted(&self) -> bool {
        self.is_sorted
    }

    /// Iterates the registered zones in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ZoneInfo> {
        self.registry.iter().copied()
    }

    /// Returns the position of the zone named `name`.
    pub fn index_for_name(&self, name: &str) -> Option<usize> {
        if self.is_sorted && self.registry.len() >= BINARY_SEARCH_THRESHOLD {
            self.registry
                .binary_search_by(|zone| zone.name.cmp(name))
                .ok()
        } else {
            self.registry.iter().position(|zone| zone.name == name)
        }
    }

    /// Returns the position of the zone with the id `zone_id`.
    pub fn index_for_id(&self, zone_id: u32) -> Option<usize> {
        self.registry.iter().position(|zone| zone.zone_id == zone_id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static ZoneInfo> {
        self.index_for_name(name).and_then(|i| self.find_by_index(i))
    }

    pub fn find_by_id(&self, zone_id: u32) -> Option<&'static ZoneInfo> {
        self.index_for_id(zone_id).and_then(|i| self.find_by_index(i))
    }

    pub fn find_by_index(&self, index: usize) -> Option<&'static ZoneInfo> {
        self.registry.get(index).copied()
    }
}
