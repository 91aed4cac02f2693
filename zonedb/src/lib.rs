//! Precompiled time zone tables for `tinytz`.
//!
//! The tables in this crate are the output of an offline compilation of the
//! IANA zoneinfo rule files into compact, fixed-width records: years are
//! `i16`, months and days `u8`, times of day and offsets are counted in
//! 15 minute codes. Everything lives in `static` items, so each record is a
//! singleton and reference identity between records is meaningful.
//!
//! ```rust
//! use zonedb::{zones, EXTENDED_REGISTRY};
//!
//! assert!(EXTENDED_REGISTRY.iter().any(|z| core::ptr::eq(*z, &zones::AMERICA_LOS_ANGELES)));
//! assert_eq!(zones::AMERICA_LOS_ANGELES.short_name(), "Los_Angeles");
//! ```
//!
//! The bundled data is trimmed to the zones and rules needed for the years
//! 2000 through 2100. Instants before that window resolve against the
//! earliest era recorded for each zone.

#![no_std]

pub mod policies;
pub mod registry;
pub mod types;
pub mod zones;

#[doc(inline)]
pub use registry::{BASIC_REGISTRY, EXTENDED_REGISTRY};

#[doc(inline)]
pub use types::{
    rule::{DayOfMonth, WeekDay, ZonePolicy, ZoneRule, MAX_YEAR},
    AbbreviationFormat, EraRule, QualifiedTimeKind, UntilDateTime, ZoneEra, ZoneInfo,
};

/// Number of minutes in one offset or time code.
pub const MINUTES_PER_CODE: i32 = 15;

/// Computes the stable numeric identifier of a zone name.
///
/// This is the djb2 string hash, so the identifier only depends on the
/// canonical name and survives any reordering of the registries.
pub const fn zone_id(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut hash: u32 = 5381;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(33).wrapping_add(bytes[i] as u32);
        i += 1;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::zone_id;

    #[test]
    fn djb2_ids() {
        assert_eq!(zone_id(""), 5381);
        assert_eq!(zone_id("a"), 5381 * 33 + 97);
        assert_ne!(zone_id("America/New_York"), zone_id("America/Los_Angeles"));
    }
}
