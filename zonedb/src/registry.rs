//! Zone registries, sorted by zone name.

use crate::{zones, ZoneInfo};

/// Zones whose rules fit the basic processor: at most one transition per
/// month and single character rule letters.
pub static BASIC_REGISTRY: [&ZoneInfo; 14] = [
    &zones::AMERICA_CHICAGO,
    &zones::AMERICA_DENVER,
    &zones::AMERICA_INDIANA_INDIANAPOLIS,
    &zones::AMERICA_LOS_ANGELES,
    &zones::AMERICA_NEW_YORK,
    &zones::AMERICA_PHOENIX,
    &zones::ASIA_KATHMANDU,
    &zones::ASIA_KOLKATA,
    &zones::ASIA_TOKYO,
    &zones::AUSTRALIA_SYDNEY,
    &zones::ETC_UTC,
    &zones::EUROPE_LONDON,
    &zones::EUROPE_MOSCOW,
    &zones::EUROPE_PARIS,
];

/// Every bundled zone.
pub static EXTENDED_REGISTRY: [&ZoneInfo; 16] = [
    &zones::AFRICA_CAIRO,
    &zones::AFRICA_WINDHOEK,
    &zones::AMERICA_CHICAGO,
    &zones::AMERICA_DENVER,
    &zones::AMERICA_INDIANA_INDIANAPOLIS,
    &zones::AMERICA_LOS_ANGELES,
    &zones::AMERICA_NEW_YORK,
    &zones::AMERICA_PHOENIX,
    &zones::ASIA_KATHMANDU,
    &zones::ASIA_KOLKATA,
    &zones::ASIA_TOKYO,
    &zones::AUSTRALIA_SYDNEY,
    &zones::ETC_UTC,
    &zones::EUROPE_LONDON,
    &zones::EUROPE_MOSCOW,
    &zones::EUROPE_PARIS,
];
