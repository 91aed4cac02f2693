//! Resolving wall clock times that fall in gaps and overlaps.

use core::str::FromStr;

use tinytz::{
    manager::{BasicZoneManager, ExtendedZoneManager},
    options::Disambiguation,
    zonedb::{BASIC_REGISTRY, EXTENDED_REGISTRY},
    ErrorKind, LocalDateTime, TimeZone, ZonedDateTime,
};

fn resolve(tz: TimeZone<'_>, local: &str, disambiguation: Disambiguation) -> (i64, String) {
    let local = LocalDateTime::from_str(local).unwrap();
    let zdt = ZonedDateTime::for_local_date_time(&local, tz, disambiguation).unwrap();
    (zdt.to_epoch_seconds(), zdt.to_string())
}

#[test]
fn spring_forward_gap() {
    let manager = BasicZoneManager::<1>::new(&BASIC_REGISTRY);
    let tz = manager.create_for_zone_name("America/Los_Angeles");

    // 02:30 does not exist on 2024-03-10.
    let (compatible, display) = resolve(tz, "2024-03-10T02:30:00", Disambiguation::Compatible);
    assert_eq!(compatible, 1_710_066_600);
    assert_eq!(display, "2024-03-10T03:30:00-07:00[America/Los_Angeles]");

    let (later, _) = resolve(tz, "2024-03-10T02:30:00", Disambiguation::Later);
    assert_eq!(later, compatible);

    let (earlier, display) = resolve(tz, "2024-03-10T02:30:00", Disambiguation::Earlier);
    assert_eq!(earlier, 1_710_063_000);
    assert_eq!(display, "2024-03-10T01:30:00-08:00[America/Los_Angeles]");

    let local = LocalDateTime::from_str("2024-03-10T02:30:00").unwrap();
    let err = ZonedDateTime::for_local_date_time(&local, tz, Disambiguation::Reject).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn fall_back_overlap() {
    let manager = BasicZoneManager::<1>::new(&BASIC_REGISTRY);
    let tz = manager.create_for_zone_name("America/Los_Angeles");

    // 01:30 occurs twice on 2024-11-03.
    let (earlier, display) = resolve(tz, "2024-11-03T01:30:00", Disambiguation::Earlier);
    assert_eq!(earlier, 1_730_622_600);
    assert_eq!(display, "2024-11-03T01:30:00-07:00[America/Los_Angeles]");

    let (compatible, _) = resolve(tz, "2024-11-03T01:30:00", Disambiguation::Compatible);
    assert_eq!(compatible, earlier);

    let (later, display) = resolve(tz, "2024-11-03T01:30:00", Disambiguation::Later);
    assert_eq!(later, 1_730_626_200);
    assert_eq!(display, "2024-11-03T01:30:00-08:00[America/Los_Angeles]");

    let local = LocalDateTime::from_str("2024-11-03T01:30:00").unwrap();
    assert!(ZonedDateTime::for_local_date_time(&local, tz, Disambiguation::Reject).is_err());
}

#[test]
fn unambiguous_times_ignore_disambiguation() {
    let manager = ExtendedZoneManager::<2>::new(&EXTENDED_REGISTRY);
    let tz = manager.create_for_zone_name("Europe/Paris");
    for disambiguation in [
        Disambiguation::Compatible,
        Disambiguation::Earlier,
        Disambiguation::Later,
        Disambiguation::Reject,
    ] {
        let (at, display) = resolve(tz, "2024-07-14T22:00:00", disambiguation);
        // 2024-07-14T20:00:00Z
        assert_eq!(at, 1_720_987_200);
        assert_eq!(display, "2024-07-14T22:00:00+02:00[Europe/Paris]");
    }
}

#[test]
fn wall_clock_round_trip() {
    let manager = ExtendedZoneManager::<4>::new(&EXTENDED_REGISTRY);
    // 2000-01-01T00:00:00Z through 2037, about every 11 days.
    let mut at = 946_684_800;
    while at < 2_145_916_800 {
        for zone in EXTENDED_REGISTRY {
            let tz = manager.create_for_zone_info(zone);
            let zdt = ZonedDateTime::for_epoch_seconds(at, tz).unwrap();
            let back = ZonedDateTime::for_local_date_time(
                &zdt.local_date_time(),
                tz,
                Disambiguation::Earlier,
            )
            .unwrap();
            // Only the second occurrence of an overlapped time moves.
            if back.to_epoch_seconds() != at {
                let later = ZonedDateTime::for_local_date_time(
                    &zdt.local_date_time(),
                    tz,
                    Disambiguation::Later,
                )
                .unwrap();
                assert_eq!(later.to_epoch_seconds(), at, "{} at {at}", zone.name);
            }
        }
        at += 11 * 86_400 + 7_919;
    }
}
