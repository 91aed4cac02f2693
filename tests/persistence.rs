//! Persisting time zones and parsing date time strings.

use core::str::FromStr;

use tinytz::{
    manager::{BasicZoneManager, ExtendedZoneManager},
    zonedb::{zone_id, BASIC_REGISTRY, EXTENDED_REGISTRY},
    ErrorKind, LocalDate, LocalDateTime, LocalTime, OffsetDateTime, TimeOffset, TimeZone,
    TimeZoneData,
};

#[test]
fn persisted_zones_restore_across_managers() {
    let basic = BasicZoneManager::<2>::new(&BASIC_REGISTRY);
    let extended = ExtendedZoneManager::<2>::new(&EXTENDED_REGISTRY);

    for zone in BASIC_REGISTRY {
        let tz = basic.create_for_zone_info(zone);
        let bytes = tz.to_time_zone_data().to_bytes();
        assert_eq!(basic.create_for_persisted_data(&bytes), tz);

        let restored = extended.create_for_persisted_data(&bytes);
        assert_eq!(restored.zone_id(), Some(zone_id(zone.name)));
        assert_eq!(restored.name(), Some(zone.name));
    }

    // Not part of the basic registry.
    let cairo = extended.create_for_zone_name("Africa/Cairo");
    let bytes = cairo.to_time_zone_data().to_bytes();
    assert!(basic.create_for_persisted_data(&bytes).is_error());
}

#[test]
fn self_contained_zones_restore_without_registry() {
    let manager = BasicZoneManager::<1>::new(&[]);
    let manual = TimeZone::for_time_offset(
        TimeOffset::from_hour_minute(5, 30).unwrap(),
        TimeOffset::UTC,
    );
    for tz in [TimeZone::utc(), manual, TimeZone::for_error()] {
        let bytes = tz.to_time_zone_data().to_bytes();
        assert_eq!(manager.create_for_persisted_data(&bytes), tz);
    }
    assert_eq!(manual.to_string(), "+05:30+00:00");
    assert_eq!(
        manual.to_time_zone_data(),
        TimeZoneData::Manual {
            std_minutes: 330,
            dst_minutes: 0
        }
    );
}

#[test]
fn malformed_strings_are_syntax_errors() {
    for input in [
        "2024-1-01",
        "2024/01/01",
        "2024-01-01 ",
        "2024-01-0x",
        "",
        "２０２４-01-01",
    ] {
        let err = LocalDate::from_str(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax, "{input:?}");
    }
    for input in ["12:00", "12-00-00", "12:00:00Z"] {
        assert_eq!(LocalTime::from_str(input).unwrap_err().kind(), ErrorKind::Syntax);
    }
    for input in ["2024-01-01 12:00:00", "2024-01-01T12:00"] {
        assert_eq!(LocalDateTime::from_str(input).unwrap_err().kind(), ErrorKind::Syntax);
    }
    for input in ["2024-01-01T12:00:00Z", "2024-01-01T12:00:00*01:00"] {
        assert_eq!(OffsetDateTime::from_str(input).unwrap_err().kind(), ErrorKind::Syntax);
    }
    assert_eq!(TimeOffset::from_str("0800").unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn well_formed_but_invalid_values_are_range_errors() {
    assert_eq!(LocalDate::from_str("2023-02-29").unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(LocalTime::from_str("24:00:00").unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(TimeOffset::from_str("+05:20").unwrap_err().kind(), ErrorKind::Range);

    let odt = OffsetDateTime::from_str("2024-02-29T23:30:00-05:00").unwrap();
    assert_eq!(odt.to_string(), "2024-02-29T23:30:00-05:00");
    let utc = odt.with_offset(TimeOffset::UTC).unwrap();
    assert_eq!(utc.to_string(), "2024-03-01T04:30:00+00:00");
}
