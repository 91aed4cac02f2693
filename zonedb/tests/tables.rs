use zonedb::{
    zone_id, EraRule, UntilDateTime, ZoneInfo, BASIC_REGISTRY, EXTENDED_REGISTRY,
};

fn check_registry(registry: &[&ZoneInfo]) {
    for pair in registry.windows(2) {
        assert!(
            pair[0].name < pair[1].name,
            "{} is not sorted before {}",
            pair[0].name,
            pair[1].name
        );
    }
    for zone in registry {
        assert_eq!(zone.zone_id, zone_id(zone.name), "{}", zone.name);
        let (last, rest) = zone.eras.split_last().expect("zone without eras");
        assert_eq!(last.until, UntilDateTime::MAX, "{}", zone.name);
        for (era, next) in rest.iter().zip(zone.eras.iter().skip(1)) {
            assert!(!era.until.is_max());
            if !next.until.is_max() {
                assert!(era.until.as_local_seconds() < next.until.as_local_seconds());
            }
        }
    }
}

#[test]
fn registries_are_sorted_and_complete() {
    check_registry(&BASIC_REGISTRY);
    check_registry(&EXTENDED_REGISTRY);
    for zone in BASIC_REGISTRY {
        assert!(EXTENDED_REGISTRY.iter().any(|z| core::ptr::eq(*z, zone)));
    }
}

#[test]
fn zone_ids_are_unique() {
    for (i, a) in EXTENDED_REGISTRY.iter().enumerate() {
        for b in &EXTENDED_REGISTRY[i + 1..] {
            assert_ne!(a.zone_id, b.zone_id);
        }
    }
}

#[test]
fn policy_rules_are_ordered() {
    for zone in EXTENDED_REGISTRY {
        for era in zone.eras {
            if let EraRule::Policy(policy) = era.rule {
                for pair in policy.rules.windows(2) {
                    assert!(pair[0].from_year <= pair[1].from_year, "{}", policy.name);
                }
                for rule in policy.rules {
                    assert!(rule.from_year <= rule.to_year);
                    assert!((1..=12).contains(&rule.in_month));
                    assert!(rule.at_time_code <= 96);
                }
            }
        }
    }
}

#[test]
fn short_names() {
    assert_eq!(zonedb::zones::ETC_UTC.short_name(), "UTC");
    assert_eq!(
        zonedb::zones::AMERICA_INDIANA_INDIANAPOLIS.short_name(),
        "Indianapolis"
    );
}
