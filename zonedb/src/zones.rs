//! Compiled zone tables.
//!
//! Eras are listed in order, the last era of every zone runs until
//! [`UntilDateTime::MAX`].

use crate::{
    policies, zone_id, AbbreviationFormat, EraRule, QualifiedTimeKind, UntilDateTime, ZoneEra,
    ZoneInfo,
};

pub static AFRICA_CAIRO: ZoneInfo = ZoneInfo {
    name: "Africa/Cairo",
    zone_id: zone_id("Africa/Cairo"),
    eras: &[
        ZoneEra {
            offset_code: 8,
            rule: EraRule::Policy(&policies::EGYPT),
            format: AbbreviationFormat::Formattable("EE%sT"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static AFRICA_WINDHOEK: ZoneInfo = ZoneInfo {
    name: "Africa/Windhoek",
    zone_id: zone_id("Africa/Windhoek"),
    eras: &[
        ZoneEra {
            offset_code: 8,
            rule: EraRule::Policy(&policies::NAMIBIA),
            format: AbbreviationFormat::Formattable("%s"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static AMERICA_CHICAGO: ZoneInfo = ZoneInfo {
    name: "America/Chicago",
    zone_id: zone_id("America/Chicago"),
    eras: &[
        ZoneEra {
            offset_code: -24,
            rule: EraRule::Policy(&policies::US),
            format: AbbreviationFormat::Formattable("C%sT"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static AMERICA_DENVER: ZoneInfo = ZoneInfo {
    name: "America/Denver",
    zone_id: zone_id("America/Denver"),
    eras: &[
        ZoneEra {
            offset_code: -28,
            rule: EraRule::Policy(&policies::US),
            format: AbbreviationFormat::Formattable("M%sT"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static AMERICA_INDIANA_INDIANAPOLIS: ZoneInfo = ZoneInfo {
    name: "America/Indiana/Indianapolis",
    zone_id: zone_id("America/Indiana/Indianapolis"),
    eras: &[
        ZoneEra {
            offset_code: -20,
            rule: EraRule::Fixed(0),
            format: AbbreviationFormat::Literal("EST"),
            until: UntilDateTime::year(2006),
        },
        ZoneEra {
            offset_code: -20,
            rule: EraRule::Policy(&policies::US),
            format: AbbreviationFormat::Formattable("E%sT"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static AMERICA_LOS_ANGELES: ZoneInfo = ZoneInfo {
    name: "America/Los_Angeles",
    zone_id: zone_id("America/Los_Angeles"),
    eras: &[
        ZoneEra {
            offset_code: -32,
            rule: EraRule::Policy(&policies::US),
            format: AbbreviationFormat::Formattable("P%sT"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static AMERICA_NEW_YORK: ZoneInfo = ZoneInfo {
    name: "America/New_York",
    zone_id: zone_id("America/New_York"),
    eras: &[
        ZoneEra {
            offset_code: -20,
            rule: EraRule::Policy(&policies::US),
            format: AbbreviationFormat::Formattable("E%sT"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static AMERICA_PHOENIX: ZoneInfo = ZoneInfo {
    name: "America/Phoenix",
    zone_id: zone_id("America/Phoenix"),
    eras: &[
        ZoneEra {
            offset_code: -28,
            rule: EraRule::Fixed(0),
            format: AbbreviationFormat::Literal("MST"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static ASIA_KATHMANDU: ZoneInfo = ZoneInfo {
    name: "Asia/Kathmandu",
    zone_id: zone_id("Asia/Kathmandu"),
    eras: &[
        ZoneEra {
            offset_code: 22,
            rule: EraRule::Fixed(0),
            format: AbbreviationFormat::Numeric,
            until: UntilDateTime::year(1986),
        },
        ZoneEra {
            offset_code: 23,
            rule: EraRule::Fixed(0),
            format: AbbreviationFormat::Numeric,
            until: UntilDateTime::MAX,
        },
    ],
};

pub static ASIA_KOLKATA: ZoneInfo = ZoneInfo {
    name: "Asia/Kolkata",
    zone_id: zone_id("Asia/Kolkata"),
    eras: &[
        ZoneEra {
            offset_code: 22,
            rule: EraRule::Fixed(0),
            format: AbbreviationFormat::Literal("IST"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static ASIA_TOKYO: ZoneInfo = ZoneInfo {
    name: "Asia/Tokyo",
    zone_id: zone_id("Asia/Tokyo"),
    eras: &[
        ZoneEra {
            offset_code: 36,
            rule: EraRule::Fixed(0),
            format: AbbreviationFormat::Literal("JST"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static AUSTRALIA_SYDNEY: ZoneInfo = ZoneInfo {
    name: "Australia/Sydney",
    zone_id: zone_id("Australia/Sydney"),
    eras: &[
        ZoneEra {
            offset_code: 40,
            rule: EraRule::Policy(&policies::AN),
            format: AbbreviationFormat::Formattable("AE%sT"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static ETC_UTC: ZoneInfo = ZoneInfo {
    name: "Etc/UTC",
    zone_id: zone_id("Etc/UTC"),
    eras: &[
        ZoneEra {
            offset_code: 0,
            rule: EraRule::Fixed(0),
            format: AbbreviationFormat::Literal("UTC"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static EUROPE_LONDON: ZoneInfo = ZoneInfo {
    name: "Europe/London",
    zone_id: zone_id("Europe/London"),
    eras: &[
        ZoneEra {
            offset_code: 0,
            rule: EraRule::Policy(&policies::EU),
            format: AbbreviationFormat::Pair("GMT", "BST"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static EUROPE_MOSCOW: ZoneInfo = ZoneInfo {
    name: "Europe/Moscow",
    zone_id: zone_id("Europe/Moscow"),
    eras: &[
        ZoneEra {
            offset_code: 12,
            rule: EraRule::Policy(&policies::RUSSIA),
            format: AbbreviationFormat::Pair("MSK", "MSD"),
            until: UntilDateTime {
                year: 2011,
                month: 3,
                day: 27,
                time_code: 8,
                time_kind: QualifiedTimeKind::Standard,
            },
        },
        ZoneEra {
            offset_code: 16,
            rule: EraRule::Fixed(0),
            format: AbbreviationFormat::Literal("MSK"),
            until: UntilDateTime {
                year: 2014,
                month: 10,
                day: 26,
                time_code: 8,
                time_kind: QualifiedTimeKind::Standard,
            },
        },
        ZoneEra {
            offset_code: 12,
            rule: EraRule::Fixed(0),
            format: AbbreviationFormat::Literal("MSK"),
            until: UntilDateTime::MAX,
        },
    ],
};

pub static EUROPE_PARIS: ZoneInfo = ZoneInfo {
    name: "Europe/Paris",
    zone_id: zone_id("Europe/Paris"),
    eras: &[
        ZoneEra {
            offset_code: 4,
            rule: EraRule::Policy(&policies::EU),
            format: AbbreviationFormat::Formattable("CE%sT"),
            until: UntilDateTime::MAX,
        },
    ],
};
