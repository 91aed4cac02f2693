//! Compiled rule tables.
//!
//! Each policy holds the rules of one `Rule` name of the zoneinfo files,
//! ordered by `FROM` year. Times are 15 minute codes, `96` is `24:00`.

use crate::types::{
    rule::{DayOfMonth, WeekDay, ZonePolicy, ZoneRule, MAX_YEAR},
    QualifiedTimeKind,
};

/// United States
pub static US: ZonePolicy = ZonePolicy {
    name: "US",
    rules: &[
        ZoneRule {
            from_year: 1967,
            to_year: 2006,
            in_month: 10,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 1967,
            to_year: 1973,
            in_month: 4,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 1974,
            to_year: 1974,
            in_month: 1,
            on_day: DayOfMonth::Day(6),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 1975,
            to_year: 1975,
            in_month: 2,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 1976,
            to_year: 1986,
            in_month: 4,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 1987,
            to_year: 2006,
            in_month: 4,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 2007,
            to_year: MAX_YEAR,
            in_month: 3,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 8),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 2007,
            to_year: MAX_YEAR,
            in_month: 11,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "S",
        },
    ],
};

/// European Union
pub static EU: ZonePolicy = ZonePolicy {
    name: "EU",
    rules: &[
        ZoneRule {
            from_year: 1977,
            to_year: 1980,
            in_month: 4,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 4,
            at_time_kind: QualifiedTimeKind::Universal,
            delta_code: 4,
            letter: "S",
        },
        ZoneRule {
            from_year: 1977,
            to_year: 1977,
            in_month: 9,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 4,
            at_time_kind: QualifiedTimeKind::Universal,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 1978,
            to_year: 1978,
            in_month: 10,
            on_day: DayOfMonth::Day(1),
            at_time_code: 4,
            at_time_kind: QualifiedTimeKind::Universal,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 1979,
            to_year: 1995,
            in_month: 9,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 4,
            at_time_kind: QualifiedTimeKind::Universal,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 1981,
            to_year: MAX_YEAR,
            in_month: 3,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 4,
            at_time_kind: QualifiedTimeKind::Universal,
            delta_code: 4,
            letter: "S",
        },
        ZoneRule {
            from_year: 1996,
            to_year: MAX_YEAR,
            in_month: 10,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 4,
            at_time_kind: QualifiedTimeKind::Universal,
            delta_code: 0,
            letter: "",
        },
    ],
};

/// New South Wales
pub static AN: ZonePolicy = ZonePolicy {
    name: "AN",
    rules: &[
        ZoneRule {
            from_year: 1971,
            to_year: 1985,
            in_month: 10,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 1972,
            to_year: 1972,
            in_month: 2,
            on_day: DayOfMonth::Day(27),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 1973,
            to_year: 1981,
            in_month: 3,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 1982,
            to_year: 1983,
            in_month: 4,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 1984,
            to_year: 1985,
            in_month: 3,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 1986,
            to_year: 1989,
            in_month: 3,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 15),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 1986,
            to_year: 1986,
            in_month: 10,
            on_day: DayOfMonth::Day(19),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 1987,
            to_year: 1999,
            in_month: 10,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 1990,
            to_year: 1995,
            in_month: 3,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 1996,
            to_year: 2005,
            in_month: 3,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 2000,
            to_year: 2000,
            in_month: 8,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 2001,
            to_year: 2007,
            in_month: 10,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 4,
            letter: "D",
        },
        ZoneRule {
            from_year: 2006,
            to_year: 2006,
            in_month: 4,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 2007,
            to_year: 2007,
            in_month: 3,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 2008,
            to_year: MAX_YEAR,
            in_month: 4,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "S",
        },
        ZoneRule {
            from_year: 2008,
            to_year: MAX_YEAR,
            in_month: 10,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 4,
            letter: "D",
        },
    ],
};

/// Egypt
pub static EGYPT: ZonePolicy = ZonePolicy {
    name: "Egypt",
    rules: &[
        ZoneRule {
            from_year: 1995,
            to_year: 2010,
            in_month: 4,
            on_day: DayOfMonth::Last(WeekDay::Fri),
            at_time_code: 0,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 4,
            letter: "S",
        },
        ZoneRule {
            from_year: 1995,
            to_year: 2005,
            in_month: 9,
            on_day: DayOfMonth::Last(WeekDay::Thurs),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 2006,
            to_year: 2006,
            in_month: 9,
            on_day: DayOfMonth::Day(21),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 2007,
            to_year: 2007,
            in_month: 9,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Thurs, 1),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 2008,
            to_year: 2008,
            in_month: 8,
            on_day: DayOfMonth::Last(WeekDay::Thurs),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 2009,
            to_year: 2009,
            in_month: 8,
            on_day: DayOfMonth::Day(20),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 2010,
            to_year: 2010,
            in_month: 8,
            on_day: DayOfMonth::Day(10),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 2010,
            to_year: 2010,
            in_month: 9,
            on_day: DayOfMonth::Day(9),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "S",
        },
        ZoneRule {
            from_year: 2010,
            to_year: 2010,
            in_month: 9,
            on_day: DayOfMonth::Last(WeekDay::Thurs),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 2014,
            to_year: 2014,
            in_month: 5,
            on_day: DayOfMonth::Day(15),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "S",
        },
        ZoneRule {
            from_year: 2014,
            to_year: 2014,
            in_month: 6,
            on_day: DayOfMonth::Day(26),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 2014,
            to_year: 2014,
            in_month: 7,
            on_day: DayOfMonth::Day(31),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "S",
        },
        ZoneRule {
            from_year: 2014,
            to_year: 2014,
            in_month: 9,
            on_day: DayOfMonth::Last(WeekDay::Thurs),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 2023,
            to_year: MAX_YEAR,
            in_month: 4,
            on_day: DayOfMonth::Last(WeekDay::Fri),
            at_time_code: 0,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 4,
            letter: "S",
        },
        ZoneRule {
            from_year: 2023,
            to_year: MAX_YEAR,
            in_month: 10,
            on_day: DayOfMonth::Last(WeekDay::Thurs),
            at_time_code: 96,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "",
        },
    ],
};

/// Russia
pub static RUSSIA: ZonePolicy = ZonePolicy {
    name: "Russia",
    rules: &[
        ZoneRule {
            from_year: 1993,
            to_year: 2010,
            in_month: 3,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 4,
            letter: "S",
        },
        ZoneRule {
            from_year: 1993,
            to_year: 1995,
            in_month: 9,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 1996,
            to_year: 2010,
            in_month: 10,
            on_day: DayOfMonth::Last(WeekDay::Sun),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Standard,
            delta_code: 0,
            letter: "",
        },
    ],
};

/// Namibia
pub static NAMIBIA: ZonePolicy = ZonePolicy {
    name: "Namibia",
    rules: &[
        ZoneRule {
            from_year: 1994,
            to_year: 1994,
            in_month: 3,
            on_day: DayOfMonth::Day(21),
            at_time_code: 0,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: -4,
            letter: "WAT",
        },
        ZoneRule {
            from_year: 1994,
            to_year: 2017,
            in_month: 9,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: 0,
            letter: "CAT",
        },
        ZoneRule {
            from_year: 1995,
            to_year: 2017,
            in_month: 4,
            on_day: DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 1),
            at_time_code: 8,
            at_time_kind: QualifiedTimeKind::Local,
            delta_code: -4,
            letter: "WAT",
        },
    ],
};
