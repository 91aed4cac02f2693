//! Types used to represent a compiled rule line.

use date_equations::gregorian;

use super::QualifiedTimeKind;
use crate::MINUTES_PER_CODE;

/// The `TO` value `max`.
pub const MAX_YEAR: i16 = i16::MAX;

/// A named set of rules shared by the eras of one or more zones.
#[derive(Debug)]
pub struct ZonePolicy {
    pub name: &'static str,
    /// Rules ordered by `from_year`.
    pub rules: &'static [ZoneRule],
}

impl ZonePolicy {
    /// Returns the rules that fire during `year`.
    pub fn rules_for_year(&self, year: i32) -> impl Iterator<Item = &'static ZoneRule> + '_ {
        self.rules.iter().filter(move |rule| rule.is_active_in(year))
    }

    /// Returns the first rule with a zero delta, used for the abbreviation
    /// letter of the standard time before any rule has fired.
    pub fn first_standard_rule(&self) -> Option<&'static ZoneRule> {
        self.rules.iter().find(|rule| rule.delta_code == 0)
    }
}

/// A compiled rule line.
#[derive(Debug, Clone, Copy)]
pub struct ZoneRule {
    pub from_year: i16,
    /// Inclusive, [`MAX_YEAR`] for `max`.
    pub to_year: i16,
    pub in_month: u8,
    pub on_day: DayOfMonth,
    /// Time of day in 15 minute codes, `96` is `24:00`.
    pub at_time_code: u8,
    pub at_time_kind: QualifiedTimeKind,
    /// Daylight saving delta in 15 minute codes, may be negative.
    pub delta_code: i8,
    /// The `LETTER/S` column, empty for `-`.
    pub letter: &'static str,
}

impl ZoneRule {
    pub const fn is_active_in(&self, year: i32) -> bool {
        self.from_year as i32 <= year && year <= self.to_year as i32
    }

    /// The last year strictly before `year` in which this rule fired.
    pub const fn last_year_before(&self, year: i32) -> Option<i32> {
        let candidate = if (self.to_year as i32) < year {
            self.to_year as i32
        } else {
            year - 1
        };
        if candidate >= self.from_year as i32 {
            Some(candidate)
        } else {
            None
        }
    }

    pub const fn delta_minutes(&self) -> i32 {
        self.delta_code as i32 * MINUTES_PER_CODE
    }

    pub const fn delta_seconds(&self) -> i64 {
        self.delta_minutes() as i64 * 60
    }

    pub const fn at_time_seconds(&self) -> i64 {
        self.at_time_code as i64 * MINUTES_PER_CODE as i64 * 60
    }

    /// The epoch day on which this rule fires in `year`.
    pub const fn epoch_days_for_year(&self, year: i32) -> i32 {
        self.on_day.epoch_days_in(year, self.in_month)
    }

    /// The universal instant at which this rule fires in `year`, given the
    /// standard offset and the delta that was in effect just before it.
    pub const fn transition_epoch_seconds(&self, year: i32, std_offset: i64, save: i64) -> i64 {
        let local = self.epoch_days_for_year(year) as i64 * 86_400 + self.at_time_seconds();
        self.at_time_kind.to_universal_seconds(local, std_offset, save)
    }
}

/// The day of the month as listed by the `ON` column of a rule line.
///
/// The values can be a day, a GE or LE identifier (Sun>=8), or "lastSun", which
/// represents the last sunday of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOfMonth {
    Last(WeekDay),
    WeekDayGEThanMonthDay(WeekDay, u8),
    WeekDayLEThanMonthDay(WeekDay, u8),
    Day(u8),
}

impl DayOfMonth {
    /// Resolves this day of month to an epoch day. `Sun>=29` style values
    /// may land in the following month.
    pub const fn epoch_days_in(self, year: i32, month: u8) -> i32 {
        match self {
            Self::Day(day) => gregorian::epoch_days_from_gregorian_date(year, month, day),
            Self::Last(week_day) => {
                let last = gregorian::days_in_month(year, month);
                let epoch_days = gregorian::epoch_days_from_gregorian_date(year, month, last);
                let back =
                    (gregorian::day_of_week(epoch_days) as i32 - week_day as i32).rem_euclid(7);
                epoch_days - back
            }
            Self::WeekDayGEThanMonthDay(week_day, day) => {
                let epoch_days = gregorian::epoch_days_from_gregorian_date(year, month, day);
                let forward =
                    (week_day as i32 - gregorian::day_of_week(epoch_days) as i32).rem_euclid(7);
                epoch_days + forward
            }
            Self::WeekDayLEThanMonthDay(week_day, day) => {
                let epoch_days = gregorian::epoch_days_from_gregorian_date(year, month, day);
                let back =
                    (gregorian::day_of_week(epoch_days) as i32 - week_day as i32).rem_euclid(7);
                epoch_days - back
            }
        }
    }
}

/// A week day value, this is used in the `ON` column values.
///
/// NOTE: week days are zero based beginning with Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WeekDay {
    Sun = 0,
    Mon,
    Tues,
    Wed,
    Thurs,
    Fri,
    Sat,
}

impl WeekDay {
    /// The day of the week of an epoch day, 1970-01-01 was a Thursday.
    pub const fn from_epoch_days(epoch_days: i32) -> Self {
        match gregorian::day_of_week(epoch_days) {
            0 => Self::Sun,
            1 => Self::Mon,
            2 => Self::Tues,
            3 => Self::Wed,
            4 => Self::Thurs,
            5 => Self::Fri,
            _ => Self::Sat,
        }
    }

    /// Returns `None` for values above 6.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Sun),
            1 => Some(Self::Mon),
            2 => Some(Self::Tues),
            3 => Some(Self::Wed),
            4 => Some(Self::Thurs),
            5 => Some(Self::Fri),
            6 => Some(Self::Sat),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use date_equations::gregorian::epoch_days_from_gregorian_date;

    use super::{DayOfMonth, WeekDay};
    use crate::policies::US;

    #[test]
    fn resolve_day_of_month() {
        // 2024-03-10 is the second Sunday of March.
        let sun_ge_8 = DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 8);
        assert_eq!(sun_ge_8.epoch_days_in(2024, 3), epoch_days_from_gregorian_date(2024, 3, 10));
        // 2024-10-27 is the last Sunday of October.
        let last_sun = DayOfMonth::Last(WeekDay::Sun);
        assert_eq!(last_sun.epoch_days_in(2024, 10), epoch_days_from_gregorian_date(2024, 10, 27));
        // 2010-09-30 is the last Thursday of September.
        let last_thu = DayOfMonth::Last(WeekDay::Thurs);
        assert_eq!(last_thu.epoch_days_in(2010, 9), epoch_days_from_gregorian_date(2010, 9, 30));
        let sat_le_20 = DayOfMonth::WeekDayLEThanMonthDay(WeekDay::Sat, 20);
        assert_eq!(sat_le_20.epoch_days_in(2024, 4), epoch_days_from_gregorian_date(2024, 4, 20));
        // Sun>=29 in February 2023 rolls into March.
        let rollover = DayOfMonth::WeekDayGEThanMonthDay(WeekDay::Sun, 29);
        assert_eq!(rollover.epoch_days_in(2023, 2), epoch_days_from_gregorian_date(2023, 3, 5));
        assert_eq!(
            DayOfMonth::Day(21).epoch_days_in(1994, 3),
            epoch_days_from_gregorian_date(1994, 3, 21)
        );
    }

    #[test]
    fn rule_years() {
        let count = US.rules_for_year(2024).count();
        assert_eq!(count, 2);
        let oct_rule = &US.rules[0];
        assert_eq!(oct_rule.last_year_before(2024), Some(2006));
        assert_eq!(oct_rule.last_year_before(1967), None);
        assert_eq!(oct_rule.last_year_before(2000), Some(1999));
        assert_eq!(US.first_standard_rule().map(|r| r.letter), Some("S"));
    }

    #[test]
    fn us_spring_forward_2024() {
        // Mar Sun>=8 2:00 wall clock, PST
        let rule = US.rules.iter().find(|r| r.from_year == 2007 && r.in_month == 3);
        let at = rule.map(|r| r.transition_epoch_seconds(2024, -8 * 3600, 0));
        assert_eq!(at, Some(1_710_064_800));
    }
}
