//! Zone table types
//!
//! These types mirror the fixed-width record layout emitted by the offline
//! zoneinfo compiler. All of them are plain `Copy` data that can be placed
//! in `static` items.

use date_equations::gregorian;

pub mod rule;

use rule::ZonePolicy;

use crate::MINUTES_PER_CODE;

/// A compiled zone: its canonical name, its stable id, and the eras that
/// cover it from the beginning of time to the end of time.
#[derive(Debug)]
pub struct ZoneInfo {
    pub name: &'static str,
    /// djb2 hash of `name`, see [`crate::zone_id`].
    pub zone_id: u32,
    /// Ordered eras. The first era has no start, the last era ends at
    /// [`UntilDateTime::MAX`].
    pub eras: &'static [ZoneEra],
}

impl ZoneInfo {
    /// The last component of the zone name, `"Los_Angeles"` for
    /// `"America/Los_Angeles"`.
    pub fn short_name(&self) -> &'static str {
        match self.name.rsplit_once('/') {
            Some((_, short)) => short,
            None => self.name,
        }
    }
}

/// A validity-windowed record of a zone's standard offset and the rules
/// that apply on top of it.
#[derive(Debug, Clone, Copy)]
pub struct ZoneEra {
    /// Standard offset in 15 minute codes.
    pub offset_code: i8,
    pub rule: EraRule,
    pub format: AbbreviationFormat,
    pub until: UntilDateTime,
}

impl ZoneEra {
    pub const fn offset_minutes(&self) -> i32 {
        self.offset_code as i32 * MINUTES_PER_CODE
    }

    pub const fn offset_seconds(&self) -> i64 {
        self.offset_minutes() as i64 * 60
    }
}

/// The `RULES` column of a zone line.
#[derive(Debug, Clone, Copy)]
pub enum EraRule {
    /// A fixed daylight saving delta in 15 minute codes, `-` is `Fixed(0)`.
    Fixed(i8),
    Policy(&'static ZonePolicy),
}

/// The `FORMAT` column of a zone line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbreviationFormat {
    /// A literal abbreviation such as `JST`.
    Literal(&'static str),
    /// A template where `%s` is replaced by the rule letter, `P%sT`.
    Formattable(&'static str),
    /// A `STD/DST` pair, `GMT/BST`.
    Pair(&'static str, &'static str),
    /// `%z`, the numeric offset such as `+0545`.
    Numeric,
}

/// Whether a time is expressed in wall clock, standard or universal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualifiedTimeKind {
    // Local time including dst shifts
    Local,
    // Local standard time
    Standard,
    Universal,
}

impl QualifiedTimeKind {
    /// Converts a time given in this frame to universal seconds.
    pub const fn to_universal_seconds(self, seconds: i64, std_offset: i64, save: i64) -> i64 {
        match self {
            Self::Local => seconds - std_offset - save,
            Self::Standard => seconds - std_offset,
            Self::Universal => seconds,
        }
    }
}

/// The `UNTIL` column of a zone line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UntilDateTime {
    pub year: i16,
    pub month: u8,
    pub day: u8,
    /// Time of day in 15 minute codes, `96` is `24:00`.
    pub time_code: u8,
    pub time_kind: QualifiedTimeKind,
}

impl UntilDateTime {
    /// The end of time, used by the last era of every zone.
    pub const MAX: Self = Self {
        year: rule::MAX_YEAR,
        month: 1,
        day: 1,
        time_code: 0,
        time_kind: QualifiedTimeKind::Universal,
    };

    /// An until at the start of `year`, local time.
    pub const fn year(year: i16) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
            time_code: 0,
            time_kind: QualifiedTimeKind::Local,
        }
    }

    pub const fn is_max(&self) -> bool {
        self.year == rule::MAX_YEAR
    }

    /// Local date and time of this until as seconds, without applying any
    /// offset.
    pub const fn as_local_seconds(&self) -> i64 {
        let days =
            gregorian::epoch_days_from_gregorian_date(self.year as i32, self.month, self.day);
        days as i64 * 86_400 + self.time_code as i64 * MINUTES_PER_CODE as i64 * 60
    }

    /// Returns the universal instant of this until, or `i64::MAX` for
    /// [`UntilDateTime::MAX`].
    pub const fn as_precise_ut_time(&self, std_offset: i64, save: i64) -> i64 {
        if self.is_max() {
            return i64::MAX;
        }
        self.time_kind
            .to_universal_seconds(self.as_local_seconds(), std_offset, save)
    }
}

#[cfg(test)]
mod tests {
    use super::{QualifiedTimeKind, UntilDateTime};

    #[test]
    fn until_to_universal() {
        // Europe/Moscow, 2011 Mar 27 2:00s at +03:00
        let until = UntilDateTime {
            year: 2011,
            month: 3,
            day: 27,
            time_code: 8,
            time_kind: QualifiedTimeKind::Standard,
        };
        assert_eq!(until.as_precise_ut_time(3 * 3600, 0), 1_301_180_400);
        assert_eq!(UntilDateTime::MAX.as_precise_ut_time(0, 0), i64::MAX);
        assert_eq!(UntilDateTime::year(2000).as_local_seconds(), 946_684_800);
    }
}
