//! This module implements `TimePeriod`.

use core::{cmp::Ordering, fmt};

use crate::{TimeError, TimeResult};

/// Largest magnitude of a `TimePeriod` in seconds, 255:59:59.
const MAX_SECONDS: i32 = 255 * 3600 + 59 * 60 + 59;

/// A signed span of hours, minutes and seconds, such as the time left
/// until an alarm or elapsed since an event.
///
/// Periods compare by their length in seconds, so `-00:00:00` equals
/// `00:00:00`.
///
/// ```rust
/// use tinytz::TimePeriod;
///
/// let period = TimePeriod::from_seconds(-3_725).unwrap();
/// assert_eq!((period.hour(), period.minute(), period.second()), (1, 2, 5));
/// assert!(period.is_negative());
/// assert_eq!(period.to_string(), "-01:02:05");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TimePeriod {
    hour: u8,
    minute: u8,
    second: u8,
    negative: bool,
}

impl TimePeriod {
    pub const ZERO: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        negative: false,
    };

    /// Creates a period from its components. `hour` may exceed 23.
    pub fn try_new(hour: u8, minute: u8, second: u8, negative: bool) -> TimeResult<Self> {
        if minute > 59 || second > 59 {
            return Err(TimeError::range().with_message("period field out of range."));
        }
        Ok(Self {
            hour,
            minute,
            second,
            negative,
        })
    }

    /// Creates a period of `seconds`, at most 255:59:59 in either direction.
    pub fn from_seconds(seconds: i32) -> TimeResult<Self> {
        let magnitude = seconds.unsigned_abs();
        if magnitude > MAX_SECONDS as u32 {
            return Err(TimeError::range().with_message("period out of range."));
        }
        Ok(Self {
            hour: (magnitude / 3600) as u8,
            minute: (magnitude / 60 % 60) as u8,
            second: (magnitude % 60) as u8,
            negative: seconds < 0,
        })
    }

    /// The period between two instants, negative when `end` precedes `start`.
    pub fn between_epoch_seconds(start: i64, end: i64) -> TimeResult<Self> {
        end.checked_sub(start)
            .and_then(|seconds| i32::try_from(seconds).ok())
            .ok_or(TimeError::range().with_message("period out of range."))
            .and_then(Self::from_seconds)
    }

    #[inline]
    #[must_use]
    pub const fn to_seconds(&self) -> i32 {
        let seconds = (self.hour as i32 * 60 + self.minute as i32) * 60 + self.second as i32;
        if self.negative {
            -seconds
        } else {
            seconds
        }
    }

    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative && self.to_seconds() != 0
    }
}

impl PartialEq for TimePeriod {
    fn eq(&self, other: &Self) -> bool {
        self.to_seconds() == other.to_seconds()
    }
}

impl Eq for TimePeriod {}

impl Ord for TimePeriod {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_seconds().cmp(&other.to_seconds())
    }
}

impl PartialOrd for TimePeriod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::TimePeriod;

    #[test]
    fn seconds_round_trip() {
        for seconds in [0, 59, 3_600, -3_725, 921_599, -921_599] {
            assert_eq!(TimePeriod::from_seconds(seconds).unwrap().to_seconds(), seconds);
        }
        assert!(TimePeriod::from_seconds(921_600).is_err());
        assert!(TimePeriod::from_seconds(i32::MIN).is_err());
        assert!(TimePeriod::try_new(1, 60, 0, false).is_err());
    }

    #[test]
    fn ordering_follows_length() {
        let minus_hour = TimePeriod::try_new(1, 0, 0, true).unwrap();
        let plus_minute = TimePeriod::try_new(0, 1, 0, false).unwrap();
        assert!(minus_hour < TimePeriod::ZERO);
        assert!(TimePeriod::ZERO < plus_minute);
        assert_eq!(TimePeriod::try_new(0, 0, 0, true).unwrap(), TimePeriod::ZERO);
        assert_eq!(minus_hour.max(plus_minute), plus_minute);
    }

    #[test]
    fn display() {
        assert_eq!(TimePeriod::from_seconds(45_296).unwrap().to_string(), "12:34:56");
        assert_eq!(TimePeriod::try_new(100, 0, 5, true).unwrap().to_string(), "-100:00:05");
        assert_eq!(TimePeriod::try_new(0, 0, 0, true).unwrap().to_string(), "00:00:00");
    }

    #[test]
    fn between_instants() {
        // 2024-03-10T10:00:00Z minus 2024-03-10T08:30:00Z
        let period = TimePeriod::between_epoch_seconds(1_710_059_400, 1_710_064_800).unwrap();
        assert_eq!(period.to_string(), "01:30:00");
        let back = TimePeriod::between_epoch_seconds(1_710_064_800, 1_710_059_400).unwrap();
        assert_eq!(back.to_seconds(), -5_400);
        assert!(TimePeriod::between_epoch_seconds(0, 1_000_000).is_err());
    }
}
