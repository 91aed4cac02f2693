//! Utility date and time equations for `tinytz`

use num_traits::FromPrimitive;

use crate::{TimeError, TimeResult, SECONDS_PER_DAY};

#[inline]
pub(crate) const fn epoch_seconds_for_epoch_days(epoch_days: i32) -> i64 {
    epoch_days as i64 * SECONDS_PER_DAY
}

/// Splits epoch seconds into an epoch day and the seconds into that day.
pub(crate) fn epoch_days_and_seconds(epoch_seconds: i64) -> TimeResult<(i32, u32)> {
    let epoch_days = i32::from_i64(epoch_seconds.div_euclid(SECONDS_PER_DAY))
        .ok_or(TimeError::range().with_message("epoch seconds out of range."))?;
    // rem_euclid is always in 0..86_400
    let seconds = epoch_seconds.rem_euclid(SECONDS_PER_DAY) as u32;
    Ok((epoch_days, seconds))
}

/// The calendar year of an instant read with a zero offset.
pub(crate) fn utc_year_for_epoch_seconds(epoch_seconds: i64) -> TimeResult<i32> {
    let (epoch_days, _) = epoch_days_and_seconds(epoch_seconds)?;
    Ok(date_equations::gregorian::ymd_from_epoch_days(epoch_days).0)
}

/// Epoch seconds of `year`-01-01T00:00:00, read as if it were UTC.
pub(crate) const fn epoch_seconds_for_year(year: i32) -> i64 {
    epoch_seconds_for_epoch_days(date_equations::gregorian::epoch_days_from_gregorian_date(
        year, 1, 1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_epoch_seconds() {
        assert_eq!(epoch_days_and_seconds(0), Ok((0, 0)));
        assert_eq!(epoch_days_and_seconds(-1), Ok((-1, 86_399)));
        assert_eq!(epoch_days_and_seconds(946_684_800 + 61), Ok((10_957, 61)));
        assert!(epoch_days_and_seconds(i64::MAX).is_err());
        assert_eq!(utc_year_for_epoch_seconds(1_710_064_800), Ok(2024));
        assert_eq!(epoch_seconds_for_year(2000), 946_684_800);
    }
}
