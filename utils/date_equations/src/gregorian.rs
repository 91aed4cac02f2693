/// Gregorian Date Calculations
///
/// This module contains the logic for proleptic Gregorian date calculations
/// relative to the Unix epoch, 1970-01-01.
///
/// ## Neri-Schneider shift window
///
/// | Significant Date | Computational Rata Die |
/// | -----------------|------------------------|
/// | January 1, 1 | 306 |
/// | January 1, 1970 | 719,468 |
/// | December 31, 9999 | 3,652,364 |
///
pub mod neri_schneider;

pub use neri_schneider::{
    day_of_week, days_in_month, epoch_days_from_gregorian_date,
    gregorian_ymd_from_epoch_days as ymd_from_epoch_days, is_leap_year,
    rata_die_from_gregorian_date,
};
