// NOTE: the civil range handled by `tinytz` is [0001-01-01, 9999-12-31].
//
// Neri-Schneider's computational calendar only works on non-negative rata
// die values, so dates are shifted forward by whole 400-year cycles before
// the equations run and shifted back afterwards. The 82 cycle shift from
// the paper covers every year down to -32_800.

const EPOCH_COMPUTATIONAL_RATA_DIE: i32 = 719_468;

const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;
const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant
const DAYS_IN_GREGORIAN_CYCLE: i32 = DAYS_IN_A_400Y_CYCLE as i32;

const SHIFTS: i32 = 82;

// Calculate Rata Die value from gregorian

pub const fn rata_die_from_gregorian_date(year: i32, month: i32, day: i32) -> i32 {
    let (comp_year, comp_month, comp_day, century) = rata_die_first_equations(year, month, day);
    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day
}

// Returns Y, M, D, C
const fn rata_die_first_equations(year: i32, month: i32, day: i32) -> (i32, i32, i32, i32) {
    let j = (month <= 2) as i32;
    let computational_year = year - j;
    let computation_month = month + 12 * j;
    let computation_day = day - 1;
    (
        computational_year,
        computation_month,
        computation_day,
        computational_year / 100,
    )
}

/// Returns the number of days since 1970-01-01 for a gregorian date.
pub const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i32 {
    let shifted = rata_die_from_gregorian_date(year + 400 * SHIFTS, month as i32, day as i32);
    shifted - DAYS_IN_GREGORIAN_CYCLE * SHIFTS - EPOCH_COMPUTATIONAL_RATA_DIE
}

// Computational days to gregorian YMD

// Returns C, N_c
const fn first_equations(rata_die: u32) -> (u32, u32) {
    let n_one = 4 * rata_die + 3;
    let century_rem = n_one.rem_euclid(DAYS_IN_A_400Y_CYCLE);
    let century_num = n_one.div_euclid(DAYS_IN_A_400Y_CYCLE);
    (century_num, century_rem)
}

/// returns Y, N_y
const fn second_equations(rata_die: u32) -> (u32, u32) {
    let (century, rem) = first_equations(rata_die);
    let n_two = rem | 3;
    let year_of_century = (376_287_347 * n_two as u64).div_euclid(TWO_POWER_THIRTY_NINE) as u32;
    let day_of_year = (n_two - 1461 * year_of_century).div_euclid(4);
    let year = 100 * century + year_of_century;
    (year, day_of_year)
}

// Y, M, D, N_y
const fn third_equations(rata_die: u32) -> (u32, u32, u32, u32) {
    let (year, day_of_year) = second_equations(rata_die);
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three.div_euclid(TWO_POWER_SIXTEEN);
    let day = n_three.rem_euclid(TWO_POWER_SIXTEEN).div_euclid(2141);
    (year, month, day, day_of_year)
}

pub const fn gregorian_ymd(rata_die: u32) -> (i32, u8, u8) {
    let (year, month, day, day_of_year) = third_equations(rata_die);
    let j = (day_of_year >= 306) as u32;
    let year = year + j;
    let month = month - 12 * j;
    let day = day + 1;
    (year as i32, month as u8, day as u8)
}

pub const fn gregorian_ymd_from_epoch_days(epoch_days: i32) -> (i32, u8, u8) {
    // K
    let rata_die_shift_constant = EPOCH_COMPUTATIONAL_RATA_DIE + DAYS_IN_GREGORIAN_CYCLE * SHIFTS;
    let year_shift_constant = 400 * SHIFTS;

    let (year, month, day) = gregorian_ymd((epoch_days + rata_die_shift_constant) as u32);
    // Shift the year back to the proper date
    (year - year_shift_constant, month, day)
}

/// Day of the week for an epoch day, with Sunday as 0.
///
/// 1970-01-01 was a Thursday.
pub const fn day_of_week(epoch_days: i32) -> u8 {
    (epoch_days + 4).rem_euclid(7) as u8
}

pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns 0 for a month outside of 1..=12.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH_RATA_DIE: u32 = 719_468; // This is the Rata Die for 1970-01-01

    #[test]
    fn epoch_ymd() {
        let ymd = gregorian_ymd(EPOCH_RATA_DIE);
        assert_eq!(ymd, (1970, 1, 1))
    }

    #[test]
    fn rata_die_from_date() {
        let epoch_rata_die = rata_die_from_gregorian_date(1970, 1, 1);
        assert_eq!(epoch_rata_die, 719_468);
        let neri_scneider_limit_max_rata_die = rata_die_from_gregorian_date(32767, 12, 31);
        assert_eq!(neri_scneider_limit_max_rata_die, 11_968_205);
    }

    #[test]
    fn epoch_days_for_known_dates() {
        assert_eq!(epoch_days_from_gregorian_date(1970, 1, 1), 0);
        assert_eq!(epoch_days_from_gregorian_date(2000, 1, 1), 10_957);
        assert_eq!(epoch_days_from_gregorian_date(1969, 12, 31), -1);
        assert_eq!(epoch_days_from_gregorian_date(1, 1, 1), -719_162);
        assert_eq!(epoch_days_from_gregorian_date(9999, 12, 31), 2_932_896);
    }

    #[test]
    fn epoch_days_limit_to_date() {
        assert_eq!(gregorian_ymd_from_epoch_days(-719_162), (1, 1, 1));
        assert_eq!(gregorian_ymd_from_epoch_days(2_932_896), (9999, 12, 31));
        assert_eq!(gregorian_ymd_from_epoch_days(-1), (1969, 12, 31));
        assert_eq!(gregorian_ymd_from_epoch_days(11_016), (2000, 2, 29));
    }

    #[test]
    fn round_trip_every_day_of_the_range() {
        let mut epoch_days = -719_162;
        while epoch_days <= 2_932_896 {
            let (y, m, d) = gregorian_ymd_from_epoch_days(epoch_days);
            assert_eq!(epoch_days_from_gregorian_date(y, m, d), epoch_days);
            epoch_days += 1;
        }
    }

    #[test]
    fn weekday_anchor() {
        // Thursday
        assert_eq!(day_of_week(0), 4);
        // 2000-01-01, Saturday
        assert_eq!(day_of_week(10_957), 6);
        assert_eq!(day_of_week(-1), 3);
        for d in -100..100 {
            assert_eq!(day_of_week(d), day_of_week(d + 7));
        }
    }

    #[test]
    fn month_lengths() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 13), 0);
    }
}
