/*!
Calendar primitives shared by the instant codec and the derivations.

Everything here is proleptic Gregorian: the leap rule extends unchanged
through year zero (which exists and is a leap year) and into negative
years.
*/

use crate::util::imath::{floor_div, floor_div32, floor_mod, floor_mod32};

/// The number of days from 0000-01-01 to 1970-01-01.
pub(crate) const DAYS_TO_UNIX_EPOCH: i64 = 719_528;

pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;
pub(crate) const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
pub(crate) const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;
pub(crate) const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;

/// Returns true if and only if the given year is a leap year.
#[inline]
pub(crate) const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given year, 365 or 366.
#[inline]
pub(crate) const fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in the given month, where the month must be
/// in the range `1..=12`.
#[inline]
pub(crate) const fn days_in_month(year: i32, month: i8) -> i8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Returns the signed count of leap years between year zero and `year`.
///
/// For positive years this counts leap years in `0..year`, and year zero
/// itself is a leap year, so `leap_years_before(1) == 1`. For negative
/// years it counts leap years in `year..0`, negated. Either way,
/// `leap_years_before(y + 1) - leap_years_before(y)` is exactly one when
/// `y` is a leap year and zero when it is not, which is what keeps the
/// day numbering contiguous across every year boundary.
#[inline]
pub(crate) const fn leap_years_before(year: i32) -> i32 {
    floor_div32(year + 3, 4) - floor_div32(year + 99, 100)
        + floor_div32(year + 399, 400)
}

/// Returns the ordinal day of the year, counting from 1, for an in-range
/// month. Days outside the month's real range pass through untouched.
pub(crate) fn day_of_year(year: i32, month: i8, day: i32) -> i32 {
    let mut doy = day;
    let mut m = 1;
    while m < month {
        doy += i32::from(days_in_month(year, m));
        m += 1;
    }
    doy
}

/// Returns the number of days from 0000-01-01 to the given wall date.
///
/// `month` must be in `1..=12`; `day` may be arbitrarily out of range and
/// simply shifts the result, which is how construction normalizes day
/// overflow.
pub(crate) fn days_from_zero(year: i32, month: i8, day: i64) -> i64 {
    let mut days = day - 1;
    let mut m = 1;
    while m < month {
        days += i64::from(days_in_month(year, m));
        m += 1;
    }
    days + i64::from(year) * 365 + i64::from(leap_years_before(year))
}

/// The number of days from 0000-01-01 to 0001-01-01, which is where the
/// cycle stripping in `date_from_days` anchors its era.
const DAYS_TO_YEAR_ONE: i64 = 366;

/// Inverts `days_from_zero`, producing the wall date a day count falls on.
///
/// The era is anchored at 0001-01-01 rather than at year zero so that the
/// leap year of every cycle is the cycle's last year. That makes plain
/// floor division correct for stripping the 400-, 100-, 4- and 1-year
/// cycles: a shorter-than-nominal cycle can only appear last, where it
/// never disturbs the quotient. The one remaining case is the final day
/// of a leap year closing a 4- or 400-year cycle, whose quotient lands
/// one year too far and is backed up to December 31st.
pub(crate) fn date_from_days(days: i64) -> (i32, i8, i8) {
    let n = days - DAYS_TO_YEAR_ONE;
    let mut year = 400 * floor_div(n, 146_097) as i32 + 1;
    // The remainder of a 400 year cycle fits comfortably in 32 bits.
    let mut n = floor_mod(n, 146_097) as i32;
    let n100 = n / 36_524;
    n %= 36_524;
    let n4 = n / 1_461;
    n %= 1_461;
    let n1 = n / 365;
    n %= 365;
    year += 100 * n100 + 4 * n4 + n1;
    if n1 == 4 || n100 == 4 {
        return (year - 1, 12, 31);
    }
    let mut month = 1;
    loop {
        let len = i32::from(days_in_month(year, month));
        if n < len {
            return (year, month, (n + 1) as i8);
        }
        n -= len;
        month += 1;
    }
}

/// Returns the 1-based century of the given year as a positive magnitude.
///
/// Year 0 and the years of the first century BCE all report century 1;
/// the era distinguishes them from years 1..=100.
#[inline]
pub(crate) const fn century(year: i32) -> i32 {
    if year < 0 {
        (-year) / 100 + 1
    } else {
        (year - 1) / 100 + 1
    }
}

/// Returns the month and day of Easter Sunday in the given year, via the
/// Meeus/Butcher Gregorian computus.
///
/// The computus predates proleptic reckoning, but flooring every division
/// that can see a negative operand extends it cleanly to earlier years:
/// the result stays inside the March 22 to April 25 window and keeps
/// falling on a proleptic Sunday.
pub(crate) fn easter_month_day(year: i32) -> (i8, i8) {
    let a = floor_mod32(year, 19);
    let b = floor_div32(year, 100);
    let c = floor_mod32(year, 100);
    let d = floor_div32(b, 4);
    let e = floor_mod32(b, 4);
    let f = floor_div32(b + 8, 25);
    let g = floor_div32(b - f + 1, 3);
    let h = floor_mod32(19 * a + b - d - g + 15, 30);
    // Every operand from here on is non-negative, so plain truncating
    // division and remainder are already the floor forms.
    let i = c / 4;
    let k = c % 4;
    let l = floor_mod32(32 + 2 * e + 2 * i - h - k, 7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = floor_mod32(h + l - 7 * m + 114, 31) + 1;
    (month as i8, day as i8)
}
