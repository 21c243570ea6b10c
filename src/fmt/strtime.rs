/*!
Support for "printf" style formatting of datetimes.

The interpreter here walks a template string and replaces directives of the
form `%` + optional flag + letter with fields of a
[`DateTime`](crate::civil::DateTime). Everything else is copied through
verbatim. This module only produces text; parsing datetimes from strings is
not supported.

# Directives

| Directive | Meaning | Padded width |
|---|---|---|
| `%%` | a literal `%` | |
| `%H` | hour (00..23) | 2 |
| `%I` | hour (01..12) | 2 |
| `%M` | minute | 2 |
| `%S` | second | 2 |
| `%s` | whole seconds since the UNIX epoch | 12 |
| `%u` | microsecond | 6 |
| `%Y` | full year; year `0` is 1 BCE, years may be negative | 4 |
| `%y` | last two digits of `%Y` | 2 |
| `%F` | ISO 8601 week numbering year | 4 |
| `%J` | full year with no year zero and no negative years | 4 |
| `%j` | last two digits of `%J` | 2 |
| `%m` | month (1..12) | 2 |
| `%d` | day of the month | 2 |
| `%a` | abbreviated name of the month (`Jun`) | 3 |
| `%A` | full name of the month (`June`) | 9 |
| `%r` | month as a Roman numeral (`I`..`XII`) | |
| `%R` | `%J` year as a Roman numeral | |
| `%b` | abbreviated name of the weekday (`Thu`) | 3 |
| `%B` | full name of the weekday (`Thursday`) | 3 |
| `%w` | weekday (1..7, where 1 is Monday) | 1 |
| `%v` | weekday (0..6, where 0 is Sunday) | 1 |
| `%c` | century, counted from 1 in both directions | 2 |
| `%C` | century as a Roman numeral | |
| `%L` | era label, `CE` or `BCE` | 2 |
| `%l` | era as a sign, `+` or `-` | 1 |
| `%W` | ISO 8601 week number | 2 |
| `%p` | `a.m.` or `p.m.` | 3 |
| `%P` | `AM` or `PM` | 3 |
| `%t` | sign of the offset, `+` or `-` | 1 |
| `%Z` | whole hours of the absolute offset | 2 |
| `%z` | leftover minutes of the absolute offset | 2 |
| `%X` | absolute offset in whole minutes | 2 |

Note the month/weekday assignment: the month owns `%a`/`%A` and the weekday
owns `%b`/`%B`, which is the reverse of POSIX `strftime`. Templates written
for other libraries need their name directives swapped.

# Flags and padding

A directive letter may be preceded by exactly one flag:

- `0` pads the value with zeros, between the sign and the digits.
- `+` forces a sign on numbers and pads with spaces.
- ` ` (a space) writes a blank in the sign position of non-negative
  numbers and pads with spaces.

Padding only happens when a flag is present, to the default width in the
table above. The width counts the whole field, widening by one when a sign
is written, and names right justify in spaces. Without a flag, values render
at their natural width:

```
use kalends::{civil::datetime, fmt::strtime};

let dt = datetime(2015, 6, 4, 9, 5, 0, 0, 0);
assert_eq!(strtime::format("%Y-%m-%d", &dt)?, "2015-6-4");
assert_eq!(strtime::format("%0Y-%0m-%0d", &dt)?, "2015-06-04");
assert_eq!(strtime::format("%+Y", &dt)?, "+2015");
# Ok::<(), kalends::Error>(())
```

# Totality

Formatting cannot fail for reasons of its own. An unknown directive letter
is skipped without output (its flag is consumed along with it), and a `%`
that runs into the end of the template simply ends the walk. The only errors
returned are those of the underlying writer, and writers like `String`
never produce any.

```
use kalends::{civil::datetime, fmt::strtime};

let dt = datetime(2015, 6, 11, 21, 53, 12, 543_294, 120);
assert_eq!(strtime::format("%H o'clock, 100%% %q real", &dt)?, "21 o'clock, 100% real");
# Ok::<(), kalends::Error>(())
```
*/

use alloc::string::String;

use crate::{
    civil::{DateTime, Weekday},
    error::Error,
    fmt::{roman, DecimalFormatter, Write, WriteExt},
};

/// ISO 8601 with a `T` separator.
///
/// Example: `2015-06-11T21:53:12.543294+02:00`
pub const ISO_8601: &str = "%0Y-%0m-%0dT%0H:%0M:%0S.%0u%t%0Z:%0z";

/// ISO 8601 with a space separator and a detached offset.
///
/// Example: `2015-06-11 21:53:12.543294 +02:00`
pub const ISO_8601_SPACED: &str = "%0Y-%0m-%0d %0H:%0M:%0S.%0u %t%0Z:%0z";

/// Like [`ISO_8601_SPACED`], but with the microseconds left off.
///
/// Example: `2015-06-11 21:53:12 +02:00`
pub const ISO_8601_NO_MICRO: &str = "%0Y-%0m-%0d %0H:%0M:%0S %t%0Z:%0z";

/// The ISO 8601 week date, with the weekday counted from Monday.
///
/// Example: `2015-W24-4`
pub const ISO_8601_WEEK_DATE: &str = "%0Y-W%0W-%w";

/// Just the clock fields.
///
/// Example: `21:53:12`
pub const TIME_OF_DAY: &str = "%0H:%0M:%0S";

/// Just the date fields.
///
/// Example: `2015-06-11`
pub const DATE_ONLY: &str = "%0Y-%0m-%0d";

/// The RFC 2822 shape, under this crate's name directives.
///
/// Example: `Thu, 11 Jun 2015 21:53:12 +0200`
pub const RFC_2822ISH: &str = "%b, %d %a %Y %H:%0M:%0S %t%0Z%0z";

/// A short American date and 12 hour clock.
///
/// Example: `6/11/15 9:53 p.m.`
pub const US_SHORT: &str = "%m/%d/%y %I:%0M %p";

/// An American date with abbreviated names.
///
/// Example: `Thu 11 Jun 2015, 9:53 p.m.`
pub const US_LONG: &str = "%b %d %a %Y, %I:%0M %p";

/// An American date with the names written out.
///
/// Example: `Thursday, June 11, 2015, 9:53 p.m.`
pub const US_LONGER: &str = "%B, %A %d, %Y, %I:%0M %p";

/// Formats a datetime into a string using the template given.
///
/// # Example
///
/// ```
/// use kalends::{civil::datetime, fmt::strtime};
///
/// let dt = datetime(2024, 7, 14, 0, 0, 0, 0, 0);
/// let string = strtime::format("%A %d, %0Y was a %B.", &dt)?;
/// assert_eq!(string, "July 14, 2024 was a Sunday.");
/// # Ok::<(), kalends::Error>(())
/// ```
pub fn format(template: &str, dt: &DateTime) -> Result<String, Error> {
    let mut buf = String::with_capacity(template.len());
    format_into(template, dt, &mut buf)?;
    Ok(buf)
}

/// Formats a datetime into the writer given, using the template given.
///
/// Errors can only come from the writer. Writing into a
/// [`FixedBuffer`](crate::fmt::FixedBuffer) bounds the output without
/// allocating, recording truncation instead of failing.
///
/// # Example
///
/// ```
/// use kalends::{civil::datetime, fmt::strtime};
///
/// let dt = datetime(2015, 6, 11, 21, 53, 12, 543_294, 120);
/// let mut buf = String::new();
/// strtime::format_into(strtime::TIME_OF_DAY, &dt, &mut buf)?;
/// assert_eq!(buf, "21:53:12");
/// # Ok::<(), kalends::Error>(())
/// ```
pub fn format_into<W: Write>(
    template: &str,
    dt: &DateTime,
    wtr: &mut W,
) -> Result<(), Error> {
    Formatter { template, dt, wtr }.format()
}

/// A "lazy" implementation of `std::fmt::Display` using a format template.
///
/// Values of this type are created by [`DateTime::strftime`]. The datetime
/// is captured and rendering happens when the value is actually displayed.
/// Since formatting here is total, displaying never fails unless the
/// destination itself does.
///
/// # Example
///
/// ```
/// use kalends::civil::datetime;
///
/// let dt = datetime(2015, 6, 11, 21, 53, 12, 543_294, 120);
/// let string = format!("sighted at {}", dt.strftime("%0H:%0M"));
/// assert_eq!(string, "sighted at 21:53");
/// ```
pub struct Display<'f> {
    pub(crate) template: &'f str,
    pub(crate) datetime: DateTime,
}

impl<'f> core::fmt::Display for Display<'f> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::fmt::FmtWrite;

        format_into(self.template, &self.datetime, &mut FmtWrite(f))
            .map_err(|_| core::fmt::Error)
    }
}

impl<'f> core::fmt::Debug for Display<'f> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Display")
            .field("template", &self.template)
            .field("datetime", &self.datetime)
            .finish()
    }
}

struct Formatter<'f, 't, 'w, W> {
    template: &'f str,
    dt: &'t DateTime,
    wtr: &'w mut W,
}

impl<'f, 't, 'w, W: Write> Formatter<'f, 't, 'w, W> {
    fn format(&mut self) -> Result<(), Error> {
        while !self.template.is_empty() {
            let bytes = self.template.as_bytes();
            let Some(at) = bytes.iter().position(|&b| b == b'%') else {
                self.wtr.write_str(self.template)?;
                self.template = "";
                break;
            };
            if at > 0 {
                // `%` is ASCII, so the split point is a char boundary.
                self.wtr.write_str(&self.template[..at])?;
                self.template = &self.template[at..];
            }
            self.directive()?;
        }
        Ok(())
    }

    /// Handles one directive. `self.template` begins at its `%`.
    fn directive(&mut self) -> Result<(), Error> {
        let bytes = self.template.as_bytes();
        let mut at = 1;
        let flag = match bytes.get(at) {
            Some(&byte @ (b'+' | b'0' | b' ')) => {
                at += 1;
                Some(byte)
            }
            _ => None,
        };
        let Some(&letter) = bytes.get(at) else {
            // A trailing `%`, with or without a flag, ends the walk.
            self.template = "";
            return Ok(());
        };
        // Consume the directive before dispatching. An unknown non-ASCII
        // byte starts a multibyte char that is skipped whole, which keeps
        // the walk on char boundaries.
        let skip = self.template[at..].chars().next().map_or(1, char::len_utf8);
        self.template = &self.template[at + skip..];

        let dt = self.dt;
        match letter {
            b'%' => self.wtr.write_str("%"),
            b'H' => self.number(flag, 2, i64::from(dt.hour())),
            b'I' => {
                let hour = dt.hour() % 12;
                let hour = if hour == 0 { 12 } else { hour };
                self.number(flag, 2, i64::from(hour))
            }
            b'M' => self.number(flag, 2, i64::from(dt.minute())),
            b'S' => self.number(flag, 2, i64::from(dt.second())),
            b's' => self.number(flag, 12, dt.to_unix_second()),
            b'u' => self.number(flag, 6, i64::from(dt.microsecond())),
            b'Y' => self.number(flag, 4, i64::from(dt.year())),
            b'y' => self.number(flag, 2, i64::from(dt.year() % 100)),
            b'F' => self.number(flag, 4, i64::from(dt.iso_week_year())),
            b'J' => self.number(flag, 4, i64::from(no_year_zero(dt.year()))),
            b'j' => {
                self.number(flag, 2, i64::from(no_year_zero(dt.year()) % 100))
            }
            b'm' => self.number(flag, 2, i64::from(dt.month())),
            b'd' => self.number(flag, 2, i64::from(dt.day())),
            b'a' => self.string(flag, 3, month_name_abbrev(dt.month())),
            b'A' => self.string(flag, 9, month_name_full(dt.month())),
            b'r' => self.roman(dt.month() as u32),
            b'R' => self.roman(no_year_zero(dt.year()) as u32),
            b'b' => self.string(flag, 3, weekday_name_abbrev(dt.weekday())),
            b'B' => self.string(flag, 3, weekday_name_full(dt.weekday())),
            b'w' => self.number(
                flag,
                1,
                i64::from(dt.weekday().to_monday_one_offset()),
            ),
            b'v' => self.number(
                flag,
                1,
                i64::from(dt.weekday().to_sunday_zero_offset()),
            ),
            b'c' => self.number(flag, 2, i64::from(dt.century())),
            b'C' => self.roman(dt.century() as u32),
            b'L' => {
                self.string(flag, 2, if dt.year() <= 0 { "BCE" } else { "CE" })
            }
            b'l' => {
                self.string(flag, 1, if dt.year() <= 0 { "-" } else { "+" })
            }
            b'W' => self.number(flag, 2, i64::from(dt.iso_week_number())),
            b'p' => self.string(
                flag,
                3,
                if dt.hour() < 12 { "a.m." } else { "p.m." },
            ),
            b'P' => {
                self.string(flag, 3, if dt.hour() < 12 { "AM" } else { "PM" })
            }
            b't' => self.string(
                flag,
                1,
                if dt.offset().is_negative() { "-" } else { "+" },
            ),
            b'Z' => self.number(flag, 2, i64::from(dt.offset().hours_part())),
            b'z' => {
                self.number(flag, 2, i64::from(dt.offset().minutes_part()))
            }
            b'X' => {
                self.number(flag, 2, i64::from(dt.offset().minutes().abs()))
            }
            // Unknown directives are skipped without output.
            _ => Ok(()),
        }
    }

    fn number(
        &mut self,
        flag: Option<u8>,
        width: u8,
        value: i64,
    ) -> Result<(), Error> {
        let formatter = match flag {
            None => DecimalFormatter::new(),
            Some(b'0') => DecimalFormatter::new().padding(width),
            Some(flag) => {
                // Space padding counts the sign toward the field width, so
                // a negative value widens the field by one to keep the
                // digit count, like the zero padded form does.
                let width = if value < 0 { width + 1 } else { width };
                let formatter =
                    DecimalFormatter::new().padding_byte(b' ').padding(width);
                if flag == b'+' {
                    formatter.force_sign()
                } else {
                    formatter.blank_sign()
                }
            }
        };
        self.wtr.write_int(&formatter, value)
    }

    fn string(
        &mut self,
        flag: Option<u8>,
        width: u8,
        string: &str,
    ) -> Result<(), Error> {
        if flag.is_some() {
            for _ in string.len()..usize::from(width) {
                self.wtr.write_str(" ")?;
            }
        }
        self.wtr.write_str(string)
    }

    fn roman(&mut self, value: u32) -> Result<(), Error> {
        let mut buf = [0u8; roman::MAX_YEAR_LEN];
        let len = roman::encode(value, &mut buf);
        // SAFETY: This is safe because `roman::encode` only ever writes
        // ASCII bytes into the buffer.
        let numeral = unsafe { core::str::from_utf8_unchecked(&buf[..len]) };
        self.wtr.write_str(numeral)
    }
}

/// Returns the year under the convention that there is no year zero.
///
/// Year `0` becomes `1` and earlier years shift by one, so `-43` becomes
/// `44`. An era label or sign is a separate directive.
fn no_year_zero(year: i32) -> i32 {
    if year <= 0 {
        1 - year
    } else {
        year
    }
}

/// Returns the "full" month name.
fn month_name_full(month: i8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        unk => unreachable!("invalid month {unk}"),
    }
}

/// Returns the abbreviated month name.
fn month_name_abbrev(month: i8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        unk => unreachable!("invalid month {unk}"),
    }
}

/// Returns the "full" weekday name.
fn weekday_name_full(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

/// Returns an abbreviated weekday name.
fn weekday_name_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use crate::civil::{datetime, DateTime};

    use super::*;

    fn f(template: &str, dt: DateTime) -> String {
        format(template, &dt).unwrap()
    }

    /// The reference point used across these tests.
    fn sighting() -> DateTime {
        datetime(2015, 6, 11, 21, 53, 12, 543_294, 120)
    }

    #[test]
    fn clock_directives() {
        let dt = sighting();
        insta::assert_snapshot!(f("%H", dt), @"21");
        insta::assert_snapshot!(f("%0H", dt), @"21");
        insta::assert_snapshot!(f("%I", dt), @"9");
        insta::assert_snapshot!(f("%0I", dt), @"09");
        insta::assert_snapshot!(f("%M", dt), @"53");
        insta::assert_snapshot!(f("%S", dt), @"12");
        insta::assert_snapshot!(f("%u", dt), @"543294");
        insta::assert_snapshot!(f("%s", dt), @"1434052392");
        insta::assert_snapshot!(f("%0s", dt), @"001434052392");

        let morning = datetime(2015, 6, 11, 9, 5, 7, 0, 0);
        insta::assert_snapshot!(f("%H", morning), @"9");
        insta::assert_snapshot!(f("%0H:%0M:%0S", morning), @"09:05:07");
        insta::assert_snapshot!(f("%u", morning), @"0");
        insta::assert_snapshot!(f("%0u", morning), @"000000");
    }

    #[test]
    fn twelve_hour_clock() {
        let at = |hour| datetime(2015, 6, 11, hour, 0, 0, 0, 0);
        insta::assert_snapshot!(f("%I %p %P", at(0)), @"12 a.m. AM");
        insta::assert_snapshot!(f("%I %p %P", at(11)), @"11 a.m. AM");
        insta::assert_snapshot!(f("%I %p %P", at(12)), @"12 p.m. PM");
        insta::assert_snapshot!(f("%I %p %P", at(13)), @"1 p.m. PM");
        insta::assert_snapshot!(f("%I %p %P", at(23)), @"11 p.m. PM");
    }

    #[test]
    fn date_directives() {
        let dt = sighting();
        insta::assert_snapshot!(f("%Y", dt), @"2015");
        insta::assert_snapshot!(f("%y", dt), @"15");
        insta::assert_snapshot!(f("%m", dt), @"6");
        insta::assert_snapshot!(f("%0m", dt), @"06");
        insta::assert_snapshot!(f("%d", dt), @"11");
        insta::assert_snapshot!(f("%J %j", dt), @"2015 15");
        insta::assert_snapshot!(f("%c %C", dt), @"21 XXI");
        insta::assert_snapshot!(f("%L %l", dt), @"CE +");
    }

    #[test]
    fn name_directives_take_month_and_weekday() {
        let dt = sighting();
        insta::assert_snapshot!(f("%a %A", dt), @"Jun June");
        insta::assert_snapshot!(f("%b %B", dt), @"Thu Thursday");
        insta::assert_snapshot!(f("%0A", dt), @"     June");
        insta::assert_snapshot!(f("%0a", dt), @"Jun");
        insta::assert_snapshot!(f("%0B", dt), @"Thursday");
        insta::assert_snapshot!(f("%r of %R", dt), @"VI of MMXV");
    }

    #[test]
    fn weekday_numbers() {
        let dt = sighting();
        insta::assert_snapshot!(f("%w %v", dt), @"4 4");

        let sunday = datetime(2024, 7, 14, 0, 0, 0, 0, 0);
        insta::assert_snapshot!(f("%w %v", sunday), @"7 0");

        let monday = datetime(2024, 7, 15, 0, 0, 0, 0, 0);
        insta::assert_snapshot!(f("%w %v", monday), @"1 1");
    }

    #[test]
    fn iso_week_directives() {
        insta::assert_snapshot!(
            f("%F-W%0W", datetime(2015, 6, 11, 0, 0, 0, 0, 0)),
            @"2015-W24",
        );
        insta::assert_snapshot!(
            f("%F-W%0W", datetime(2016, 1, 1, 0, 0, 0, 0, 0)),
            @"2015-W53",
        );
        insta::assert_snapshot!(
            f("%F-W%0W", datetime(2014, 12, 29, 0, 0, 0, 0, 0)),
            @"2015-W01",
        );
    }

    #[test]
    fn offset_directives() {
        let dt = sighting();
        insta::assert_snapshot!(f("%t%0Z:%0z", dt), @"+02:00");
        insta::assert_snapshot!(f("%X", dt), @"120");

        let hawaii = datetime(1941, 12, 7, 7, 48, 0, 0, -630);
        insta::assert_snapshot!(f("%t%0Z:%0z", hawaii), @"-10:30");
        insta::assert_snapshot!(f("%t%Z %z", hawaii), @"-10 30");
        insta::assert_snapshot!(f("%X %0X", hawaii), @"630 630");
    }

    #[test]
    fn flags_on_numbers() {
        let dt = sighting();
        insta::assert_snapshot!(f("%+Y", dt), @"+2015");
        insta::assert_snapshot!(f("% Y", dt), @" 2015");
        insta::assert_snapshot!(f("%+d", dt), @"+11");
        insta::assert_snapshot!(f("% d", dt), @" 11");
        insta::assert_snapshot!(f("%+m", dt), @"+6");
        insta::assert_snapshot!(f("% m", dt), @" 6");
    }

    #[test]
    fn years_before_the_common_era() {
        let ides = datetime(-43, 3, 15, 21, 0, 0, 0, 120);
        insta::assert_snapshot!(f("%Y", ides), @"-43");
        insta::assert_snapshot!(f("%0Y", ides), @"-0043");
        insta::assert_snapshot!(f("%+Y", ides), @"  -43");
        insta::assert_snapshot!(f("% Y", ides), @"  -43");
        insta::assert_snapshot!(f("%y", ides), @"-43");
        insta::assert_snapshot!(f("%J %j", ides), @"44 44");
        insta::assert_snapshot!(f("%L %l", ides), @"BCE -");
        insta::assert_snapshot!(f("%c %C", ides), @"1 I");
        insta::assert_snapshot!(f("%A %d, %R %L", ides), @"March 15, XLIV BCE");
    }

    #[test]
    fn literal_passthrough() {
        let dt = sighting();
        insta::assert_snapshot!(f("", dt), @"");
        insta::assert_snapshot!(f("no directives", dt), @"no directives");
        insta::assert_snapshot!(f("%%", dt), @"%");
        insta::assert_snapshot!(f("%0%", dt), @"%");
        insta::assert_snapshot!(f("100%% done", dt), @"100% done");
        insta::assert_snapshot!(f("année %Y", dt), @"année 2015");
    }

    #[test]
    fn unknown_directives_are_skipped() {
        let dt = sighting();
        insta::assert_snapshot!(f("%E", dt), @"");
        insta::assert_snapshot!(f("a%Eb", dt), @"ab");
        insta::assert_snapshot!(f("a%0Eb", dt), @"ab");
        insta::assert_snapshot!(f("%é!", dt), @"!");
    }

    #[test]
    fn trailing_percent_ends_the_walk() {
        let dt = sighting();
        insta::assert_snapshot!(f("abc%", dt), @"abc");
        insta::assert_snapshot!(f("abc%0", dt), @"abc");
        insta::assert_snapshot!(f("%", dt), @"");
    }

    #[test]
    fn presets() {
        let dt = sighting();
        insta::assert_snapshot!(
            f(ISO_8601, dt),
            @"2015-06-11T21:53:12.543294+02:00",
        );
        insta::assert_snapshot!(
            f(ISO_8601_SPACED, dt),
            @"2015-06-11 21:53:12.543294 +02:00",
        );
        insta::assert_snapshot!(
            f(ISO_8601_NO_MICRO, dt),
            @"2015-06-11 21:53:12 +02:00",
        );
        insta::assert_snapshot!(f(ISO_8601_WEEK_DATE, dt), @"2015-W24-4");
        insta::assert_snapshot!(f(TIME_OF_DAY, dt), @"21:53:12");
        insta::assert_snapshot!(f(DATE_ONLY, dt), @"2015-06-11");
        insta::assert_snapshot!(
            f(RFC_2822ISH, dt),
            @"Thu, 11 Jun 2015 21:53:12 +0200",
        );
        insta::assert_snapshot!(f(US_SHORT, dt), @"6/11/15 9:53 p.m.");
        insta::assert_snapshot!(f(US_LONG, dt), @"Thu 11 Jun 2015, 9:53 p.m.");
        insta::assert_snapshot!(
            f(US_LONGER, dt),
            @"Thursday, June 11, 2015, 9:53 p.m.",
        );
    }

    #[test]
    fn display_adapter() {
        let dt = sighting();
        assert_eq!(dt.strftime("%0H:%0M").to_string(), "21:53");
        assert_eq!(dt.strftime(DATE_ONLY).to_string(), "2015-06-11");
    }

    quickcheck::quickcheck! {
        fn prop_formatting_is_total(template: String, dt: DateTime) -> bool {
            format(&template, &dt).is_ok()
        }
    }
}
