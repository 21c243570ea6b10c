use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    civil::{Era, Weekday},
    error::Error,
    fmt::{self, strtime},
    instant::Instant,
    span::Span,
    tz::Offset,
    util::common::{
        self, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MINUTE,
        MICROS_PER_SECOND,
    },
    util::imath::{floor_div, floor_div32, floor_mod, floor_mod32},
};

/// A broken down civil date and time, tied to an instant by its offset.
///
/// A `DateTime` carries year, month, day, hour, minute, second and
/// microsecond wall clock fields, the [`Offset`] those fields are expressed
/// in, and the [`Weekday`] derived from them. Fields are always canonical:
/// any `DateTime` you can observe is exactly what decoding its instant at
/// its offset produces, so the weekday can never disagree with the date and
/// the day can never exceed its month.
///
/// # Normalization
///
/// Constructors accept out of range fields and roll them over instead of
/// failing. The day may run past the end of the month, clock fields may be
/// negative or too large, and the month itself may fall outside `1..=12`.
/// Whatever the input, it is interpreted as an exact microsecond count and
/// decoded back into canonical fields. As a special case, an hour of
/// exactly `24` means `0` on the same day.
///
/// ```
/// use kalends::civil::datetime;
///
/// assert_eq!(datetime(2015, 1, 32, 0, 0, 0, 0, 0).day(), 1);
/// assert_eq!(datetime(2015, 1, 32, 0, 0, 0, 0, 0).month(), 2);
/// assert_eq!(datetime(2015, 6, 11, 25, 0, 0, 0, 0).day(), 12);
/// assert_eq!(datetime(2015, 6, 11, 24, 0, 0, 0, 0).day(), 11);
/// ```
///
/// # Comparisons
///
/// Equality and ordering compare the instant a value names, not its wall
/// clock fields. Two values with different fields at different offsets are
/// equal when they denote the same moment:
///
/// ```
/// use kalends::civil::datetime;
///
/// let hawaii = datetime(1941, 12, 7, 7, 48, 0, 0, -630);
/// let utc = datetime(1941, 12, 7, 18, 18, 0, 0, 0);
/// assert_eq!(hawaii, utc);
/// ```
///
/// # Arithmetic
///
/// [`DateTime::until`] and [`DateTime::since`] measure the time between two
/// values as a [`Span`], and `+` and `-` apply a span. A day is always
/// exactly 86,400 seconds here; there are no jumps to account for.
///
/// ```
/// use kalends::{civil::datetime, ToSpan};
///
/// let start = datetime(2024, 2, 25, 15, 45, 0, 0, 0);
/// let later = start + 1.weeks();
/// assert_eq!(later, datetime(2024, 3, 3, 15, 45, 0, 0, 0));
/// ```
#[derive(Clone, Copy)]
pub struct DateTime {
    year: i32,
    month: i8,
    day: i8,
    hour: i8,
    minute: i8,
    second: i8,
    microsecond: i32,
    weekday: Weekday,
    offset: Offset,
}

impl DateTime {
    /// Creates a new `DateTime` from wall clock fields expressed at the
    /// given offset.
    ///
    /// Out of range fields normalize as described in the type level
    /// documentation. This constructor is total; it never fails and never
    /// panics.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::{civil::DateTime, tz};
    ///
    /// let dt = DateTime::new(2015, 6, 11, 21, 53, 12, 543_294, tz::offset(2));
    /// assert_eq!(dt.to_string(), "Thu, 2015-06-11 21:53:12.543294+02:00");
    /// ```
    pub fn new(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        microsecond: i32,
        offset: Offset,
    ) -> DateTime {
        // Reduce the month first, borrowing whole years, since the day
        // count needs a real month to walk from.
        let month0 = i32::from(month) - 1;
        let year = year + floor_div32(month0, 12);
        let month = (floor_mod32(month0, 12) + 1) as i8;
        let hour = if hour == 24 { 0 } else { hour };
        let instant = DateTime::encode(
            year,
            month,
            i64::from(day),
            i64::from(hour),
            i64::from(minute),
            i64::from(second),
            i64::from(microsecond),
            offset,
        );
        DateTime::from_instant(instant, offset)
    }

    /// Returns the current date and time at the system's local offset.
    ///
    /// The local offset comes from the platform query in this crate's `tz`
    /// module. On platforms without one (or without the `tz-system`
    /// feature), the offset is UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::civil::DateTime;
    ///
    /// let now = DateTime::now();
    /// println!("{now}");
    /// ```
    #[cfg(feature = "std")]
    pub fn now() -> DateTime {
        let instant = Instant::now();
        let offset = crate::tz::system::local_offset(instant.as_unix_second());
        instant.to_datetime(offset)
    }

    /// Decodes an instant into canonical fields at the given offset.
    pub(crate) fn from_instant(instant: Instant, offset: Offset) -> DateTime {
        let local = instant.as_microsecond()
            + i64::from(offset.minutes()) * MICROS_PER_MINUTE;
        let days = floor_div(local, MICROS_PER_DAY);
        let tod = floor_mod(local, MICROS_PER_DAY);
        let (year, month, day) = common::date_from_days(days);
        DateTime {
            year,
            month,
            day,
            hour: (tod / MICROS_PER_HOUR) as i8,
            minute: ((tod / MICROS_PER_MINUTE) % 60) as i8,
            second: ((tod / MICROS_PER_SECOND) % 60) as i8,
            microsecond: (tod % MICROS_PER_SECOND) as i32,
            weekday: Weekday::from_monday_zero_offset_wrapping(days + 5),
            offset,
        }
    }

    /// Computes the instant named by a set of wall clock fields, which need
    /// not be in canonical ranges.
    fn encode(
        year: i32,
        month: i8,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        microsecond: i64,
        offset: Offset,
    ) -> Instant {
        let days = common::days_from_zero(year, month, day);
        // Subtracting the offset turns wall minutes into UTC minutes.
        let tod = ((hour * 60 + minute - i64::from(offset.minutes())) * 60
            + second)
            * MICROS_PER_SECOND
            + microsecond;
        Instant::from_microsecond(days * MICROS_PER_DAY + tod)
    }

    /// Returns the instant this datetime names.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::{civil::datetime, Instant};
    ///
    /// let dt = datetime(1970, 1, 1, 2, 0, 0, 0, 120);
    /// assert_eq!(dt.to_instant(), Instant::UNIX_EPOCH);
    /// ```
    pub fn to_instant(self) -> Instant {
        DateTime::encode(
            self.year,
            self.month,
            i64::from(self.day),
            i64::from(self.hour),
            i64::from(self.minute),
            i64::from(self.second),
            i64::from(self.microsecond),
            self.offset,
        )
    }

    /// Re-expresses this datetime at a different offset.
    ///
    /// The instant is preserved; the wall clock fields and the weekday are
    /// re-derived for the new offset.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::{civil::datetime, tz};
    ///
    /// let hawaii = datetime(1941, 12, 7, 7, 48, 0, 0, -630);
    /// let utc = hawaii.to_offset(tz::offset(0));
    /// assert_eq!(utc.hour(), 18);
    /// assert_eq!(utc.minute(), 18);
    /// ```
    pub fn to_offset(self, offset: Offset) -> DateTime {
        DateTime::from_instant(self.to_instant(), offset)
    }

    /// Decodes a count of seconds since the UNIX epoch in UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::civil::DateTime;
    ///
    /// let dt = DateTime::from_unix_second(1_434_052_392);
    /// assert_eq!(dt.to_string(), "Thu, 2015-06-11 19:53:12.000000+00:00");
    /// ```
    pub fn from_unix_second(second: i64) -> DateTime {
        Instant::from_unix_second(second).to_datetime(Offset::UTC)
    }

    /// Returns the number of whole seconds from the UNIX epoch to this
    /// datetime. Negative before 1970.
    pub fn to_unix_second(self) -> i64 {
        self.to_instant().as_unix_second()
    }

    /// Returns the year. Year `0` exists and is what common practice calls
    /// 1 BCE; see [`DateTime::era_year`].
    #[inline]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month, in `1..=12`.
    #[inline]
    pub fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of the month, in `1..=31`.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns the hour, in `0..=23`.
    #[inline]
    pub fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the minute, in `0..=59`.
    #[inline]
    pub fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the second, in `0..=59`. There are no leap seconds.
    #[inline]
    pub fn second(self) -> i8 {
        self.second
    }

    /// Returns the fractional microsecond, in `0..=999_999`.
    #[inline]
    pub fn microsecond(self) -> i32 {
        self.microsecond
    }

    /// Returns the day of the week.
    #[inline]
    pub fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Returns the offset the wall clock fields are expressed in.
    #[inline]
    pub fn offset(self) -> Offset {
        self.offset
    }

    /// Returns the ordinal day of the year, starting at `1`.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::civil::datetime;
    ///
    /// let d = datetime(2006, 8, 24, 0, 0, 0, 0, 0);
    /// assert_eq!(d.day_of_year(), 236);
    /// ```
    #[inline]
    pub fn day_of_year(self) -> i16 {
        common::day_of_year(self.year, self.month, i32::from(self.day)) as i16
    }

    /// Returns the ISO 8601 week number, in `1..=53`.
    ///
    /// Week 1 is the week containing the year's first Thursday, so the
    /// first days of January can belong to the last week of the previous
    /// year, and the last days of December to week 1 of the next.
    /// [`DateTime::iso_week_year`] reports which year that is.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::civil::datetime;
    ///
    /// // 2016 began inside the final week of 2015, which was long.
    /// assert_eq!(datetime(2016, 1, 1, 0, 0, 0, 0, 0).iso_week_number(), 53);
    /// assert_eq!(datetime(2016, 1, 4, 0, 0, 0, 0, 0).iso_week_number(), 1);
    /// ```
    #[inline]
    pub fn iso_week_number(self) -> i8 {
        self.iso_week_date().1
    }

    /// Returns the ISO 8601 week numbering year.
    ///
    /// This differs from [`DateTime::year`] for dates whose ISO week
    /// belongs to the neighboring year.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::civil::datetime;
    ///
    /// assert_eq!(datetime(2016, 1, 1, 0, 0, 0, 0, 0).iso_week_year(), 2015);
    /// assert_eq!(datetime(2014, 12, 29, 0, 0, 0, 0, 0).iso_week_year(), 2015);
    /// assert_eq!(datetime(2015, 6, 11, 0, 0, 0, 0, 0).iso_week_year(), 2015);
    /// ```
    #[inline]
    pub fn iso_week_year(self) -> i32 {
        self.iso_week_date().0
    }

    /// Returns the ISO week numbering year and week, together.
    ///
    /// A date belongs to the week of its Thursday. Finding that Thursday
    /// answers both questions at once: its calendar year is the week
    /// numbering year, and its ordinal day within that year gives the week.
    fn iso_week_date(self) -> (i32, i8) {
        let weekday = i64::from(self.weekday.to_monday_zero_offset());
        let thursday = common::days_from_zero(
            self.year,
            self.month,
            i64::from(self.day),
        ) + (3 - weekday);
        let (year, month, day) = common::date_from_days(thursday);
        let doy = common::day_of_year(year, month, i32::from(day));
        (year, ((doy - 1) / 7 + 1) as i8)
    }

    /// Returns the year in its era.
    ///
    /// Era years count from `1`, so year `0` is 1 BCE and year `-43` is
    /// 44 BCE.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::civil::{datetime, Era};
    ///
    /// let ides = datetime(-43, 3, 15, 0, 0, 0, 0, 0);
    /// assert_eq!(ides.era_year(), (44, Era::BCE));
    ///
    /// let d = datetime(2015, 6, 11, 0, 0, 0, 0, 0);
    /// assert_eq!(d.era_year(), (2015, Era::CE));
    /// ```
    #[inline]
    pub fn era_year(self) -> (i32, Era) {
        if self.year > 0 {
            (self.year, Era::CE)
        } else {
            (1 - self.year, Era::BCE)
        }
    }

    /// Returns the century as a positive count starting at `1`.
    ///
    /// Years `1..=100` are century 1 and years `2001..=2100` are century
    /// 21. For years before 1 CE the century counts backwards with the same
    /// convention, with the era left to [`DateTime::era_year`]: year `0`
    /// through `-99` report century 1.
    #[inline]
    pub fn century(self) -> i32 {
        common::century(self.year)
    }

    /// Returns true if this datetime's year is a leap year.
    #[inline]
    pub fn in_leap_year(self) -> bool {
        common::is_leap_year(self.year)
    }

    /// Returns the number of days in this datetime's year, 365 or 366.
    #[inline]
    pub fn days_in_year(self) -> i16 {
        common::days_in_year(self.year) as i16
    }

    /// Returns the number of days in this datetime's month.
    #[inline]
    pub fn days_in_month(self) -> i8 {
        common::days_in_month(self.year, self.month)
    }

    /// Returns Easter Sunday of this datetime's year.
    ///
    /// The month and day move to Easter via the Meeus/Butcher computus;
    /// the clock fields and the offset are kept. The result is normalized
    /// like every other value, so its weekday is correct. The computus
    /// extends below its original domain by flooring its divisions, and
    /// even there the result is a [`Weekday::Sunday`] inside the
    /// March/April window.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::civil::{datetime, Weekday};
    ///
    /// let easter = datetime(2015, 6, 11, 12, 0, 0, 0, 0).easter();
    /// assert_eq!((easter.month(), easter.day()), (4, 5));
    /// assert_eq!(easter.weekday(), Weekday::Sunday);
    ///
    /// let caesar = datetime(-43, 3, 15, 12, 0, 0, 0, 0).easter();
    /// assert_eq!((caesar.month(), caesar.day()), (4, 7));
    /// assert_eq!(caesar.weekday(), Weekday::Sunday);
    /// ```
    pub fn easter(self) -> DateTime {
        let (month, day) = common::easter_month_day(self.year);
        DateTime::new(
            self.year,
            month,
            day,
            self.hour,
            self.minute,
            self.second,
            self.microsecond,
            self.offset,
        )
    }

    /// Returns the span of time from this datetime until the other one.
    ///
    /// The span decomposes into weeks, days, hours, minutes, seconds and
    /// microseconds, all sharing one sign. When `other` is earlier, every
    /// component is negative or zero.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::{civil::datetime, ToSpan};
    ///
    /// let a = datetime(2015, 6, 11, 21, 53, 12, 0, 0);
    /// let b = datetime(2015, 6, 17, 5, 54, 13, 0, 0);
    /// assert_eq!(a.until(b), 5.days().hours(8).minutes(1).seconds(1));
    /// ```
    #[inline]
    pub fn until(self, other: DateTime) -> Span {
        self.to_instant().until(other.to_instant())
    }

    /// Returns the span of time from the other datetime until this one.
    #[inline]
    pub fn since(self, other: DateTime) -> Span {
        self.to_instant().since(other.to_instant())
    }

    /// Formats this datetime into the given writer using a format
    /// template.
    ///
    /// See the [`strtime`] module documentation for the directives
    /// understood. Errors can only come from the writer itself.
    #[inline]
    pub fn format_into<W: fmt::Write>(
        &self,
        template: &str,
        wtr: &mut W,
    ) -> Result<(), Error> {
        strtime::format_into(template, self, wtr)
    }

    /// Returns a value that formats this datetime with the given template
    /// when displayed.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::{civil::datetime, fmt::strtime};
    ///
    /// let dt = datetime(2015, 6, 11, 21, 53, 12, 543_294, 120);
    /// assert_eq!(
    ///     dt.strftime(strtime::ISO_8601).to_string(),
    ///     "2015-06-11T21:53:12.543294+02:00",
    /// );
    /// ```
    #[inline]
    pub fn strftime<'f>(&self, template: &'f str) -> strtime::Display<'f> {
        strtime::Display { template, datetime: *self }
    }
}

/// The rendering used by `Display` and `Debug`, with the weekday
/// abbreviation in front of an ISO style timestamp.
const DISPLAY_TEMPLATE: &str = "%b, %0Y-%0m-%0d %0H:%0M:%0S.%0u%t%0Z:%0z";

impl core::fmt::Display for DateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::fmt::FmtWrite;

        // Printing to `f` should never fail.
        Ok(strtime::format_into(DISPLAY_TEMPLATE, self, &mut FmtWrite(f))
            .unwrap())
    }
}

impl core::fmt::Debug for DateTime {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl Eq for DateTime {}

impl PartialEq for DateTime {
    #[inline]
    fn eq(&self, other: &DateTime) -> bool {
        self.to_instant() == other.to_instant()
    }
}

impl Ord for DateTime {
    #[inline]
    fn cmp(&self, other: &DateTime) -> core::cmp::Ordering {
        self.to_instant().cmp(&other.to_instant())
    }
}

impl PartialOrd for DateTime {
    #[inline]
    fn partial_cmp(&self, other: &DateTime) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<Span> for DateTime {
    type Output = DateTime;

    /// Adds a span to this datetime, normalizing the result.
    ///
    /// Weeks and days land on the day field; the clock components land on
    /// their own fields. Since normalization interprets the sum as an
    /// exact microsecond count, the outcome is the same either way; the
    /// split only mirrors how spans are decomposed.
    fn add(self, span: Span) -> DateTime {
        let instant = DateTime::encode(
            self.year,
            self.month,
            i64::from(self.day) + span.get_weeks() * 7 + span.get_days(),
            i64::from(self.hour) + span.get_hours(),
            i64::from(self.minute) + span.get_minutes(),
            i64::from(self.second) + span.get_seconds(),
            i64::from(self.microsecond) + span.get_microseconds(),
            self.offset,
        );
        DateTime::from_instant(instant, self.offset)
    }
}

impl AddAssign<Span> for DateTime {
    #[inline]
    fn add_assign(&mut self, span: Span) {
        *self = *self + span;
    }
}

impl Sub<Span> for DateTime {
    type Output = DateTime;

    #[inline]
    fn sub(self, span: Span) -> DateTime {
        self + span.negate()
    }
}

impl SubAssign<Span> for DateTime {
    #[inline]
    fn sub_assign(&mut self, span: Span) {
        *self = *self - span;
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for DateTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> DateTime {
        let year = i32::arbitrary(g).rem_euclid(20_000) - 10_000;
        let month = i8::arbitrary(g).rem_euclid(12) + 1;
        // Out of range days are fine; the constructor normalizes them.
        let day = i8::arbitrary(g).rem_euclid(31) + 1;
        let hour = i8::arbitrary(g).rem_euclid(24);
        let minute = i8::arbitrary(g).rem_euclid(60);
        let second = i8::arbitrary(g).rem_euclid(60);
        let microsecond = i32::arbitrary(g).rem_euclid(1_000_000);
        let offset = Offset::arbitrary(g);
        DateTime::new(
            year, month, day, hour, minute, second, microsecond, offset,
        )
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        let fields = (
            (self.year, self.month, self.day),
            (self.hour, self.minute, self.second, self.microsecond),
            self.offset,
        );
        alloc::boxed::Box::new(fields.shrink().map(
            |((year, month, day), (hour, minute, second, micro), offset)| {
                DateTime::new(
                    year, month, day, hour, minute, second, micro, offset,
                )
            },
        ))
    }
}
