use crate::{error::Error, fmt, util::common::MICROS_PER_SECOND};

/// A duration of time, decomposed into units from weeks down to
/// microseconds.
///
/// A `Span` is an ordered decomposition rather than a bare count: two spans
/// are equal when their components are equal, so `60.minutes()` and
/// `1.hours()` are distinct values even though they cover the same amount of
/// time. Use [`Span::total_microseconds`] to compare amounts.
///
/// Every unit here has a fixed length. A day is always 24 hours and a week
/// is always 7 days, so re-applying a measured span always lands back on the
/// datetime it was measured against.
///
/// All components carry the same sign. Spans produced by this crate, via
/// [`Span::from_microseconds`] or [`DateTime::until`](crate::civil::DateTime::until),
/// additionally keep every component below the size of the next larger unit.
/// The builders trust the caller and record whatever they are given.
///
/// # Building spans
///
/// The builder methods replace one unit at a time, and the [`ToSpan`]
/// extension trait starts a span directly from an integer:
///
/// ```
/// use kalends::{Span, ToSpan};
///
/// let span = 5.days().hours(8).minutes(1);
/// assert_eq!(span, Span::new().days(5).hours(8).minutes(1));
/// assert_eq!(span.to_string(), "P5dT8h1m");
/// ```
///
/// # Negative spans
///
/// Every unit may be negative, and measuring backwards in time produces
/// components that are all negative:
///
/// ```
/// use kalends::{civil::datetime, ToSpan};
///
/// let a = datetime(2015, 6, 11, 0, 0, 0, 0, 0);
/// let b = datetime(2015, 6, 9, 12, 0, 0, 0, 0);
/// assert_eq!(a.until(b), (-1).days().hours(-12));
/// ```
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct Span {
    weeks: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    microseconds: i64,
}

impl Span {
    /// Creates a new span representing a zero duration. That is, a duration
    /// in which no time has passed.
    #[inline]
    pub fn new() -> Span {
        Span::default()
    }

    /// Set the number of weeks on this span. The value may be negative.
    #[inline]
    pub fn weeks<I: Into<i64>>(self, weeks: I) -> Span {
        Span { weeks: weeks.into(), ..self }
    }

    /// Set the number of days on this span. The value may be negative.
    #[inline]
    pub fn days<I: Into<i64>>(self, days: I) -> Span {
        Span { days: days.into(), ..self }
    }

    /// Set the number of hours on this span. The value may be negative.
    #[inline]
    pub fn hours<I: Into<i64>>(self, hours: I) -> Span {
        Span { hours: hours.into(), ..self }
    }

    /// Set the number of minutes on this span. The value may be negative.
    #[inline]
    pub fn minutes<I: Into<i64>>(self, minutes: I) -> Span {
        Span { minutes: minutes.into(), ..self }
    }

    /// Set the number of seconds on this span. The value may be negative.
    #[inline]
    pub fn seconds<I: Into<i64>>(self, seconds: I) -> Span {
        Span { seconds: seconds.into(), ..self }
    }

    /// Set the number of microseconds on this span. The value may be
    /// negative.
    #[inline]
    pub fn microseconds<I: Into<i64>>(self, microseconds: I) -> Span {
        Span { microseconds: microseconds.into(), ..self }
    }

    /// Returns the number of weeks in this span.
    #[inline]
    pub fn get_weeks(&self) -> i64 {
        self.weeks
    }

    /// Returns the number of days in this span.
    #[inline]
    pub fn get_days(&self) -> i64 {
        self.days
    }

    /// Returns the number of hours in this span.
    #[inline]
    pub fn get_hours(&self) -> i64 {
        self.hours
    }

    /// Returns the number of minutes in this span.
    #[inline]
    pub fn get_minutes(&self) -> i64 {
        self.minutes
    }

    /// Returns the number of seconds in this span.
    #[inline]
    pub fn get_seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of microseconds in this span.
    #[inline]
    pub fn get_microseconds(&self) -> i64 {
        self.microseconds
    }

    /// Decomposes a count of microseconds into a span.
    ///
    /// The division is truncating at every step, so all components come out
    /// with the sign of the total and each stays below the size of the next
    /// larger unit.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::{Span, ToSpan};
    ///
    /// let span = Span::from_microseconds(-90_000_000);
    /// assert_eq!(span, (-1).minutes().seconds(-30));
    /// ```
    pub fn from_microseconds(total: i64) -> Span {
        let microseconds = total % MICROS_PER_SECOND;
        let total = total / MICROS_PER_SECOND;
        let seconds = total % 60;
        let total = total / 60;
        let minutes = total % 60;
        let total = total / 60;
        let hours = total % 24;
        let total = total / 24;
        let days = total % 7;
        let weeks = total / 7;
        Span { weeks, days, hours, minutes, seconds, microseconds }
    }

    /// Returns the total number of microseconds this span covers.
    ///
    /// This is the inverse of [`Span::from_microseconds`] for spans built by
    /// this crate.
    pub fn total_microseconds(&self) -> i64 {
        let minutes = ((self.weeks * 7 + self.days) * 24 + self.hours) * 60
            + self.minutes;
        (minutes * 60 + self.seconds) * MICROS_PER_SECOND + self.microseconds
    }

    /// Returns this span with every component negated.
    #[inline]
    pub fn negate(self) -> Span {
        Span {
            weeks: -self.weeks,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            microseconds: -self.microseconds,
        }
    }

    /// Returns true if every component of this span is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.microseconds == 0
    }

    /// Writes an ISO 8601 flavored rendering of this span.
    ///
    /// Components render in decreasing unit order with single letter
    /// designators, clock units after a `T`. Zero components are skipped,
    /// except that a span with no non-zero clock component and no calendar
    /// component renders as `PT0s`.
    pub(crate) fn write_to<W: fmt::Write>(
        &self,
        wtr: &mut W,
    ) -> Result<(), Error> {
        use crate::fmt::{DecimalFormatter, WriteExt};

        static FMT_PLAIN: DecimalFormatter = DecimalFormatter::new();
        static FMT_MICRO: DecimalFormatter =
            DecimalFormatter::new().padding(6);

        let negative = [
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.microseconds,
        ]
        .iter()
        .find(|&&v| v != 0)
        .map_or(false, |&v| v < 0);
        if negative {
            wtr.write_str("-")?;
        }
        wtr.write_str("P")?;
        if self.weeks != 0 {
            wtr.write_int(&FMT_PLAIN, self.weeks.saturating_abs())?;
            wtr.write_str("w")?;
        }
        if self.days != 0 {
            wtr.write_int(&FMT_PLAIN, self.days.saturating_abs())?;
            wtr.write_str("d")?;
        }
        let calendar = self.weeks != 0 || self.days != 0;
        let clock = self.hours != 0
            || self.minutes != 0
            || self.seconds != 0
            || self.microseconds != 0;
        if clock || !calendar {
            wtr.write_str("T")?;
        }
        if self.hours != 0 {
            wtr.write_int(&FMT_PLAIN, self.hours.saturating_abs())?;
            wtr.write_str("h")?;
        }
        if self.minutes != 0 {
            wtr.write_int(&FMT_PLAIN, self.minutes.saturating_abs())?;
            wtr.write_str("m")?;
        }
        if self.microseconds != 0 {
            wtr.write_int(&FMT_PLAIN, self.seconds.saturating_abs())?;
            wtr.write_str(".")?;
            wtr.write_int(&FMT_MICRO, self.microseconds.saturating_abs())?;
            wtr.write_str("s")?;
        } else if self.seconds != 0 || (!clock && !calendar) {
            wtr.write_int(&FMT_PLAIN, self.seconds.saturating_abs())?;
            wtr.write_str("s")?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Span {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Span {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use crate::fmt::FmtWrite;

        self.write_to(&mut FmtWrite(f)).map_err(|_| core::fmt::Error)
    }
}

impl core::ops::Neg for Span {
    type Output = Span;

    #[inline]
    fn neg(self) -> Span {
        self.negate()
    }
}

/// A trait for enabling concise literals for creating [`Span`] values.
///
/// In short, this trait lets you write something like `5.days().hours(8)`
/// instead of `Span::new().days(5).hours(8)`. It is implemented for the
/// signed integer primitives.
pub trait ToSpan: Sized {
    /// Create a new span from this integer in units of weeks.
    fn weeks(self) -> Span;

    /// Create a new span from this integer in units of days.
    fn days(self) -> Span;

    /// Create a new span from this integer in units of hours.
    fn hours(self) -> Span;

    /// Create a new span from this integer in units of minutes.
    fn minutes(self) -> Span;

    /// Create a new span from this integer in units of seconds.
    fn seconds(self) -> Span;

    /// Create a new span from this integer in units of microseconds.
    fn microseconds(self) -> Span;

    /// Equivalent to `weeks()`, but reads better for singular units.
    #[inline]
    fn week(self) -> Span {
        self.weeks()
    }

    /// Equivalent to `days()`, but reads better for singular units.
    #[inline]
    fn day(self) -> Span {
        self.days()
    }

    /// Equivalent to `hours()`, but reads better for singular units.
    #[inline]
    fn hour(self) -> Span {
        self.hours()
    }

    /// Equivalent to `minutes()`, but reads better for singular units.
    #[inline]
    fn minute(self) -> Span {
        self.minutes()
    }

    /// Equivalent to `seconds()`, but reads better for singular units.
    #[inline]
    fn second(self) -> Span {
        self.seconds()
    }

    /// Equivalent to `microseconds()`, but reads better for singular units.
    #[inline]
    fn microsecond(self) -> Span {
        self.microseconds()
    }
}

macro_rules! impl_to_span {
    ($ty:ty) => {
        impl ToSpan for $ty {
            #[inline]
            fn weeks(self) -> Span {
                Span::new().weeks(self)
            }
            #[inline]
            fn days(self) -> Span {
                Span::new().days(self)
            }
            #[inline]
            fn hours(self) -> Span {
                Span::new().hours(self)
            }
            #[inline]
            fn minutes(self) -> Span {
                Span::new().minutes(self)
            }
            #[inline]
            fn seconds(self) -> Span {
                Span::new().seconds(self)
            }
            #[inline]
            fn microseconds(self) -> Span {
                Span::new().microseconds(self)
            }
        }
    };
}

impl_to_span!(i8);
impl_to_span!(i16);
impl_to_span!(i32);
impl_to_span!(i64);

#[cfg(test)]
impl quickcheck::Arbitrary for Span {
    fn arbitrary(g: &mut quickcheck::Gen) -> Span {
        // About twenty thousand years either way, which keeps the total
        // comfortably inside i64 microseconds.
        const LIMIT: i64 = 20_000 * 366 * 86_400 * 1_000_000;
        Span::from_microseconds(i64::arbitrary(g) % LIMIT)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        let fields = (
            (self.weeks, self.days, self.hours),
            (self.minutes, self.seconds, self.microseconds),
        );
        alloc::boxed::Box::new(fields.shrink().map(
            |((weeks, days, hours), (minutes, seconds, microseconds))| Span {
                weeks,
                days,
                hours,
                minutes,
                seconds,
                microseconds,
            },
        ))
    }
}
