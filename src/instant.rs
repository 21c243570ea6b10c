use crate::{
    civil::DateTime,
    span::Span,
    tz::Offset,
    util::common::{
        DAYS_TO_UNIX_EPOCH, MICROS_PER_DAY, MICROS_PER_SECOND,
    },
    util::imath::floor_div,
};

/// An instant in time, represented as a count of microseconds from
/// `0000-01-01 00:00:00` in UTC.
///
/// An instant is the absolute half of this crate's model of time. The civil
/// half is [`DateTime`](crate::civil::DateTime), which carries wall clock
/// fields and an offset. Encoding a `DateTime` produces the instant it
/// names, and decoding an instant at an [`Offset`](crate::tz::Offset)
/// recovers civil fields. Both directions are total and exact, so the two
/// representations are interchangeable.
///
/// The zero point is year zero rather than the UNIX epoch so that the day
/// count and the year number stay aligned for the entire proleptic
/// Gregorian range. Bridges to UNIX time are provided and cost one
/// subtraction: the UNIX epoch sits at microsecond
/// `62_167_219_200_000_000`, also available as [`Instant::UNIX_EPOCH`].
///
/// # Example
///
/// ```
/// use kalends::{tz, Instant};
///
/// let t = Instant::from_unix_microsecond(1_434_052_392_543_294);
/// let dt = t.to_datetime(tz::offset(2));
/// assert_eq!(dt.to_string(), "Thu, 2015-06-11 21:53:12.543294+02:00");
/// ```
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Instant {
    microsecond: i64,
}

impl Instant {
    /// The instant of `1970-01-01 00:00:00` in UTC.
    pub const UNIX_EPOCH: Instant =
        Instant { microsecond: DAYS_TO_UNIX_EPOCH * MICROS_PER_DAY };

    /// Creates an instant from a count of microseconds since year zero.
    #[inline]
    pub const fn from_microsecond(microsecond: i64) -> Instant {
        Instant { microsecond }
    }

    /// Returns this instant as a count of microseconds since year zero.
    #[inline]
    pub const fn as_microsecond(self) -> i64 {
        self.microsecond
    }

    /// Creates an instant from a count of seconds since the UNIX epoch.
    #[inline]
    pub const fn from_unix_second(second: i64) -> Instant {
        Instant {
            microsecond: Instant::UNIX_EPOCH.microsecond
                + second * MICROS_PER_SECOND,
        }
    }

    /// Returns this instant as a count of whole seconds since the UNIX
    /// epoch.
    ///
    /// The division floors, so every instant within a second maps to that
    /// second. For example, the last microsecond of 1969 maps to second
    /// `-1`, not `0`.
    #[inline]
    pub const fn as_unix_second(self) -> i64 {
        floor_div(self.as_unix_microsecond(), MICROS_PER_SECOND)
    }

    /// Creates an instant from a count of microseconds since the UNIX
    /// epoch.
    #[inline]
    pub const fn from_unix_microsecond(microsecond: i64) -> Instant {
        Instant { microsecond: Instant::UNIX_EPOCH.microsecond + microsecond }
    }

    /// Returns this instant as a count of microseconds since the UNIX
    /// epoch.
    #[inline]
    pub const fn as_unix_microsecond(self) -> i64 {
        self.microsecond - Instant::UNIX_EPOCH.microsecond
    }

    /// Returns the current time from the system clock.
    ///
    /// # Panics
    ///
    /// This panics if the system clock reports a time so far from the UNIX
    /// epoch that its second count overflows an `i64`. Any clock set to a
    /// representable year (roughly within 292 billion years of 1970) cannot
    /// trigger this.
    #[cfg(feature = "std")]
    pub fn now() -> Instant {
        let unix_epoch = std::time::SystemTime::UNIX_EPOCH;
        let (duration, sign) =
            match std::time::SystemTime::now().duration_since(unix_epoch) {
                Ok(duration) => (duration, 1),
                Err(err) => (err.duration(), -1),
            };
        let second = i64::try_from(duration.as_secs())
            .expect("system clock seconds fit in i64");
        let microsecond = second * MICROS_PER_SECOND
            + i64::from(duration.subsec_micros());
        Instant::from_unix_microsecond(sign * microsecond)
    }

    /// Decodes this instant into civil date and time fields at the given
    /// offset.
    ///
    /// # Example
    ///
    /// ```
    /// use kalends::{tz, Instant};
    ///
    /// let epoch = Instant::UNIX_EPOCH;
    /// assert_eq!(epoch.to_datetime(tz::offset(0)).hour(), 0);
    /// assert_eq!(epoch.to_datetime(tz::offset(2)).hour(), 2);
    /// assert_eq!(epoch.to_datetime(tz::offset(-1)).day(), 31);
    /// ```
    #[inline]
    pub fn to_datetime(self, offset: Offset) -> DateTime {
        DateTime::from_instant(self, offset)
    }

    /// Returns the span of time from this instant until the other one.
    ///
    /// When `other` is earlier than `self`, every component of the span is
    /// negative.
    #[inline]
    pub fn until(self, other: Instant) -> Span {
        Span::from_microseconds(other.microsecond - self.microsecond)
    }

    /// Returns the span of time from the other instant until this one.
    #[inline]
    pub fn since(self, other: Instant) -> Span {
        self.until(other).negate()
    }
}

impl core::fmt::Display for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.to_datetime(Offset::UTC), f)
    }
}

impl core::fmt::Debug for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Instant")
            .field("microsecond", &self.microsecond)
            .finish()
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Instant {
    fn arbitrary(g: &mut quickcheck::Gen) -> Instant {
        // About ten thousand years to either side of year zero. Plenty of
        // BCE coverage without flirting with i64 overflow in arithmetic
        // the properties perform on top of the generated value.
        const LIMIT: i64 = 10_000 * 366 * MICROS_PER_DAY;
        Instant::from_microsecond(i64::arbitrary(g) % LIMIT)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            self.microsecond.shrink().map(Instant::from_microsecond),
        )
    }
}
