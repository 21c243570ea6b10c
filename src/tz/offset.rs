use crate::fmt::{self, Write, WriteExt};

/// A fixed offset from UTC, stored as signed whole minutes east.
///
/// Negative offsets correspond to zones west of the prime meridian and
/// positive offsets to zones east of it. In all cases,
/// `wall-clock - offset = UTC`. For example, `+120` is UTC+02:00 and
/// `-630` is UTC-10:30.
///
/// An offset carries no daylight saving rules and no zone name. It is the
/// only notion of time zone in this crate.
///
/// # Display format
///
/// The `std::fmt::Display` implementation prints `{sign}{hours}:{minutes}`
/// with two digits each:
///
/// ```
/// use kalends::tz::Offset;
///
/// assert_eq!(Offset::from_minutes(120).to_string(), "+02:00");
/// assert_eq!(Offset::from_minutes(-630).to_string(), "-10:30");
/// assert_eq!(Offset::UTC.to_string(), "+00:00");
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Offset {
    minutes: i32,
}

impl Offset {
    /// The offset corresponding to UTC. That is, no offset at all.
    pub const UTC: Offset = Offset { minutes: 0 };

    /// Creates an offset from a number of signed minutes east of UTC.
    ///
    /// Any value is accepted. Offsets beyond the civil ±14:00 range are
    /// unusual but well defined: conversion just shifts the wall clock by
    /// that many minutes.
    #[inline]
    pub const fn from_minutes(minutes: i32) -> Offset {
        Offset { minutes }
    }

    /// Returns this offset as signed minutes east of UTC.
    #[inline]
    pub const fn minutes(self) -> i32 {
        self.minutes
    }

    /// Returns true when this offset is west of UTC.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.minutes < 0
    }

    /// Returns the whole-hour part of this offset as a non-negative value.
    ///
    /// ```
    /// use kalends::tz::Offset;
    ///
    /// assert_eq!(Offset::from_minutes(-630).hours_part(), 10);
    /// ```
    #[inline]
    pub const fn hours_part(self) -> i32 {
        self.minutes.abs() / 60
    }

    /// Returns the leftover minutes of this offset as a non-negative value.
    ///
    /// ```
    /// use kalends::tz::Offset;
    ///
    /// assert_eq!(Offset::from_minutes(-630).minutes_part(), 30);
    /// ```
    #[inline]
    pub const fn minutes_part(self) -> i32 {
        self.minutes.abs() % 60
    }

    pub(crate) fn write_to<W: Write>(
        self,
        wtr: &mut W,
    ) -> Result<(), crate::error::Error> {
        wtr.write_char(if self.is_negative() { '-' } else { '+' })?;
        wtr.write_int(
            &fmt::DecimalFormatter::new().padding(2),
            i64::from(self.hours_part()),
        )?;
        wtr.write_char(':')?;
        wtr.write_int(
            &fmt::DecimalFormatter::new().padding(2),
            i64::from(self.minutes_part()),
        )
    }
}

impl core::fmt::Display for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.write_to(&mut fmt::FmtWrite(f)).map_err(|_| core::fmt::Error)
    }
}

impl core::fmt::Debug for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Offset({})", self.minutes)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Offset {
    fn arbitrary(g: &mut quickcheck::Gen) -> Offset {
        // A generous civil range, about ±24 hours.
        Offset::from_minutes(i32::arbitrary(g).rem_euclid(2881) - 1440)
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Offset>> {
        alloc::boxed::Box::new(
            self.minutes.shrink().map(Offset::from_minutes),
        )
    }
}
