pub use self::{datetime::DateTime, weekday::Weekday};

mod datetime;
mod weekday;

/// Creates a new [`DateTime`] from wall clock fields and an offset given as
/// signed minutes east of UTC.
///
/// This is a convenience for [`DateTime::new`] that skips building an
/// [`Offset`](crate::tz::Offset) first. Like the constructor itself, it
/// normalizes out of range fields instead of failing.
///
/// # Example
///
/// ```
/// use kalends::civil::datetime;
///
/// let dt = datetime(2015, 6, 11, 21, 53, 12, 543_294, 120);
/// assert_eq!(dt.to_string(), "Thu, 2015-06-11 21:53:12.543294+02:00");
/// ```
#[inline]
pub fn datetime(
    year: i32,
    month: i8,
    day: i8,
    hour: i8,
    minute: i8,
    second: i8,
    microsecond: i32,
    offset_minutes: i32,
) -> DateTime {
    DateTime::new(
        year,
        month,
        day,
        hour,
        minute,
        second,
        microsecond,
        crate::tz::Offset::from_minutes(offset_minutes),
    )
}

/// The era corresponding to a particular year.
///
/// The BCE era corresponds to years less than or equal to `0`, while the CE
/// era corresponds to years greater than `0`.
///
/// In particular, this crate allows years to be negative and also to be `0`,
/// which is contrary to the common practice of excluding the year `0` when
/// writing dates for the Gregorian calendar. Moreover, common practice eschews
/// negative years in favor of labeling a year with an era notation. That is,
/// the year `1 BCE` is year `0` in this crate. The year `2 BCE` is the year
/// `-1` in this crate.
///
/// To get the year in its era format, use [`DateTime::era_year`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Era {
    /// The "before common era" era.
    ///
    /// This corresponds to all years less than or equal to `0`.
    ///
    /// This is precisely equivalent to the "BC" or "before Christ" era.
    BCE,
    /// The "common era" era.
    ///
    /// This corresponds to all years greater than `0`.
    ///
    /// This is precisely equivalent to the "AD" or "anno Domini" or "in the
    /// year of the Lord" era.
    CE,
}
