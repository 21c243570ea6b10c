/// A representation of a day of the week.
///
/// The default numbering in this crate follows ISO 8601: weeks begin on
/// Monday, and Monday is day `0`. Conversions to the other common schemes
/// are provided, since formatting directives disagree about where a week
/// starts.
///
/// A weekday is never set directly. It is derived whenever an instant is
/// decoded into a [`DateTime`](crate::civil::DateTime), so it always agrees
/// with the other fields.
///
/// # Example
///
/// ```
/// use kalends::civil::{datetime, Weekday};
///
/// let d = datetime(2024, 7, 14, 0, 0, 0, 0, 0);
/// assert_eq!(d.weekday(), Weekday::Sunday);
/// assert_eq!(d.weekday().to_monday_zero_offset(), 6);
/// assert_eq!(d.weekday().to_monday_one_offset(), 7);
/// assert_eq!(d.weekday().to_sunday_zero_offset(), 0);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(i8)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// Converts an offset in the range `0..=6`, with Monday as `0`, to a
    /// weekday. Values outside the range wrap around.
    pub(crate) const fn from_monday_zero_offset_wrapping(val: i64) -> Weekday {
        match crate::util::imath::floor_mod(val, 7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            6 => Weekday::Sunday,
            _ => unreachable!(),
        }
    }

    /// Returns this weekday as an offset in the range `0..=6`, where Monday
    /// is `0`.
    #[inline]
    pub const fn to_monday_zero_offset(self) -> i8 {
        self as i8
    }

    /// Returns this weekday as an offset in the range `1..=7`, where Monday
    /// is `1`.
    #[inline]
    pub const fn to_monday_one_offset(self) -> i8 {
        self.to_monday_zero_offset() + 1
    }

    /// Returns this weekday as an offset in the range `0..=6`, where Sunday
    /// is `0`.
    #[inline]
    pub const fn to_sunday_zero_offset(self) -> i8 {
        (self.to_monday_zero_offset() + 1) % 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        assert_eq!(Weekday::Monday.to_monday_zero_offset(), 0);
        assert_eq!(Weekday::Sunday.to_monday_zero_offset(), 6);
        assert_eq!(Weekday::Monday.to_monday_one_offset(), 1);
        assert_eq!(Weekday::Sunday.to_monday_one_offset(), 7);
        assert_eq!(Weekday::Sunday.to_sunday_zero_offset(), 0);
        assert_eq!(Weekday::Monday.to_sunday_zero_offset(), 1);
        assert_eq!(Weekday::Saturday.to_sunday_zero_offset(), 6);
    }

    #[test]
    fn wrapping() {
        assert_eq!(
            Weekday::from_monday_zero_offset_wrapping(3),
            Weekday::Thursday,
        );
        assert_eq!(
            Weekday::from_monday_zero_offset_wrapping(7),
            Weekday::Monday,
        );
        assert_eq!(
            Weekday::from_monday_zero_offset_wrapping(-1),
            Weekday::Sunday,
        );
        // 0000-01-01 was a Saturday.
        assert_eq!(
            Weekday::from_monday_zero_offset_wrapping(5),
            Weekday::Saturday,
        );
    }
}
