/*!
Routines for fixed offsets from UTC.

The only notion of a time zone in this crate is [`Offset`]: a fixed number
of signed minutes east of UTC. There is no daylight saving time, no zone
names and no time zone database. Every datetime carries the offset it was
built with, and conversions between offsets preserve the instant being
described.

The [`offset`](offset()) free function is a convenience for building an
offset from a number of hours:

```
use kalends::tz::{self, Offset};

assert_eq!(tz::offset(2), Offset::from_minutes(120));
assert_eq!(tz::offset(-5), Offset::from_minutes(-300));
```
*/

pub use self::offset::Offset;

mod offset;
pub(crate) mod system;

/// Creates a new offset from a number of whole hours east of UTC.
///
/// This is a convenience for `Offset::from_minutes(hours * 60)`.
#[inline]
pub const fn offset(hours: i8) -> Offset {
    Offset::from_minutes(hours as i32 * 60)
}
