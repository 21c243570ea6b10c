/*!
A proleptic Gregorian calendar with microsecond precision, fixed UTC
offsets and template driven formatting.

This crate models a moment in time two ways. An [`Instant`] is a bare
count of microseconds from the start of year zero, with no calendar
structure at all. A [`civil::DateTime`] is the same moment broken out
into calendar and clock fields as read on a wall clock sitting at some
fixed offset from UTC. Converting between the two is exact and total:
every `i64` microsecond count decodes to a datetime, and every datetime,
at any offset, encodes back to the instant it came from.

The calendar is proleptic. It runs on the Gregorian leap rule over the
whole year range, straight through year zero (which is 1 BCE) and into
the years before it, with no discontinuity at the calendar's historical
adoption. Arithmetic works in fixed length units via [`Span`], and
formatting is driven by "printf" style templates in [`fmt::strtime`].
There is no parser; this library only ever produces text.

# Example

```
use kalends::{civil::datetime, ToSpan};

let dt = datetime(2015, 6, 11, 21, 53, 12, 543_294, 120);
assert_eq!(dt.to_string(), "Thu, 2015-06-11 21:53:12.543294+02:00");

// Formatting is template driven. Note that the name directives are
// spelled differently than in POSIX strftime.
assert_eq!(
    dt.strftime("%A %d, %Y at %0H:%0M").to_string(),
    "June 11, 2015 at 21:53",
);

// Arithmetic is by fixed length units, with out of range fields
// carrying over.
let later = dt + 2.weeks().days(3);
assert_eq!(later.strftime("%0Y-%0m-%0d").to_string(), "2015-06-28");
```

# Crate features

* **std** (enabled by default) -
  Enables the host clock, [`Instant::now`] and [`civil::DateTime::now`],
  along with the `std::error::Error` impl for [`Error`] and the
  [`fmt::StdWrite`] adapter. Without it the crate is `no_std` but still
  requires `alloc`.
* **tz-system** (enabled by default) -
  Asks the platform for the local UTC offset when building
  [`civil::DateTime::now`] values. On Unix this reads the C library's
  local time data; elsewhere, or without this feature, the local offset
  falls back to UTC. This implies `std`.
* **logging** -
  Routes this crate's few log statements to the `log` facade. Without it
  they compile to nothing.
* **serde** -
  Enables `fmt::serde`, integer (de)serialization helpers for
  [`Instant`] counts since the Unix epoch.
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
// Shows which Cargo feature an item needs in the rendered docs.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

// There is no core-only mode. The error type boxes its message and
// `strtime::format` builds a `String`; everything else stays in core.
extern crate alloc;

pub use crate::{
    error::Error,
    instant::Instant,
    span::{Span, ToSpan},
};

#[macro_use]
mod logging;

pub mod civil;
mod error;
pub mod fmt;
mod instant;
mod span;
pub mod tz;
mod util;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn now_is_plausible() {
        let _ = env_logger::try_init();

        let now = civil::DateTime::now();
        // Whatever the clock says, it is after this crate was written.
        assert!(now.year() >= 2024);
        assert_eq!(
            now.to_instant(),
            now.to_offset(tz::Offset::UTC).to_instant(),
        );
    }
}
