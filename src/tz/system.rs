/*!
Discovery of the system's current UTC offset.

This is a thin wrapper over `libc::localtime_r`. It deliberately extracts
nothing but the offset from the broken down time returned: no zone name, no
daylight saving flag. When the offset cannot be determined, or when the
`tz-system` crate feature is disabled, UTC is used.
*/

use crate::tz::Offset;

/// Returns the system's UTC offset at the given UNIX timestamp.
///
/// The timestamp matters because the system zone's offset can change over
/// time, for example when daylight saving time starts or ends.
#[cfg(all(unix, feature = "tz-system"))]
pub(crate) fn local_offset(unix_second: i64) -> Offset {
    let time = unix_second as libc::time_t;
    // SAFETY: A zeroed `tm` is a valid value for `localtime_r` to write to.
    let mut tm: libc::tm = unsafe { core::mem::zeroed() };
    // SAFETY: `time` and `tm` are live for the duration of the call, and
    // `localtime_r` writes only through the pointer given to it.
    let ret = unsafe { libc::localtime_r(&time, &mut tm) };
    if ret.is_null() {
        warn!(
            "localtime_r failed for timestamp {unix_second}, \
             falling back to UTC",
        );
        return Offset::UTC;
    }
    let minutes = tm.tm_gmtoff / 60;
    trace!("system offset at {unix_second} is {minutes} minutes");
    Offset::from_minutes(minutes as i32)
}

/// Returns the system's UTC offset at the given UNIX timestamp.
///
/// On this platform or feature configuration there is no way to ask, so
/// this is always UTC.
#[cfg(not(all(unix, feature = "tz-system")))]
pub(crate) fn local_offset(_unix_second: i64) -> Offset {
    trace!("no system offset discovery on this platform, using UTC");
    Offset::UTC
}
