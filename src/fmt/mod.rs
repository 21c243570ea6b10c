/*!
Support for printing datetimes as text.

The entry point for most use cases is the [`strtime`] module, which provides
`strftime`-style formatting driven by a template string. The [`Write`] trait
defined here is the sink for all formatting in this crate. Implementations are
provided for `String`, `Vec<u8>`, [`FixedBuffer`] and, via the [`StdWrite`]
and [`FmtWrite`] adapters, for `std::io::Write` and `core::fmt::Write`
implementations.

Formatting never inspects or validates its template beyond what is needed to
produce output, and never fails for reasons of its own. The only errors
returned from this module originate in the underlying writer.
*/

use alloc::{string::String, vec::Vec};

use crate::error::Error;

pub(crate) use self::util::{Decimal, DecimalFormatter};

pub mod roman;
#[cfg(feature = "serde")]
pub mod serde;
pub mod strtime;
mod util;

/// A trait for objects that can receive formatted text.
///
/// This is like [`core::fmt::Write`], except it returns this crate's error
/// type so that failures from `std::io::Write` implementations can be
/// reported without loss.
pub trait Write {
    /// Write the given string to this writer, returning whether the write
    /// succeeded or not.
    fn write_str(&mut self, string: &str) -> Result<(), Error>;

    /// Write the given character to this writer, returning whether the write
    /// succeeded or not.
    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string);
        Ok(())
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.extend_from_slice(string.as_bytes());
        Ok(())
    }
}

impl<W: Write> Write for &mut W {
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        (**self).write_str(string)
    }

    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        (**self).write_char(char)
    }
}

/// An adapter for using implementations of `std::io::Write` with this crate's
/// [`Write`] trait.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct StdWrite<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Write for StdWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0.write_all(string.as_bytes()).map_err(Error::adhoc)
    }
}

/// An adapter for using implementations of `core::fmt::Write` with this
/// crate's [`Write`] trait.
#[derive(Clone, Debug)]
pub struct FmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for FmtWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0.write_str(string).map_err(Error::adhoc)
    }
}

/// A writer that fills a caller provided byte buffer of fixed capacity.
///
/// This is meant for environments where allocating is undesirable or
/// impossible. Writes that would overflow the buffer are truncated at a
/// `char` boundary instead of reported as errors, and once a write has been
/// truncated every later write is dropped in full, so the buffer always
/// holds a prefix of the untruncated output. Whether truncation occurred
/// is part of the writer's state, queryable via
/// [`FixedBuffer::is_truncated`]. The bytes written are always valid UTF-8.
///
/// # Example
///
/// ```
/// use kalends::{civil::datetime, fmt::{strtime, FixedBuffer}};
///
/// let dt = datetime(2015, 6, 11, 21, 53, 12, 543294, 120);
/// let mut buf = [0u8; 8];
/// let mut wtr = FixedBuffer::new(&mut buf);
/// strtime::format_into("%0H:%0M:%0S", &dt, &mut wtr)?;
/// assert_eq!(wtr.as_str(), "21:53:12");
/// assert!(!wtr.is_truncated());
/// # Ok::<(), kalends::Error>(())
/// ```
#[derive(Debug)]
pub struct FixedBuffer<'b> {
    buf: &'b mut [u8],
    len: usize,
    truncated: bool,
}

impl<'b> FixedBuffer<'b> {
    /// Creates a new writer that fills the byte buffer given.
    ///
    /// The buffer's contents are considered garbage. Only the prefix written
    /// through this writer, as returned by [`FixedBuffer::as_str`], is
    /// meaningful.
    pub fn new(buf: &'b mut [u8]) -> FixedBuffer<'b> {
        FixedBuffer { buf, len: 0, truncated: false }
    }

    /// Returns the text written to the buffer so far.
    pub fn as_str(&self) -> &str {
        // SAFETY: This is safe because this writer only ever copies in
        // prefixes of `&str` values that are cut at `char` boundaries, and
        // thus the written portion of the buffer is always valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns the bytes written to the buffer so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the number of bytes written to the buffer so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when nothing has been written to the buffer.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns true when at least one write did not fit into the remaining
    /// capacity of the buffer.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Resets this writer to the beginning of the buffer and clears the
    /// truncation flag.
    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }
}

impl<'b> Write for FixedBuffer<'b> {
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        // Truncation is sticky. Letting a shorter later write land would
        // leave something other than a prefix of the full rendering.
        if self.truncated {
            return Ok(());
        }
        let available = self.buf.len() - self.len;
        let mut keep = string.len();
        if keep > available {
            keep = available;
            while !string.is_char_boundary(keep) {
                keep -= 1;
            }
            self.truncated = true;
        }
        self.buf[self.len..self.len + keep]
            .copy_from_slice(&string.as_bytes()[..keep]);
        self.len += keep;
        Ok(())
    }
}

pub(crate) trait WriteExt: Write {
    /// Write the given number as a decimal using ASCII digits to this buffer.
    /// The given formatter controls how the decimal is formatted.
    #[inline]
    fn write_int(
        &mut self,
        formatter: &DecimalFormatter,
        n: impl Into<i64>,
    ) -> Result<(), Error> {
        self.write_decimal(&Decimal::new(formatter, n.into()))
    }

    /// Write the given decimal number to this buffer.
    #[inline]
    fn write_decimal(&mut self, decimal: &Decimal) -> Result<(), Error> {
        self.write_str(decimal.as_str())
    }
}

impl<W: Write> WriteExt for W {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_buffer_exact_fit() {
        let mut buf = [0u8; 5];
        let mut wtr = FixedBuffer::new(&mut buf);
        wtr.write_str("abc").unwrap();
        wtr.write_str("de").unwrap();
        assert_eq!(wtr.as_str(), "abcde");
        assert_eq!(wtr.len(), 5);
        assert!(!wtr.is_truncated());
    }

    #[test]
    fn fixed_buffer_truncates_and_remembers() {
        let mut buf = [0u8; 4];
        let mut wtr = FixedBuffer::new(&mut buf);
        wtr.write_str("abcdef").unwrap();
        assert_eq!(wtr.as_str(), "abcd");
        assert!(wtr.is_truncated());

        // Once full, further writes are dropped entirely.
        wtr.write_str("g").unwrap();
        assert_eq!(wtr.as_str(), "abcd");
    }

    #[test]
    fn fixed_buffer_truncates_at_char_boundary() {
        // "é" is two bytes. Cutting it in half would leave invalid UTF-8,
        // so the whole char is dropped.
        let mut buf = [0u8; 2];
        let mut wtr = FixedBuffer::new(&mut buf);
        wtr.write_str("aéb").unwrap();
        assert_eq!(wtr.as_str(), "a");
        assert_eq!(wtr.len(), 1);
        assert!(wtr.is_truncated());
    }

    #[test]
    fn fixed_buffer_truncation_is_sticky() {
        // Dropping the é leaves a byte of spare capacity, but everything
        // after it has to be dropped too, or the buffer would hold
        // something other than a prefix of the output.
        let mut buf = [0u8; 3];
        let mut wtr = FixedBuffer::new(&mut buf);
        wtr.write_str("ab").unwrap();
        wtr.write_str("é").unwrap();
        assert!(wtr.is_truncated());
        wtr.write_str("z").unwrap();
        assert_eq!(wtr.as_str(), "ab");
        assert!(wtr.is_truncated());
    }

    #[test]
    fn fixed_buffer_clear() {
        let mut buf = [0u8; 2];
        let mut wtr = FixedBuffer::new(&mut buf);
        wtr.write_str("xyz").unwrap();
        assert!(wtr.is_truncated());
        wtr.clear();
        assert!(!wtr.is_truncated());
        wtr.write_str("ok").unwrap();
        assert_eq!(wtr.as_str(), "ok");
        assert!(!wtr.is_truncated());
    }

    #[test]
    fn fixed_buffer_zero_capacity() {
        let mut buf = [0u8; 0];
        let mut wtr = FixedBuffer::new(&mut buf);
        wtr.write_str("").unwrap();
        assert!(!wtr.is_truncated());
        wtr.write_str("a").unwrap();
        assert_eq!(wtr.as_str(), "");
        assert!(wtr.is_truncated());
    }
}
