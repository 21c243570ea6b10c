use alloc::{boxed::Box, string::ToString};

/// An error that can occur in this crate.
///
/// The operations in this crate are total: constructing a datetime, shifting
/// it by a span or converting it between offsets never fails. Errors only
/// arise when formatted output cannot be delivered to its destination, for
/// example when an underlying [`std::io::Write`] or [`core::fmt::Write`]
/// implementation reports a failure.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where only one
/// error type exists for a variety of different operations. Since the only
/// fallible operations are writes, the error is little more than a message.
/// Callers that need to react to a failed write should inspect the error
/// returned by their own writer instead.
#[derive(Clone)]
pub struct Error {
    message: Box<str>,
}

impl Error {
    /// Creates a new "ad hoc" error with the given message.
    ///
    /// This is called "ad hoc" in the sense that the error contains nothing
    /// other than the rendering of the message given.
    pub(crate) fn adhoc(message: impl core::fmt::Display) -> Error {
        Error { message: message.to_string().into_boxed_str() }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Error({:?})", self.message)
    }
}
