/// A simple formatter for converting `i64` values to ASCII byte strings.
///
/// This avoids going through the formatting machinery, which keeps the
/// formatting routines free of `core::fmt` and usable in const contexts.
///
/// By default, this only includes the sign if it's negative and writes the
/// number with no padding. The builders below add zero or space padding and
/// a forced sign position, mirroring the `printf` flags `0`, `+` and space:
/// zero padding goes between the sign and the digits, while space padding
/// goes before the sign and the sign counts toward the minimum width.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecimalFormatter {
    sign: Option<u8>,
    minimum_width: u8,
    padding_byte: u8,
}

impl DecimalFormatter {
    /// Creates a new decimal formatter using the default configuration.
    pub(crate) const fn new() -> DecimalFormatter {
        DecimalFormatter { sign: None, minimum_width: 0, padding_byte: b'0' }
    }

    /// Format the given value using this configuration as a decimal ASCII
    /// number.
    #[cfg(test)]
    pub(crate) const fn format(&self, value: i64) -> Decimal {
        Decimal::new(self, value)
    }

    /// Renders the sign position even for non-negative values, as `+`.
    pub(crate) const fn force_sign(self) -> DecimalFormatter {
        DecimalFormatter { sign: Some(b'+'), ..self }
    }

    /// Renders the sign position even for non-negative values, as a blank.
    pub(crate) const fn blank_sign(self) -> DecimalFormatter {
        DecimalFormatter { sign: Some(b' '), ..self }
    }

    /// The minimum width this number should be formatted with. If the
    /// number would be narrower than this, then it is padded out with the
    /// padding byte (zero by default) until the minimum is reached.
    ///
    /// For zero padding the minimum counts digits only, so a sign widens
    /// the result. For any other padding byte the minimum counts the sign
    /// too. Both match what `printf` does for its `0` and space flags.
    ///
    /// The minimum is capped at the maximum number of digits for an `i64`
    /// value (which is 19).
    pub(crate) const fn padding(self, mut width: u8) -> DecimalFormatter {
        if width > Decimal::MAX_I64_DIGITS {
            width = Decimal::MAX_I64_DIGITS;
        }
        DecimalFormatter { minimum_width: width, ..self }
    }

    /// The padding byte to use when `padding` is set.
    ///
    /// The default is `0`.
    pub(crate) const fn padding_byte(self, byte: u8) -> DecimalFormatter {
        DecimalFormatter { padding_byte: byte, ..self }
    }
}

impl Default for DecimalFormatter {
    fn default() -> DecimalFormatter {
        DecimalFormatter::new()
    }
}

/// A formatted decimal number that can be converted to a sequence of bytes.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_I64_LEN as usize],
    start: u8,
    end: u8,
}

impl Decimal {
    /// Discovered via `i64::MIN.to_string().len()`.
    const MAX_I64_LEN: u8 = 20;
    /// Discovered via `i64::MAX.to_string().len()`.
    const MAX_I64_DIGITS: u8 = 19;

    /// Using the given formatter, turn the value given into a decimal
    /// representation using ASCII bytes.
    pub(crate) const fn new(
        formatter: &DecimalFormatter,
        value: i64,
    ) -> Decimal {
        let negative = value < 0;
        let Some(mut value) = value.checked_abs() else {
            let buf = [
                b'-', b'9', b'2', b'2', b'3', b'3', b'7', b'2', b'0', b'3',
                b'6', b'8', b'5', b'4', b'7', b'7', b'5', b'8', b'0', b'8',
            ];
            return Decimal { buf, start: 0, end: Self::MAX_I64_LEN };
        };
        let mut decimal = Decimal {
            buf: [0; Self::MAX_I64_LEN as usize],
            start: Self::MAX_I64_LEN,
            end: Self::MAX_I64_LEN,
        };
        loop {
            decimal.start -= 1;

            let digit = (value % 10) as u8;
            value /= 10;
            decimal.buf[decimal.start as usize] = b'0' + digit;
            if value == 0 {
                break;
            }
        }
        let sign = if negative { Some(b'-') } else { formatter.sign };
        if formatter.padding_byte == b'0' {
            while decimal.len() < formatter.minimum_width {
                decimal.start -= 1;
                decimal.buf[decimal.start as usize] = b'0';
            }
            if let Some(byte) = sign {
                decimal.start -= 1;
                decimal.buf[decimal.start as usize] = byte;
            }
        } else {
            if let Some(byte) = sign {
                decimal.start -= 1;
                decimal.buf[decimal.start as usize] = byte;
            }
            while decimal.len() < formatter.minimum_width {
                decimal.start -= 1;
                decimal.buf[decimal.start as usize] = formatter.padding_byte;
            }
        }
        decimal
    }

    /// Returns the total number of ASCII bytes (including the sign) that are
    /// used to represent this decimal number.
    const fn len(&self) -> u8 {
        self.end - self.start
    }

    /// Returns the ASCII representation of this decimal as a byte slice.
    ///
    /// The slice returned is guaranteed to be valid ASCII.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[usize::from(self.start)..usize::from(self.end)]
    }

    /// Returns the ASCII representation of this decimal as a string slice.
    pub(crate) fn as_str(&self) -> &str {
        // SAFETY: This is safe because all bytes written to `self.buf` are
        // guaranteed to be ASCII (including in its initial state), and thus,
        // any subsequence is guaranteed to be valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_unpadded() {
        let x = DecimalFormatter::new().format(i64::MIN);
        assert_eq!(x.as_str(), "-9223372036854775808");

        let x = DecimalFormatter::new().format(i64::MIN + 1);
        assert_eq!(x.as_str(), "-9223372036854775807");

        let x = DecimalFormatter::new().format(i64::MAX);
        assert_eq!(x.as_str(), "9223372036854775807");

        let x = DecimalFormatter::new().format(0);
        assert_eq!(x.as_str(), "0");

        let x = DecimalFormatter::new().force_sign().format(0);
        assert_eq!(x.as_str(), "+0");
    }

    #[test]
    fn decimal_zero_padded() {
        let x = DecimalFormatter::new().padding(4).format(0);
        assert_eq!(x.as_str(), "0000");

        let x = DecimalFormatter::new().padding(4).format(789);
        assert_eq!(x.as_str(), "0789");

        // The sign goes outside the zeros and widens the result, like
        // printf widens the field for a sign.
        let x = DecimalFormatter::new().padding(4).format(-789);
        assert_eq!(x.as_str(), "-0789");

        let x = DecimalFormatter::new().padding(4).format(-43);
        assert_eq!(x.as_str(), "-0043");
    }

    #[test]
    fn decimal_space_padded() {
        let x =
            DecimalFormatter::new().padding_byte(b' ').padding(5).format(789);
        assert_eq!(x.as_str(), "  789");

        // Spaces go before the sign, not between sign and digits.
        let x =
            DecimalFormatter::new().padding_byte(b' ').padding(5).format(-42);
        assert_eq!(x.as_str(), "  -42");

        let x = DecimalFormatter::new()
            .force_sign()
            .padding_byte(b' ')
            .padding(5)
            .format(42);
        assert_eq!(x.as_str(), "  +42");

        // A blank sign still occupies its position when the value is
        // already wide enough.
        let x =
            DecimalFormatter::new().blank_sign().padding_byte(b' ').format(7);
        assert_eq!(x.as_str(), " 7");

        let x = DecimalFormatter::new()
            .blank_sign()
            .padding_byte(b' ')
            .padding(4)
            .format(7);
        assert_eq!(x.as_str(), "   7");
    }
}
