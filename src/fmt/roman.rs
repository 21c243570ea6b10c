/*!
Conversion of numbers to Roman numerals.

This is used by the `%r`, `%R` and `%C` directives in the
[`strtime`](crate::fmt::strtime) module, but the encoder is also usable on
its own. Numerals use the common subtractive forms (`IV`, `IX`, `XL` and so
on), with thousands written as a run of `M`s. There is no representation
for zero, so `0` encodes to nothing.
*/

const ONES: [&str; 10] =
    ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
const TENS: [&str; 10] =
    ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const HUNDREDS: [&str; 10] =
    ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];

/// Length sufficient to encode the absolute year of any datetime.
///
/// The microsecond range of an `i64` covers roughly the years `-292_250`
/// through `292_277`, so at most 292 `M`s followed by at most 12 bytes for
/// the remaining groups (`888` encodes to `DCCCLXXXVIII`).
pub(crate) const MAX_YEAR_LEN: usize = 304;

/// Encodes `value` as a Roman numeral into the buffer given.
///
/// Returns the number of bytes written. When the complete numeral does not
/// fit into the buffer, nothing is written at all and `0` is returned. A
/// `value` of `0` has no numeral and also writes nothing.
///
/// The bytes written are always ASCII.
///
/// # Example
///
/// ```
/// use kalends::fmt::roman;
///
/// let mut buf = [0u8; 16];
/// let n = roman::encode(1990, &mut buf);
/// assert_eq!(&buf[..n], b"MCMXC");
///
/// // Too small for the whole numeral, so nothing is written.
/// assert_eq!(roman::encode(1990, &mut buf[..4]), 0);
/// ```
pub fn encode(value: u32, buf: &mut [u8]) -> usize {
    let thousands = (value / 1000) as usize;
    let hundreds = HUNDREDS[((value / 100) % 10) as usize];
    let tens = TENS[((value / 10) % 10) as usize];
    let ones = ONES[(value % 10) as usize];

    let len = thousands + hundreds.len() + tens.len() + ones.len();
    if len > buf.len() {
        return 0;
    }
    let mut at = 0;
    while at < thousands {
        buf[at] = b'M';
        at += 1;
    }
    for group in [hundreds, tens, ones] {
        buf[at..at + group.len()].copy_from_slice(group.as_bytes());
        at += group.len();
    }
    len
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::*;

    fn enc(value: u32) -> String {
        let mut buf = [0u8; 64];
        let n = encode(value, &mut buf);
        core::str::from_utf8(&buf[..n]).unwrap().to_string()
    }

    #[test]
    fn canonical_forms() {
        assert_eq!(enc(1), "I");
        assert_eq!(enc(4), "IV");
        assert_eq!(enc(9), "IX");
        assert_eq!(enc(14), "XIV");
        assert_eq!(enc(40), "XL");
        assert_eq!(enc(44), "XLIV");
        assert_eq!(enc(90), "XC");
        assert_eq!(enc(400), "CD");
        assert_eq!(enc(900), "CM");
        assert_eq!(enc(1941), "MCMXLI");
        assert_eq!(enc(1990), "MCMXC");
        assert_eq!(enc(2024), "MMXXIV");
        assert_eq!(enc(3888), "MMMDCCCLXXXVIII");
        assert_eq!(enc(3999), "MMMCMXCIX");
        // Beyond the classical range, thousands just pile up.
        assert_eq!(enc(5020), "MMMMMXX");
    }

    #[test]
    fn zero_has_no_numeral() {
        assert_eq!(enc(0), "");
        let mut buf = [0u8; 0];
        assert_eq!(encode(0, &mut buf), 0);
    }

    #[test]
    fn all_or_nothing() {
        // MMMDCCCLXXXVIII is 15 bytes. One byte short writes nothing.
        let mut buf = [0xFFu8; 15];
        assert_eq!(encode(3888, &mut buf), 15);
        assert_eq!(&buf[..], b"MMMDCCCLXXXVIII");

        let mut buf = [0xFFu8; 14];
        assert_eq!(encode(3888, &mut buf), 0);
        assert!(buf.iter().all(|&b| b == 0xFF));
    }
}
