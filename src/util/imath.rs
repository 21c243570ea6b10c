/*!
Signed integer division with floor semantics.

The calendar math in this crate routinely divides negative day and
microsecond counts, and it needs the mathematical floor in those cases,
not the truncation toward zero that `/` and `%` give. These helpers are
only ever called with a positive divisor.
*/

/// Returns `a` modulo `b` with the sign of `b`, for `b > 0`.
#[inline]
pub(crate) const fn floor_mod32(a: i32, b: i32) -> i32 {
    let m = a % b;
    if m < 0 {
        m + b
    } else {
        m
    }
}

/// Returns the floor of `a / b`, for `b > 0`.
#[inline]
pub(crate) const fn floor_div32(a: i32, b: i32) -> i32 {
    (a - floor_mod32(a, b)) / b
}

/// Returns `a` modulo `b` with the sign of `b`, for `b > 0`.
///
/// This is the 64-bit variant used wherever microsecond counts appear.
#[inline]
pub(crate) const fn floor_mod(a: i64, b: i64) -> i64 {
    let m = a % b;
    if m < 0 {
        m + b
    } else {
        m
    }
}

/// Returns the floor of `a / b`, for `b > 0`.
#[inline]
pub(crate) const fn floor_div(a: i64, b: i64) -> i64 {
    (a - floor_mod(a, b)) / b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_toward_negative_infinity() {
        assert_eq!(floor_div(-1, 7), -1);
        assert_eq!(floor_mod(-1, 7), 6);
        assert_eq!(floor_div(-7, 7), -1);
        assert_eq!(floor_mod(-7, 7), 0);
        assert_eq!(floor_div(-8, 7), -2);
        assert_eq!(floor_mod(-8, 7), 6);
        assert_eq!(floor_div(8, 7), 1);
        assert_eq!(floor_mod(8, 7), 1);

        assert_eq!(floor_div32(-15627, 7), -2233);
        assert_eq!(floor_mod32(-15627, 7), 4);
    }

    quickcheck::quickcheck! {
        fn prop_floor_identity_i64(a: i64, b: i64) -> quickcheck::TestResult {
            // Keep the product away from the edges of i64.
            let b = b.rem_euclid(1 << 20) + 1;
            let a = a % (1 << 40);
            let (q, m) = (floor_div(a, b), floor_mod(a, b));
            quickcheck::TestResult::from_bool(
                q * b + m == a && 0 <= m && m < b,
            )
        }

        fn prop_floor_identity_i32(a: i32, b: i32) -> quickcheck::TestResult {
            let b = b.rem_euclid(1 << 10) + 1;
            let a = a % (1 << 20);
            let (q, m) = (floor_div32(a, b), floor_mod32(a, b));
            quickcheck::TestResult::from_bool(
                q * b + m == a && 0 <= m && m < b,
            )
        }
    }
}
