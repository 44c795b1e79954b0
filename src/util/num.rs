/// Smallest `f64` that no longer fits in an `i64` (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` lose precision; that is the promotion ERL performs
/// whenever an Integer meets a Float.
///
/// ## Example
/// ```
/// use erl::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` toward zero and converts it to an `i64`.
///
/// ## Errors
/// Returns `Err(error)` if the value is NaN, infinite, or outside the `i64`
/// range after truncation.
///
/// ## Parameters
/// - `value`: The float to convert.
/// - `error`: The error to return if the conversion is impossible.
///
/// ## Example
/// ```
/// use erl::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(3.9, "bad"), Ok(3));
/// assert_eq!(f64_to_i64_checked(-3.9, "bad"), Ok(-3));
/// assert_eq!(f64_to_i64_checked(f64::NAN, "bad"), Err("bad"));
/// assert_eq!(f64_to_i64_checked(1e19, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated >= I64_UPPER_BOUND || truncated < -I64_UPPER_BOUND {
        return Err(error);
    }
    Ok(truncated as i64)
}

/// Converts an `f64` to an `i64` only when it is integral and in range.
///
/// ## Example
/// ```
/// use erl::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(4.0), Some(4));
/// assert_eq!(f64_to_i64_exact(4.5), None);
/// ```
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if value.fract() != 0.0 {
        return None;
    }
    f64_to_i64_checked(value, ()).ok()
}

/// Converts an `i64` to a `char` if it is a valid Unicode scalar value.
///
/// ## Errors
/// Returns `Err(error)` for negative values, values above `0x10FFFF` and
/// surrogate code points.
///
/// ## Example
/// ```
/// use erl::util::num::i64_to_char_checked;
///
/// assert_eq!(i64_to_char_checked(65, ()), Ok('A'));
/// assert!(i64_to_char_checked(-1, ()).is_err());
/// assert!(i64_to_char_checked(0xD800, ()).is_err());
/// ```
pub fn i64_to_char_checked<E>(value: i64, error: E) -> Result<char, E> {
    u32::try_from(value).ok()
                        .and_then(char::from_u32)
                        .ok_or(error)
}
