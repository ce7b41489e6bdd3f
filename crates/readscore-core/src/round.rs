//! Fixed-point rounding that matches `Number.prototype.toFixed` + `parseFloat`.
//!
//! The exact binary value of the input is rounded to the requested number of
//! decimal places with ties going away from zero, and the resulting decimal
//! string is parsed back into an `f64`. Scaling by a power of ten and calling
//! [`f64::round`] is not equivalent: `1.005 * 100.0` lands on a tie that the
//! exact value never reaches.

/// Digits printed past the rounding position. `f64` values within a
/// readability formula's range are fully resolved well before this.
const GUARD_DIGITS: usize = 30;

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    to_fixed(value, 2)
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    to_fixed(value, 1)
}

/// Round to a whole number.
pub(crate) fn round0(value: f64) -> f64 {
    to_fixed(value, 0)
}

/// Round `value` to `digits` decimal places, half away from zero.
///
/// Non-finite values pass through unchanged.
pub(crate) fn to_fixed(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // `{:.N}` on f64 prints the exact binary expansion up to N places.
    let expanded = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (whole, fraction) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));

    let mut mantissa: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    let round_up = fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up {
        increment_decimal(&mut mantissa);
    }

    let split = mantissa.len() - digits;
    let mut rendered = String::with_capacity(mantissa.len() + 2);
    if value.is_sign_negative() {
        rendered.push('-');
    }
    rendered.extend(mantissa[..split].iter().map(|&b| char::from(b)));
    if digits > 0 {
        rendered.push('.');
        rendered.extend(mantissa[split..].iter().map(|&b| char::from(b)));
    }

    rendered.parse().unwrap_or(value)
}

/// Add one to a big-endian string of ASCII digits, growing it on carry-out.
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
