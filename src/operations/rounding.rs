//! Fixed-precision rounding
//!
//! Results are rounded by rendering them with a fixed number of decimals and
//! reading the text back. The rendering rounds the exact binary value half
//! away from zero, so `0.125` becomes `0.13` and `1.005` (stored just below
//! 1.005) becomes `1.00`.

/// Largest magnitude still rendered in fixed notation
const FIXED_LIMIT: f64 = 1e21;

/// Enough fractional digits to spell out any `f64` exactly
const EXACT_DIGITS: usize = 1074;

/// Render `value` with exactly `digits` decimals
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return crate::utils::format_number(value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    let round_up = fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up && !increment(&mut kept) {
        kept.insert(0, b'1');
    }

    let split = kept.len() - digits;
    let mut rendered = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.extend(kept[..split].iter().map(|b| char::from(*b)));
    if digits > 0 {
        rendered.push('.');
        rendered.extend(kept[split..].iter().map(|b| char::from(*b)));
    }
    rendered
}

/// Add one to the last digit, returning false when the carry runs off the front
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

/// Round `value` to `precision` decimal places
#[must_use]
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return value;
    }

    let digits = usize::try_from(precision).unwrap_or(usize::MAX).min(EXACT_DIGITS);
    to_fixed(value, digits).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_pads() {
        assert_eq!(to_fixed(32.0, 2), "32.00");
        assert_eq!(to_fixed(3.0, 0), "3");
        assert_eq!(to_fixed(0.5, 3), "0.500");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(0.5, 0), "1");
    }

    #[test]
    fn test_uses_exact_binary_value() {
        // 1.005 and 1.045 are stored just below their decimal spelling
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(1.045, 2), "1.04");
        // 1.135 is stored just above
        assert_eq!(to_fixed(1.135, 2), "1.14");
    }

    #[test]
    fn test_carry_into_integer_part() {
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(-99.995_1, 2), "-100.00");
    }

    #[test]
    fn test_small_negative_keeps_sign() {
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        let rounded = round_to_precision(-0.001, 2);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_negative());
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_round_to_precision() {
        assert_eq!(round_to_precision(3.106_855_961_186_67, 2), 3.11);
        assert_eq!(round_to_precision(0.109_999_999_999_999_88, 2), 0.11);
        assert_eq!(round_to_precision(453.592_37, 0), 454.0);
        assert_eq!(round_to_precision(1e21, 2), 1e21);
    }
}
