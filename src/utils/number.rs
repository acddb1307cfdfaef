//! Numeric text handling
//!
//! Input text is read with numeric-literal semantics: surrounding whitespace is
//! ignored, whitespace-only text reads as zero, `Infinity` and the `0x`, `0o`
//! and `0b` prefixes are understood, and anything else non-numeric reads as
//! NaN. Output uses the shortest round-trip digits, switching to exponent form
//! below `1e-6` and from `1e21` upward.

/// Read a string as a number, returning NaN when it is not numeric
#[must_use]
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // `f64::from_str` also accepts `inf` and `nan`; only plain decimal
    // literals are numbers here.
    let is_decimal_literal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_decimal_literal {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned `0x`/`0o`/`0b` literal; `Some(NaN)` for a prefix with bad digits
fn parse_radix_literal(text: &str) -> Option<f64> {
    let lower = text.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Render a number the way results are printed
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exponential = format!("{value:e}");
        return match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponential,
        };
    }

    format!("{value}")
}

/// Render a single conversion result
///
/// Same as [`format_number`] except that negative zero keeps its sign.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 && value.is_sign_negative() {
        return "-0".to_owned();
    }
    format_number(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_decimal() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number("  -3.5\n"), -3.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("+7"), 7.0);
    }

    #[test]
    fn test_coerce_whitespace_is_zero() {
        assert_eq!(coerce_number("   "), 0.0);
    }

    #[test]
    fn test_coerce_radix() {
        assert_eq!(coerce_number("0x1F"), 31.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("0b102").is_nan());
    }

    #[test]
    fn test_coerce_rejects_words() {
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("NaN").is_nan());
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("1e").is_nan());
        assert!(coerce_number(".").is_nan());
    }

    #[test]
    fn test_coerce_infinity() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(3.11), "3.11");
        assert_eq!(format_number(-40.0), "-40");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.000_001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_result_keeps_negative_zero() {
        assert_eq!(format_result(-0.0), "-0");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-3.5), "-3.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_exponential() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
    }
}
