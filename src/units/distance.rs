//! Distance units, relative to the meter

use super::linear::{self, LinearUnit};
use crate::error::ConvertError;

/// Recognized distance codes and their size in meters
pub const DISTANCE_UNITS: &[LinearUnit] = &[("km", 1000.0), ("mi", 1609.344), ("m", 1.0)];

/// Convert a distance between `km`, `mi` and `m`
///
/// # Errors
///
/// Returns [`ConvertError::UnknownUnit`] if either code is not a distance unit.
#[inline]
pub fn convert_distance(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    linear::convert(DISTANCE_UNITS, value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_km_to_mi() {
        let miles = convert_distance(5.0, "km", "mi").unwrap();
        assert!((miles - 3.106_855_961_186_67).abs() < 1e-9);
    }

    #[test]
    fn test_mi_to_m() {
        assert_eq!(convert_distance(1.0, "mi", "m").unwrap(), 1609.344);
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            convert_distance(1.0, "km", "ft").unwrap_err(),
            ConvertError::unknown_unit("ft")
        );
        assert_eq!(
            convert_distance(1.0, "lb", "km").unwrap_err(),
            ConvertError::unknown_unit("lb")
        );
    }
}
