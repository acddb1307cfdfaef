//! Temperature units
//!
//! Temperature scales differ by offset as well as scale, so there is no common
//! factor table. Every conversion goes through Celsius: the source value is
//! first brought to Celsius, then taken to the target scale.

use crate::error::ConvertError;
use std::str::FromStr;

const KELVIN_OFFSET: f64 = 273.15;

/// Recognized temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [Self; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Kelvin => "K",
        }
    }

    /// Express a value on this scale in Celsius
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Self::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Express a Celsius value on this scale
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.code() == s)
            .ok_or_else(|| ConvertError::unknown_unit(s))
    }
}

/// Convert a temperature between `C`, `F` and `K`
///
/// Values below absolute zero are converted like any other.
///
/// # Errors
///
/// Returns [`ConvertError::UnknownUnit`] if either code is not a temperature
/// scale, checking `from` before `to`.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    let source: TemperatureUnit = from.parse()?;
    let target: TemperatureUnit = to.parse()?;

    if source == target {
        return Ok(value);
    }

    let celsius = source.to_celsius(value);
    Ok(target.from_celsius(celsius))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(convert_temperature(0.0, "C", "F").unwrap(), 32.0);
        assert_eq!(convert_temperature(100.0, "C", "F").unwrap(), 212.0);
        assert_eq!(convert_temperature(212.0, "F", "C").unwrap(), 100.0);
        assert_eq!(convert_temperature(-40.0, "F", "C").unwrap(), -40.0);
        assert_eq!(convert_temperature(0.0, "C", "K").unwrap(), 273.15);
    }

    #[test]
    fn test_kelvin_to_fahrenheit_goes_through_celsius() {
        let fahrenheit = convert_temperature(373.15, "K", "F").unwrap();
        assert!((fahrenheit - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_below_absolute_zero_is_accepted() {
        let kelvin = convert_temperature(-300.0, "C", "K").unwrap();
        assert!((kelvin - -26.85).abs() < 1e-9);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(
            convert_temperature(1.0, "c", "F").unwrap_err(),
            ConvertError::unknown_unit("c")
        );
        assert_eq!(
            convert_temperature(1.0, "C", "").unwrap_err(),
            ConvertError::unknown_unit("")
        );
    }
}
