//! Defaults validation logic

use crate::config::Defaults;
use crate::error::ConvertError;
use crate::units::Family;
use anyhow::Result;

/// Validate loaded defaults against the unit tables
///
/// # Errors
///
/// Returns an error if either temperature default is not a temperature code.
#[inline]
pub fn validate_defaults(defaults: &Defaults) -> Result<()> {
    validate_temperature_code("defaultFrom", &defaults.temperature.default_from)?;
    validate_temperature_code("defaultTo", &defaults.temperature.default_to)?;
    Ok(())
}

fn validate_temperature_code(field: &str, code: &str) -> Result<()> {
    if Family::Temperature.recognizes(code) {
        return Ok(());
    }

    Err(ConvertError::configuration(format!(
        "temperature.{field} '{code}' is not one of {}",
        Family::Temperature.codes().join(", ")
    ))
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemperatureDefaults;

    fn defaults(from: &str, to: &str) -> Defaults {
        Defaults {
            precision: 2,
            temperature: TemperatureDefaults {
                default_from: from.to_owned(),
                default_to: to.to_owned(),
            },
        }
    }

    #[test]
    fn test_valid_codes() {
        assert!(validate_defaults(&defaults("K", "F")).is_ok());
    }

    #[test]
    fn test_distance_code_is_rejected() {
        let err = validate_defaults(&defaults("km", "F")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: temperature.defaultFrom 'km' is not one of C, F, K"
        );
    }

    #[test]
    fn test_lowercase_code_is_rejected() {
        assert!(validate_defaults(&defaults("C", "f")).is_err());
    }
}
