//! Conversion dispatch
//!
//! Validates a loosely-typed request, applies the temperature defaults,
//! routes to the family's conversion function and rounds the result once.

use crate::config::Defaults;
use crate::error::ConvertError;
use crate::operations::rounding::round_to_precision;
use crate::units::Family;
use crate::utils::coerce_number;
use serde_json::Value;
use tracing::debug;

/// Shown in place of a unit code that was never supplied
pub const MISSING_UNIT: &str = "(none)";

/// Dispatcher bound to one set of loaded defaults
#[derive(Debug, Clone)]
pub struct Converter {
    defaults: Defaults,
}

impl Converter {
    #[must_use]
    pub const fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    /// Round to the configured precision
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        round_to_precision(value, self.defaults.precision)
    }

    /// Convert `value` of the named family from one unit code to another
    ///
    /// `from` and `to` are optional for temperature, where the configured
    /// defaults fill them in. An empty `from` is always rejected; an empty
    /// `to` falls back to the default for temperature.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidNumber`] when `value` is not a finite number
    /// - [`ConvertError::UnknownUnit`] for an empty `from` or an unrecognized code
    /// - [`ConvertError::UnknownType`] when `family` is not a known family
    pub fn convert(
        &self,
        family: &str,
        value: &Value,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<f64, ConvertError> {
        let number = numeric_value(value)?;

        if from == Some("") {
            return Err(ConvertError::unknown_unit(""));
        }

        let family: Family = family.parse()?;
        let (from, to) = match family {
            Family::Temperature => {
                let temperature = &self.defaults.temperature;
                (
                    from.unwrap_or(temperature.default_from.as_str()),
                    to.filter(|code| !code.is_empty())
                        .unwrap_or(temperature.default_to.as_str()),
                )
            }
            Family::Distance | Family::Weight => {
                (from.unwrap_or(MISSING_UNIT), to.unwrap_or(MISSING_UNIT))
            }
        };

        debug!("Converting {number} {from} to {to} ({family})");
        let raw = family.convert(number, from, to)?;
        let rounded = self.round(raw);
        debug!("Raw result {raw}, rounded to {rounded}");

        Ok(rounded)
    }
}

/// Interpret a loosely-typed value as a finite number
///
/// Null, the empty string and arrays are rejected outright. Strings are read
/// as numeric literals and booleans count as 1 or 0.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidNumber`] when the value is not a finite number.
pub fn numeric_value(value: &Value) -> Result<f64, ConvertError> {
    let number = match value {
        Value::Null | Value::Array(_) | Value::Object(_) => f64::NAN,
        Value::String(text) if text.is_empty() => f64::NAN,
        Value::String(text) => coerce_number(text),
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
    };

    if !number.is_finite() {
        return Err(ConvertError::InvalidNumber);
    }

    Ok(number)
}
