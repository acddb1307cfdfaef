//! Two-quantity comparison
//!
//! Both quantities are expressed in the second quantity's unit: the first is
//! converted (and rounded) through the dispatcher, the second is taken as is.

use crate::error::ConvertError;
use crate::operations::convert::Converter;
use crate::units::Family;
use crate::utils::{coerce_number, format_number};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// A numeric value paired with a unit code
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    #[must_use]
    pub fn new<S: Into<String>>(value: f64, unit: S) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_number(self.value), self.unit)
    }
}

/// Outcome of comparing two quantities of one family
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub family: Family,
    pub first: Quantity,
    pub second: Quantity,
    /// First value expressed in the second quantity's unit
    pub converted: f64,
    /// Rounded absolute difference, in the second quantity's unit
    pub difference: f64,
    /// How the first quantity orders against the second
    pub ordering: Ordering,
}

impl Comparison {
    /// The larger of the two quantities, or `None` when they are equal
    #[must_use]
    pub const fn larger(&self) -> Option<&Quantity> {
        match self.ordering {
            Ordering::Greater => Some(&self.first),
            Ordering::Less => Some(&self.second),
            Ordering::Equal => None,
        }
    }
}

/// Compare `value1 unit1` against `value2 unit2`
///
/// Values are raw command-line text.
///
/// # Errors
///
/// - [`ConvertError::InvalidOperands`] when either value is not a finite number
/// - [`ConvertError::IncompatibleUnits`] when no single family recognizes both units
pub fn compare(
    converter: &Converter,
    value1: &str,
    unit1: &str,
    value2: &str,
    unit2: &str,
) -> Result<Comparison, ConvertError> {
    let first = coerce_number(value1);
    let second = coerce_number(value2);
    if !first.is_finite() || !second.is_finite() {
        return Err(ConvertError::InvalidOperands);
    }

    let family = Family::shared_by(unit1, unit2)
        .ok_or_else(|| ConvertError::incompatible(unit1, unit2))?;
    debug!("Comparing {first} {unit1} with {second} {unit2} as {family}");

    let converted = converter.convert(
        family.name(),
        &Value::from(first),
        Some(unit1),
        Some(unit2),
    )?;
    let difference = converter.round((converted - second).abs());
    let ordering = converted.partial_cmp(&second).unwrap_or(Ordering::Equal);

    Ok(Comparison {
        family,
        first: Quantity::new(first, unit1),
        second: Quantity::new(second, unit2),
        converted,
        difference,
        ordering,
    })
}
