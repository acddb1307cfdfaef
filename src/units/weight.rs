//! Weight units, relative to the gram

use super::linear::{self, LinearUnit};
use crate::error::ConvertError;

/// Recognized weight codes and their mass in grams
pub const WEIGHT_UNITS: &[LinearUnit] = &[("g", 1.0), ("oz", 28.349_523_125), ("lb", 453.592_37)];

/// Convert a weight between `g`, `oz` and `lb`
///
/// # Errors
///
/// Returns [`ConvertError::UnknownUnit`] if either code is not a weight unit.
#[inline]
pub fn convert_weight(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    linear::convert(WEIGHT_UNITS, value, from, to)
}
