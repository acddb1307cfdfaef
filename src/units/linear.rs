//! Factor tables for families that scale linearly through a base unit

use crate::error::ConvertError;

/// A unit code and how many base units one of it is worth
pub type LinearUnit = (&'static str, f64);

/// Look up the factor for `code`
///
/// # Errors
///
/// Returns [`ConvertError::UnknownUnit`] if the table has no such code.
pub fn factor(table: &[LinearUnit], code: &str) -> Result<f64, ConvertError> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| ConvertError::unknown_unit(code))
}

/// Convert through the table's base unit
///
/// # Errors
///
/// Returns [`ConvertError::UnknownUnit`] for the first unrecognized code,
/// checking `from` before `to`.
pub fn convert(table: &[LinearUnit], value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    let from_factor = factor(table, from)?;
    let to_factor = factor(table, to)?;

    if from == to {
        return Ok(value);
    }

    Ok(value * from_factor / to_factor)
}

pub(super) fn codes(table: &[LinearUnit]) -> Vec<&'static str> {
    table.iter().map(|(code, _)| *code).collect()
}
