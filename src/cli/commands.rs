//! CLI command implementations

use crate::cli::Request;
use crate::operations::{Comparison, Converter, compare};
use crate::utils::{format_number, format_result};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;
use tracing::debug;

/// Execute a parsed request, writing its report to `out`
pub fn execute(request: &Request, converter: &Converter, out: &mut dyn Write) -> Result<()> {
    match request {
        Request::Convert {
            family,
            value,
            from,
            to,
        } => execute_convert(converter, family, value, from.as_deref(), to.as_deref(), out),
        Request::Compare {
            value1,
            unit1,
            value2,
            unit2,
        } => execute_compare(converter, value1, unit1, value2, unit2, out),
    }
}

/// Execute a single conversion and print the rounded result
pub fn execute_convert(
    converter: &Converter,
    family: &str,
    value: &str,
    from: Option<&str>,
    to: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    debug!("Convert request: {family} {value} {from:?} {to:?}");
    let result = converter.convert(family, &Value::String(value.to_owned()), from, to)?;
    writeln!(out, "{}", format_result(result))?;
    Ok(())
}

/// Execute a comparison and print both quantities and the verdict
pub fn execute_compare(
    converter: &Converter,
    value1: &str,
    unit1: &str,
    value2: &str,
    unit2: &str,
    out: &mut dyn Write,
) -> Result<()> {
    debug!("Compare request: {value1} {unit1} vs {value2} {unit2}");
    let comparison = compare(converter, value1, unit1, value2, unit2)?;
    write_comparison(&comparison, out)?;
    Ok(())
}

/// Render a comparison as three report lines
pub fn write_comparison(comparison: &Comparison, out: &mut dyn Write) -> std::io::Result<()> {
    let target = &comparison.second.unit;
    writeln!(
        out,
        "{} = {} {target}",
        comparison.first,
        format_number(comparison.converted)
    )?;
    writeln!(out, "{} = {}", comparison.second, comparison.second)?;

    match comparison.larger() {
        None => writeln!(out, "Both values are equal"),
        Some(larger) => writeln!(
            out,
            "{larger} is larger by {} {target}",
            format_number(comparison.difference)
        ),
    }
}
