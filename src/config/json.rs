//! JSON defaults loading and parsing

use crate::config::Defaults;
use crate::error::ConvertError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::debug;

/// Load and parse the defaults from a JSON file
pub fn load_defaults(system: &dyn System, path: &str) -> Result<Defaults> {
    let resolved = system
        .resolve(Path::new(path))
        .with_context(|| format!("Failed to resolve configuration path: {path}"))?;

    if !system.exists(&resolved) {
        return Err(ConvertError::configuration(format!(
            "Configuration file not found: {path}"
        ))
        .into());
    }

    if !system.is_file(&resolved) {
        return Err(ConvertError::configuration(format!(
            "Configuration path is not a file: {path}"
        ))
        .into());
    }

    let content = system
        .read_to_string(&resolved)
        .with_context(|| format!("Failed to read configuration file: {path}"))?;

    debug!("Loaded defaults from {}", resolved.display());
    parse_defaults(&content, path)
}

/// Parse, schema-check and validate defaults JSON text
///
/// `origin` names the source in error messages.
pub fn parse_defaults(content: &str, origin: &str) -> Result<Defaults> {
    let value: serde_json::Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON configuration in {origin}"))?;

    crate::config::schema::validate_against_schema(&value)
        .with_context(|| format!("Configuration validation failed for {origin}"))?;

    let defaults: Defaults = serde_json::from_value(value)
        .with_context(|| format!("Failed to read defaults from {origin}"))?;

    defaults
        .validate()
        .with_context(|| format!("Configuration validation failed for {origin}"))?;

    Ok(defaults)
}
