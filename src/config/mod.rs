//! Configuration management module
//!
//! Handles the defaults file: JSON parsing, JSON schema validation and
//! semantic checks against the unit tables. The defaults are loaded once per
//! invocation and handed to the dispatcher; nothing mutates them afterwards.

pub mod json;
pub mod schema;
pub mod validation;

use crate::system::System;
use serde::{Deserialize, Serialize};

/// Defaults shipped with the binary
pub const BUILTIN_DEFAULTS: &str = include_str!("../../config/defaults.json");

/// Process-wide conversion defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Decimal places every result is rounded to
    pub precision: u32,

    /// Unit codes used when a temperature conversion omits them
    pub temperature: TemperatureDefaults,
}

/// Default source and target scales for temperature conversions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDefaults {
    pub default_from: String,
    pub default_to: String,
}

impl Defaults {
    /// Load the defaults embedded in the binary
    pub fn builtin() -> anyhow::Result<Self> {
        json::parse_defaults(BUILTIN_DEFAULTS, "<built-in defaults>")
    }

    /// Load defaults from a JSON file
    pub fn load_from_file(system: &dyn System, path: &str) -> anyhow::Result<Self> {
        json::load_defaults(system, path)
    }

    /// Load from `path` when given, otherwise the built-in defaults
    pub fn load(system: &dyn System, path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from_file(system, path),
            None => Self::builtin(),
        }
    }

    /// Check the loaded values against the unit tables
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_defaults(self)
    }
}
