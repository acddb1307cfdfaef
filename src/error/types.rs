//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for conversion and comparison operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// Value is empty, null, a sequence, non-numeric or non-finite
    #[error("Invalid number: value must be a valid numeric value")]
    InvalidNumber,

    /// Unit code not recognized within the applicable family
    #[error("Unknown unit code: {code}")]
    UnknownUnit { code: String },

    /// Family name is not one of temperature, distance or weight
    #[error("Unknown type {name}")]
    UnknownType { name: String },

    /// Compared units belong to different families, or to none
    #[error("Units {first} and {second} are not compatible or unknown")]
    IncompatibleUnits { first: String, second: String },

    /// One of the compared values is not a usable number
    #[error("Both values must be valid numbers")]
    InvalidOperands,

    /// Missing command or wrong argument count; carries the usage text
    #[error("{usage}")]
    Usage { usage: String },

    /// Defaults configuration is missing or invalid
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ConvertError {
    /// Get the process exit code for this error
    ///
    /// Every failure is fatal to the invocation and reported with status 1.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::InvalidNumber
            | Self::UnknownUnit { .. }
            | Self::UnknownType { .. }
            | Self::IncompatibleUnits { .. }
            | Self::InvalidOperands
            | Self::Usage { .. }
            | Self::Configuration { .. } => 1,
        }
    }

    /// Whether this error is reported as bare usage text rather than `Error: ...`
    #[must_use]
    #[inline]
    pub const fn is_usage(&self) -> bool {
        matches!(*self, Self::Usage { .. })
    }

    /// Create an unknown unit error
    #[inline]
    pub fn unknown_unit<S: Into<String>>(code: S) -> Self {
        Self::UnknownUnit { code: code.into() }
    }

    /// Create an unknown type error
    #[inline]
    pub fn unknown_type<S: Into<String>>(name: S) -> Self {
        Self::UnknownType { name: name.into() }
    }

    /// Create an incompatible units error
    #[inline]
    pub fn incompatible<S: Into<String>, T: Into<String>>(first: S, second: T) -> Self {
        Self::IncompatibleUnits {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a usage error
    #[inline]
    pub fn usage<S: Into<String>>(usage: S) -> Self {
        Self::Usage {
            usage: usage.into(),
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConvertError::InvalidNumber.to_string(),
            "Invalid number: value must be a valid numeric value"
        );
        assert_eq!(
            ConvertError::unknown_unit("xyz").to_string(),
            "Unknown unit code: xyz"
        );
        assert_eq!(
            ConvertError::unknown_type("volume").to_string(),
            "Unknown type volume"
        );
        assert_eq!(
            ConvertError::incompatible("km", "lb").to_string(),
            "Units km and lb are not compatible or unknown"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ConvertError::InvalidNumber.exit_code(), 1);
        assert_eq!(ConvertError::usage("Usage: convert").exit_code(), 1);
        assert_eq!(ConvertError::configuration("bad").exit_code(), 1);
    }

    #[test]
    fn test_usage_is_bare() {
        let err = ConvertError::usage("Usage: a\n   or: b");
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "Usage: a\n   or: b");
        assert!(!ConvertError::InvalidOperands.is_usage());
    }
}
