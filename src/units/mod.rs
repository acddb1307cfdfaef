//! Unit tables and per-family conversion functions
//!
//! Each family owns a closed set of unit codes. Codes are only ever looked up
//! inside their own family's table.

pub mod distance;
pub mod linear;
pub mod temperature;
pub mod weight;

use crate::error::ConvertError;
use std::fmt;
use std::str::FromStr;

pub use distance::convert_distance;
pub use temperature::convert_temperature;
pub use weight::convert_weight;

/// One of the supported conversion domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Temperature,
    Distance,
    Weight,
}

impl Family {
    /// All families, in the order compare mode probes them
    pub const ALL: [Self; 3] = [Self::Distance, Self::Weight, Self::Temperature];

    /// Family name as accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Distance => "distance",
            Self::Weight => "weight",
        }
    }

    /// Recognized unit codes for this family
    #[must_use]
    pub fn codes(self) -> Vec<&'static str> {
        match self {
            Self::Temperature => temperature::TemperatureUnit::ALL
                .iter()
                .map(|unit| unit.code())
                .collect(),
            Self::Distance => linear::codes(distance::DISTANCE_UNITS),
            Self::Weight => linear::codes(weight::WEIGHT_UNITS),
        }
    }

    /// Whether `code` belongs to this family's table
    #[must_use]
    pub fn recognizes(self, code: &str) -> bool {
        self.codes().contains(&code)
    }

    /// Find the family that recognizes both codes, if any
    #[must_use]
    pub fn shared_by(first: &str, second: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.recognizes(first) && family.recognizes(second))
    }

    /// Convert `value` between two codes of this family, unrounded
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnknownUnit`] if either code is not in the table.
    pub fn convert(self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        match self {
            Self::Temperature => convert_temperature(value, from, to),
            Self::Distance => convert_distance(value, from, to),
            Self::Weight => convert_weight(value, from, to),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(Self::Temperature),
            "distance" => Ok(Self::Distance),
            "weight" => Ok(Self::Weight),
            other => Err(ConvertError::unknown_type(other)),
        }
    }
}
