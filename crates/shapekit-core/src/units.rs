//! Unit conversion utilities
//!
//! Handles conversion between the measurement units supported by shape
//! calculations. Shape dimensions are stored unitless and treated as
//! centimeters; conversion to meters or inches is applied on demand
//! with fixed linear factors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Centimeters (the native unit of shape dimensions)
    Cm,
    /// Meters
    M,
    /// Inches
    Inch,
}

impl Unit {
    /// Conversion factor relative to centimeters.
    ///
    /// A value in centimeters is divided by the source factor and
    /// multiplied by the target factor.
    pub fn factor(self) -> f64 {
        match self {
            Self::Cm => 1.0,
            Self::M => 0.01,
            Self::Inch => 0.393701,
        }
    }

    /// All supported units, in display order.
    pub fn all() -> [Unit; 3] {
        [Self::Cm, Self::M, Self::Inch]
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::Cm
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cm => write!(f, "cm"),
            Self::M => write!(f, "m"),
            Self::Inch => write!(f, "inch"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(Self::Cm),
            "m" => Ok(Self::M),
            "inch" => Ok(Self::Inch),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

/// Convert a value between units.
///
/// The value is converted to centimeters first, then to the target
/// unit. The same linear factors apply to areas and perimeters alike;
/// this matches the measurement semantics of the design format.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    let in_cm = value / from.factor();
    in_cm * to.factor()
}

/// Format a value with its unit label
///
/// * `value` - Value to format
/// * `unit` - Unit label to append
/// * `decimals` - Number of decimal places
pub fn format_value(value: f64, unit: Unit, decimals: usize) -> String {
    format!("{:.*} {}", decimals, value, unit)
}
