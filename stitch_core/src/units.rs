//! # Unit Types
//!
//! Lightweight newtype wrappers for the two measurement systems the
//! calculators accept. Each pair is related by a fixed linear constant:
//!
//! - Length: inches (in) and centimeters (cm), 1 in = 2.54 cm
//! - Yardage: yards (yd) and meters (m), 1 yd = 0.9144 m
//!
//! Yarn factors are stored per square inch and quantities are computed in
//! yards, so imperial is the native system; metric values are derived.
//!
//! ## Example
//!
//! ```rust
//! use stitch_core::units::{Centimeters, Inches, Meters, Yards};
//!
//! let width: Inches = Centimeters(127.0).into();
//! assert!((width.0 - 50.0).abs() < 1e-9);
//!
//! let length: Meters = Yards(100.0).into();
//! assert!((length.0 - 91.44).abs() < 1e-9);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StitchError;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Meters per yard
pub const METERS_PER_YARD: f64 = 0.9144;

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Centimeters> for Inches {
    fn from(cm: Centimeters) -> Self {
        Inches(cm.0 / CM_PER_INCH)
    }
}

impl From<Inches> for Centimeters {
    fn from(inches: Inches) -> Self {
        Centimeters(inches.0 * CM_PER_INCH)
    }
}

// ============================================================================
// Yardage Units
// ============================================================================

/// Yarn length in yards
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Yards(pub f64);

/// Yarn length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Yards> for Meters {
    fn from(yd: Yards) -> Self {
        Meters(yd.0 * METERS_PER_YARD)
    }
}

impl From<Meters> for Yards {
    fn from(m: Meters) -> Self {
        Yards(m.0 / METERS_PER_YARD)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Yards);
impl_arithmetic!(Meters);

// ============================================================================
// Unit Systems
// ============================================================================

/// Length unit a project's dimensions are given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "in", alias = "inches")]
    Inches,
    #[serde(rename = "cm", alias = "centimeters")]
    Centimeters,
}

impl LengthUnit {
    /// Convert a measurement in this unit to inches
    pub fn to_inches(self, value: f64) -> Inches {
        match self {
            LengthUnit::Inches => Inches(value),
            LengthUnit::Centimeters => Centimeters(value).into(),
        }
    }

    /// Short symbol ("in" / "cm")
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Inches => "in",
            LengthUnit::Centimeters => "cm",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = StitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" | "\"" => Ok(LengthUnit::Inches),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(LengthUnit::Centimeters)
            }
            _ => Err(StitchError::unsupported_unit(s)),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unit a yarn quantity is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum YardageUnit {
    #[default]
    #[serde(rename = "yd")]
    Yards,
    #[serde(rename = "m")]
    Meters,
}

impl YardageUnit {
    /// Convert a yard quantity into this unit
    pub fn convert(self, yards: Yards) -> f64 {
        match self {
            YardageUnit::Yards => yards.0,
            YardageUnit::Meters => Meters::from(yards).0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            YardageUnit::Yards => "yd",
            YardageUnit::Meters => "m",
        }
    }
}

impl FromStr for YardageUnit {
    type Err = StitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yd" | "yds" | "yard" | "yards" => Ok(YardageUnit::Yards),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(YardageUnit::Meters),
            _ => Err(StitchError::unsupported_unit(s)),
        }
    }
}

impl fmt::Display for YardageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cm_to_inches() {
        let inches: Inches = Centimeters(25.4).into();
        assert!((inches.0 - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_yards_to_meters() {
        let m: Meters = Yards(220.0).into();
        assert!((m.0 - 201.168).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Yards(10.0);
        let b = Yards(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_parse_length_unit() {
        assert_eq!("IN".parse::<LengthUnit>().unwrap(), LengthUnit::Inches);
        assert_eq!(" Centimetres ".parse::<LengthUnit>().unwrap(), LengthUnit::Centimeters);
        let err = "furlong".parse::<LengthUnit>().unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_UNIT");
    }

    #[test]
    fn test_parse_yardage_unit() {
        assert_eq!("yards".parse::<YardageUnit>().unwrap(), YardageUnit::Yards);
        assert_eq!("m".parse::<YardageUnit>().unwrap(), YardageUnit::Meters);
        assert!("skeins".parse::<YardageUnit>().is_err());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Yards(12.5)).unwrap(), "12.5");
        assert_eq!(serde_json::to_string(&LengthUnit::Centimeters).unwrap(), "\"cm\"");
        let unit: LengthUnit = serde_json::from_str("\"inches\"").unwrap();
        assert_eq!(unit, LengthUnit::Inches);
    }

    proptest! {
        #[test]
        fn yardage_round_trip(yd in 0.0f64..1.0e9) {
            let back: Yards = Meters::from(Yards(yd)).into();
            prop_assert!((back.0 - yd).abs() <= 1e-9 * yd.max(1.0));
        }

        #[test]
        fn length_round_trip(inches in 0.0f64..1.0e6) {
            let back: Inches = Centimeters::from(Inches(inches)).into();
            prop_assert!((back.0 - inches).abs() <= 1e-9 * inches.max(1.0));
        }
    }
}
