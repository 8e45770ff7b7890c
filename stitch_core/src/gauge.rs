//! # Gauge Calculator
//!
//! Converts a measured swatch into stitch and row counts for a target size.
//!
//! ## Example
//!
//! ```rust
//! use stitch_core::gauge::{calculate, GaugeRequest, GaugeSwatch};
//! use stitch_core::units::LengthUnit;
//!
//! // 16 sc and 18 rows over a 4" square
//! let request = GaugeRequest {
//!     swatch: GaugeSwatch { stitches: 16.0, rows: 18.0, size: 4.0, unit: LengthUnit::Inches },
//!     width: 50.0,
//!     height: 60.0,
//!     unit: LengthUnit::Inches,
//! };
//! let result = calculate(&request).unwrap();
//! assert_eq!(result.stitches, 200);
//! assert_eq!(result.rows, 270);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{StitchError, StitchResult};
use crate::units::LengthUnit;

/// A measured gauge swatch: `stitches` and `rows` counted over a square of side `size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeSwatch {
    pub stitches: f64,
    pub rows: f64,
    /// Side length of the measured square
    pub size: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl GaugeSwatch {
    /// Stitches per inch
    pub fn stitches_per_inch(&self) -> f64 {
        self.stitches / self.unit.to_inches(self.size).0
    }

    /// Rows per inch
    pub fn rows_per_inch(&self) -> f64 {
        self.rows / self.unit.to_inches(self.size).0
    }

    pub fn validate(&self) -> StitchResult<()> {
        positive("swatch.stitches", self.stitches)?;
        positive("swatch.rows", self.rows)?;
        positive("swatch.size", self.size)?;
        Ok(())
    }
}

/// Target size to cast on for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeRequest {
    pub swatch: GaugeSwatch,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

/// Stitch and row counts for the target size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeResult {
    pub stitches_per_inch: f64,
    pub rows_per_inch: f64,
    /// Stitches across the width (foundation chain length before turning chains)
    pub stitches: u64,
    /// Rows up the height
    pub rows: u64,
}

/// Calculate stitch and row counts. Counts are rounded to the nearest whole
/// stitch and are never less than one.
pub fn calculate(request: &GaugeRequest) -> StitchResult<GaugeResult> {
    request.swatch.validate()?;
    positive("width", request.width)?;
    positive("height", request.height)?;

    let spi = request.swatch.stitches_per_inch();
    let rpi = request.swatch.rows_per_inch();
    let width_in = request.unit.to_inches(request.width).0;
    let height_in = request.unit.to_inches(request.height).0;

    Ok(GaugeResult {
        stitches_per_inch: spi,
        rows_per_inch: rpi,
        stitches: whole_count("width", width_in * spi)?,
        rows: whole_count("height", height_in * rpi)?,
    })
}

fn positive(field: &str, value: f64) -> StitchResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(StitchError::invalid_dimension(
            field,
            value.to_string(),
            "Must be a positive, finite number",
        ))
    }
}

fn whole_count(field: &str, value: f64) -> StitchResult<u64> {
    if !value.is_finite() || value > u64::MAX as f64 {
        return Err(StitchError::QuantityOutOfRange {
            value: format!("{field}: {value}"),
        });
    }
    Ok((value.round() as u64).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swatch() -> GaugeSwatch {
        GaugeSwatch { stitches: 14.0, rows: 16.0, size: 4.0, unit: LengthUnit::Inches }
    }

    #[test]
    fn test_rates() {
        let s = swatch();
        assert_eq!(s.stitches_per_inch(), 3.5);
        assert_eq!(s.rows_per_inch(), 4.0);
    }

    #[test]
    fn test_metric_swatch() {
        // 10 cm swatch with 14 stitches
        let s = GaugeSwatch { stitches: 14.0, rows: 16.0, size: 10.0, unit: LengthUnit::Centimeters };
        assert!((s.stitches_per_inch() - 3.556).abs() < 1e-9);
    }

    #[test]
    fn test_counts_round_to_nearest() {
        let request = GaugeRequest { swatch: swatch(), width: 9.9, height: 1.0, unit: LengthUnit::Inches };
        let result = calculate(&request).unwrap();
        // 9.9 x 3.5 = 34.65
        assert_eq!(result.stitches, 35);
        assert_eq!(result.rows, 4);
    }

    #[test]
    fn test_tiny_target_is_one_stitch() {
        let request = GaugeRequest { swatch: swatch(), width: 0.01, height: 0.01, unit: LengthUnit::Inches };
        let result = calculate(&request).unwrap();
        assert_eq!(result.stitches, 1);
        assert_eq!(result.rows, 1);
    }

    #[test]
    fn test_rejects_zero_swatch() {
        let request = GaugeRequest {
            swatch: GaugeSwatch { size: 0.0, ..swatch() },
            width: 10.0,
            height: 10.0,
            unit: LengthUnit::Inches,
        };
        let err = calculate(&request).unwrap_err();
        assert!(matches!(err, StitchError::InvalidDimension { ref field, .. } if field == "swatch.size"));
    }
}
