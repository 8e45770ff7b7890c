//! # Yarn Yardage Estimate
//!
//! Estimates how much yarn a flat rectangular piece needs.
//!
//! ## Method
//!
//! 1. area = width x height (converted to square inches)
//! 2. raw yardage = area x the weight's yards-per-square-inch factor
//! 3. adjusted yardage = ceiling(raw x (1 + safety margin))
//! 4. skeins = ceiling(adjusted / skein size) for each configured skein size
//!
//! The estimate is a pure function of the request and settings.
//!
//! ## Example
//!
//! ```rust
//! use stitch_core::estimate::{estimate, EstimateRequest};
//! use stitch_core::settings::EstimatorSettings;
//! use stitch_core::units::LengthUnit;
//!
//! let request = EstimateRequest {
//!     width: 50.0,
//!     height: 60.0,
//!     unit: LengthUnit::Inches,
//!     weight: "worsted".to_string(),
//! };
//! let result = estimate(&request, &EstimatorSettings::default()).unwrap();
//! assert_eq!(result.primary_yards, 5175);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{StitchError, StitchResult};
use crate::settings::EstimatorSettings;
use crate::tables::{find_weight, YarnWeight};
use crate::units::{LengthUnit, Meters, Yards};

/// Largest adjusted yardage the estimator will report.
pub const MAX_ESTIMATE_YARDS: f64 = 1e15;

/// Distance from an integer, in units of `f64::EPSILON` relative to the value,
/// below which a value counts as that integer.
const INTEGER_SNAP_ULPS: f64 = 4.0;

/// Input for a yardage estimate.
///
/// ## JSON Example
///
/// ```json
/// { "width": 50.0, "height": 60.0, "unit": "in", "weight": "worsted" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Finished width in `unit`
    pub width: f64,

    /// Finished height in `unit`
    pub height: f64,

    /// Unit of width and height
    #[serde(default)]
    pub unit: LengthUnit,

    /// Yarn weight identifier or display name (e.g., "worsted")
    pub weight: String,
}

impl EstimateRequest {
    /// Validate dimensions. Zero, negative, NaN and infinite values are rejected.
    pub fn validate(&self) -> StitchResult<()> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)?;
        Ok(())
    }

    /// Finished area in square inches
    pub fn area_sq_in(&self) -> f64 {
        self.unit.to_inches(self.width).0 * self.unit.to_inches(self.height).0
    }
}

/// Skein count for one skein size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageCount {
    /// Yards per skein
    pub package_size_yd: f64,
    /// Skeins needed
    pub count: u64,
}

/// Result of a yardage estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "weight": "worsted",
///   "area_sq_in": 3000.0,
///   "raw_yards": 4500.0,
///   "primary_yards": 5175,
///   "secondary_meters": 4732.02,
///   "packages": [
///     { "package_size_yd": 220.0, "count": 24 },
///     { "package_size_yd": 380.0, "count": 14 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Resolved yarn weight identifier
    pub weight: String,

    /// Finished area in square inches
    pub area_sq_in: f64,

    /// Yardage before the safety margin
    pub raw_yards: f64,

    /// Yardage with the safety margin, rounded up to whole yards
    pub primary_yards: u64,

    /// `primary_yards` expressed in meters
    pub secondary_meters: f64,

    /// Skein counts, one per configured skein size
    pub packages: Vec<PackageCount>,
}

impl EstimateResult {
    /// The primary quantity as a typed length
    pub fn yards(&self) -> Yards {
        Yards(self.primary_yards as f64)
    }
}

/// Estimate yarn needed for a rectangular piece.
///
/// # Returns
///
/// * `Ok(EstimateResult)` - The estimate
/// * `Err(StitchError::InvalidDimension)` - Width or height is not a positive finite number
/// * `Err(StitchError::UnknownCategory)` - The yarn weight is not in the table
/// * `Err(StitchError::InvalidSettings)` - Negative margin or non-positive skein size
/// * `Err(StitchError::QuantityOutOfRange)` - Yardage exceeds [`MAX_ESTIMATE_YARDS`]
pub fn estimate(request: &EstimateRequest, settings: &EstimatorSettings) -> StitchResult<EstimateResult> {
    request.validate()?;
    settings.validate()?;

    let weight = find_weight(&request.weight).ok_or_else(|| {
        warn!(weight = %request.weight, "yarn weight not in table");
        StitchError::unknown_category(&request.weight)
    })?;

    let result = estimate_for_weight(request.area_sq_in(), weight, settings)?;
    debug!(
        weight = weight.id,
        area_sq_in = result.area_sq_in,
        primary_yards = result.primary_yards,
        "computed yardage estimate"
    );
    Ok(result)
}

/// Estimate from a precomputed area and a resolved weight.
pub fn estimate_for_weight(
    area_sq_in: f64,
    weight: &YarnWeight,
    settings: &EstimatorSettings,
) -> StitchResult<EstimateResult> {
    let raw_yards = area_sq_in * weight.yards_per_sq_in;
    let adjusted = ceil_snapped(raw_yards * (1.0 + settings.safety_margin)).max(raw_yards.ceil());

    if !adjusted.is_finite() || adjusted > MAX_ESTIMATE_YARDS {
        return Err(StitchError::QuantityOutOfRange {
            value: adjusted.to_string(),
        });
    }

    let packages = settings
        .package_sizes_yd
        .iter()
        .map(|&size| PackageCount {
            package_size_yd: size,
            count: packages_needed(adjusted, size),
        })
        .collect();

    Ok(EstimateResult {
        weight: weight.id.to_string(),
        area_sq_in,
        raw_yards,
        primary_yards: adjusted as u64,
        secondary_meters: Meters::from(Yards(adjusted)).0,
        packages,
    })
}

fn validate_dimension(field: &str, value: f64) -> StitchResult<()> {
    if value.is_nan() {
        return Err(StitchError::invalid_dimension(field, "NaN", "Must be a number"));
    }
    if !value.is_finite() {
        return Err(StitchError::invalid_dimension(field, value.to_string(), "Must be finite"));
    }
    if value <= 0.0 {
        return Err(StitchError::invalid_dimension(field, value.to_string(), "Must be positive"));
    }
    Ok(())
}

/// Skeins of `size` yards covering `yards`. `yards` is a whole number no
/// larger than [`MAX_ESTIMATE_YARDS`], so it is exact in an f64.
fn packages_needed(yards: f64, size: f64) -> u64 {
    let mut count = ceil_snapped(yards / size);
    if count * size < yards {
        count += 1.0;
    }
    count as u64
}

/// Half-width of the window around an integer inside which `ceil_snapped`
/// treats `value` as that integer.
fn snap_window(value: f64) -> f64 {
    INTEGER_SNAP_ULPS * f64::EPSILON * value.abs().max(1.0)
}

/// Ceiling that treats values a few ulps above an integer as that integer,
/// so a product that should be exactly 5175 but lands just above it rounds
/// to 5175 rather than 5176.
fn ceil_snapped(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() <= snap_window(value) {
        nearest
    } else {
        value.ceil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn blanket() -> EstimateRequest {
        EstimateRequest {
            width: 50.0,
            height: 60.0,
            unit: LengthUnit::Inches,
            weight: "worsted".to_string(),
        }
    }

    #[test]
    fn test_worsted_blanket() {
        let result = estimate(&blanket(), &EstimatorSettings::default()).unwrap();
        assert_eq!(result.area_sq_in, 3000.0);
        assert_eq!(result.raw_yards, 4500.0);
        assert_eq!(result.primary_yards, 5175);
        assert!((result.secondary_meters - 4732.02).abs() < 1e-6);
        assert_eq!(
            result.packages,
            vec![
                PackageCount { package_size_yd: 220.0, count: 24 },
                PackageCount { package_size_yd: 380.0, count: 14 },
            ]
        );
    }

    #[test]
    fn test_metric_dimensions() {
        let request = EstimateRequest {
            width: 127.0,
            height: 152.4,
            unit: LengthUnit::Centimeters,
            ..blanket()
        };
        let result = estimate(&request, &EstimatorSettings::default()).unwrap();
        assert!((result.area_sq_in - 3000.0).abs() < 1e-6);
        assert_eq!(result.primary_yards, 5175);
    }

    #[test]
    fn test_rejects_bad_width() {
        for width in [0.0, -1.0, f64::NAN] {
            let request = EstimateRequest { width, ..blanket() };
            let err = estimate(&request, &EstimatorSettings::default()).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_DIMENSION", "width {width}");
        }
    }

    #[test]
    fn test_rejects_infinite_height() {
        let request = EstimateRequest { height: f64::INFINITY, ..blanket() };
        assert!(matches!(
            estimate(&request, &EstimatorSettings::default()),
            Err(StitchError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_unknown_weight() {
        let request = EstimateRequest { weight: "mohair".to_string(), ..blanket() };
        let err = estimate(&request, &EstimatorSettings::default()).unwrap_err();
        assert_eq!(err, StitchError::unknown_category("mohair"));
    }

    #[test]
    fn test_zero_margin_is_raw_ceiling() {
        let settings = EstimatorSettings { safety_margin: 0.0, ..Default::default() };
        let request = EstimateRequest { width: 10.5, height: 10.0, ..blanket() };
        // 105 sq in x 1.5 = 157.5 yd
        let result = estimate(&request, &settings).unwrap();
        assert_eq!(result.primary_yards, 158);
    }

    #[test]
    fn test_custom_packages() {
        let settings = EstimatorSettings {
            package_sizes_yd: vec![100.0],
            ..Default::default()
        };
        let result = estimate(&blanket(), &settings).unwrap();
        assert_eq!(result.packages.len(), 1);
        assert_eq!(result.packages[0].count, 52);
    }

    #[test]
    fn test_out_of_range() {
        let request = EstimateRequest { width: 1e300, height: 1e300, ..blanket() };
        let err = estimate(&request, &EstimatorSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "QUANTITY_OUT_OF_RANGE");
    }

    #[test]
    fn test_ceil_snapped() {
        assert_eq!(ceil_snapped(4500.0 * 1.15), 5175.0);
        assert_eq!(ceil_snapped(0.1 + 0.2 + 0.7), 1.0);
        assert_eq!(ceil_snapped(5174.2), 5175.0);
        assert_eq!(ceil_snapped(23.52), 24.0);
        assert_eq!(ceil_snapped(0.0), 0.0);
    }

    #[test]
    fn test_large_estimate_rounds_up() {
        let settings = EstimatorSettings::default();
        let worsted = find_weight("worsted").unwrap();
        // Adjusted yardage lands 0.3 yd above 1e10
        let target = 10_000_000_000.3;
        let area = target / (1.0 + settings.safety_margin) / worsted.yards_per_sq_in;
        let result = estimate_for_weight(area, worsted, &settings).unwrap();
        let adjusted = result.raw_yards * (1.0 + settings.safety_margin);
        assert!(adjusted > 10_000_000_000.0);
        assert_eq!(result.primary_yards, adjusted.ceil() as u64);
        assert!(result.primary_yards as f64 >= adjusted);
    }

    #[test]
    fn test_large_estimate_skeins_cover_yardage() {
        let request = EstimateRequest { width: 1e6, height: 1e6, ..blanket() };
        let result = estimate(&request, &EstimatorSettings::default()).unwrap();
        assert_eq!(result.primary_yards, 1_725_000_000_000);
        assert_eq!(
            result.packages,
            vec![
                PackageCount { package_size_yd: 220.0, count: 7_840_909_091 },
                PackageCount { package_size_yd: 380.0, count: 4_539_473_685 },
            ]
        );
    }

    #[test]
    fn test_packages_needed() {
        assert_eq!(packages_needed(5175.0, 220.0), 24);
        assert_eq!(packages_needed(440.0, 220.0), 2);
        assert_eq!(packages_needed(1e12, 3.0), 333_333_333_334);
        assert_eq!(packages_needed(100.0, 0.5), 200);
    }

    #[test]
    fn test_request_json() {
        let request: EstimateRequest =
            serde_json::from_str(r#"{"width": 50, "height": 60, "weight": "worsted"}"#).unwrap();
        assert_eq!(request.unit, LengthUnit::Inches);
        assert_eq!(request, blanket());
    }

    proptest! {
        #[test]
        fn estimate_covers_margin_and_skeins(
            w_exp in -2.0f64..7.0,
            h_exp in -2.0f64..7.0,
            margin in 0.0f64..1.0,
            idx in 0usize..crate::tables::YARN_WEIGHTS.len(),
        ) {
            // Areas up to 1e14 sq in stay under MAX_ESTIMATE_YARDS for every weight
            let weight = &crate::tables::YARN_WEIGHTS[idx];
            let request = EstimateRequest {
                width: 10f64.powf(w_exp),
                height: 10f64.powf(h_exp),
                unit: LengthUnit::Inches,
                weight: weight.id.to_string(),
            };
            let settings = EstimatorSettings { safety_margin: margin, ..Default::default() };
            let result = estimate(&request, &settings).unwrap();
            let primary = result.primary_yards as f64;
            let adjusted = result.raw_yards * (1.0 + margin);

            prop_assert!(primary >= result.raw_yards);
            prop_assert!(primary >= adjusted - snap_window(adjusted));
            for p in &result.packages {
                prop_assert!(p.count as f64 * p.package_size_yd >= primary);
            }
        }

        #[test]
        fn estimate_is_deterministic(w in 0.1f64..500.0, h in 0.1f64..500.0) {
            let request = EstimateRequest { width: w, height: h, ..blanket() };
            let settings = EstimatorSettings::default();
            let first = serde_json::to_string(&estimate(&request, &settings).unwrap()).unwrap();
            let second = serde_json::to_string(&estimate(&request, &settings).unwrap()).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
