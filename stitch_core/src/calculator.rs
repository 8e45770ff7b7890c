//! # Calculator Forms
//!
//! Raw form state for the calculator widgets, as a front end holds it while
//! the user types. Each form has a pure `compute` that parses the fields and
//! runs the calculation, so the UI only needs to call it on every change and
//! render whatever comes back.
//!
//! ## Example
//!
//! ```rust
//! use stitch_core::calculator::YardageForm;
//! use stitch_core::settings::StitchConfig;
//!
//! let form = YardageForm {
//!     width: "50".to_string(),
//!     height: "60".to_string(),
//!     unit: "in".to_string(),
//!     weight: "Worsted".to_string(),
//! };
//! let result = form.compute(&StitchConfig::default()).unwrap();
//! assert_eq!(result.primary_yards, 5175);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{StitchError, StitchResult};
use crate::estimate::{estimate, EstimateRequest, EstimateResult};
use crate::gauge::{self, GaugeRequest, GaugeResult, GaugeSwatch};
use crate::settings::StitchConfig;
use crate::tables::{search_glossary, Difficulty, GlossaryTerm};
use crate::units::LengthUnit;

/// Yardage estimator form. Blank unit and weight fall back to config defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YardageForm {
    pub width: String,
    pub height: String,
    pub unit: String,
    pub weight: String,
}

impl YardageForm {
    /// Parse the form into a request.
    pub fn to_request(&self, config: &StitchConfig) -> StitchResult<EstimateRequest> {
        Ok(EstimateRequest {
            width: parse_measure("width", &self.width)?,
            height: parse_measure("height", &self.height)?,
            unit: parse_unit(&self.unit, config.defaults.unit)?,
            weight: or_default(&self.weight, &config.defaults.weight).to_string(),
        })
    }

    pub fn compute(&self, config: &StitchConfig) -> StitchResult<EstimateResult> {
        estimate(&self.to_request(config)?, &config.estimator)
    }
}

/// Gauge calculator form. One unit applies to both swatch and target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeForm {
    pub swatch_stitches: String,
    pub swatch_rows: String,
    pub swatch_size: String,
    pub width: String,
    pub height: String,
    pub unit: String,
}

impl Default for GaugeForm {
    fn default() -> Self {
        GaugeForm {
            swatch_stitches: String::new(),
            swatch_rows: String::new(),
            swatch_size: "4".to_string(),
            width: String::new(),
            height: String::new(),
            unit: String::new(),
        }
    }
}

impl GaugeForm {
    pub fn to_request(&self, config: &StitchConfig) -> StitchResult<GaugeRequest> {
        let unit = parse_unit(&self.unit, config.defaults.unit)?;
        Ok(GaugeRequest {
            swatch: GaugeSwatch {
                stitches: parse_measure("swatch.stitches", &self.swatch_stitches)?,
                rows: parse_measure("swatch.rows", &self.swatch_rows)?,
                size: parse_measure("swatch.size", &self.swatch_size)?,
                unit,
            },
            width: parse_measure("width", &self.width)?,
            height: parse_measure("height", &self.height)?,
            unit,
        })
    }

    pub fn compute(&self, config: &StitchConfig) -> StitchResult<GaugeResult> {
        gauge::calculate(&self.to_request(config)?)
    }
}

/// Glossary search box plus tier dropdown. A blank tier means "all tiers".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaryForm {
    pub query: String,
    pub tier: String,
}

impl GlossaryForm {
    pub fn compute(&self) -> StitchResult<Vec<&'static GlossaryTerm>> {
        let tier = if self.tier.trim().is_empty() {
            None
        } else {
            Some(self.tier.parse::<Difficulty>()?)
        };
        Ok(search_glossary(&self.query, tier))
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed
    }
}

fn parse_unit(text: &str, default: LengthUnit) -> StitchResult<LengthUnit> {
    if text.trim().is_empty() {
        Ok(default)
    } else {
        text.parse()
    }
}

/// Parse a measurement field. Unparsable text is reported as an invalid
/// dimension so the UI can show it next to the field.
fn parse_measure(field: &str, text: &str) -> StitchResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StitchError::invalid_dimension(field, "", "Required"));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| StitchError::invalid_dimension(field, trimmed, "Not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> YardageForm {
        YardageForm {
            width: "50".to_string(),
            height: " 60 ".to_string(),
            unit: String::new(),
            weight: String::new(),
        }
    }

    #[test]
    fn test_blank_fields_use_defaults() {
        let request = form().to_request(&StitchConfig::default()).unwrap();
        assert_eq!(request.unit, LengthUnit::Inches);
        assert_eq!(request.weight, "worsted");
        assert_eq!(request.height, 60.0);
    }

    #[test]
    fn test_compute_matches_estimate() {
        let result = form().compute(&StitchConfig::default()).unwrap();
        assert_eq!(result.primary_yards, 5175);
    }

    #[test]
    fn test_unparsable_width() {
        let bad = YardageForm { width: "fifty".to_string(), ..form() };
        let err = bad.compute(&StitchConfig::default()).unwrap_err();
        assert_eq!(err, StitchError::invalid_dimension("width", "fifty", "Not a number"));
    }

    #[test]
    fn test_empty_width() {
        let bad = YardageForm { width: "  ".to_string(), ..form() };
        assert_eq!(bad.compute(&StitchConfig::default()).unwrap_err().error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_nan_text_rejected() {
        let bad = YardageForm { width: "NaN".to_string(), ..form() };
        assert_eq!(bad.compute(&StitchConfig::default()).unwrap_err().error_code(), "INVALID_DIMENSION");
    }

    #[test]
    fn test_unsupported_unit() {
        let bad = YardageForm { unit: "ft".to_string(), ..form() };
        assert_eq!(bad.compute(&StitchConfig::default()).unwrap_err(), StitchError::unsupported_unit("ft"));
    }

    #[test]
    fn test_gauge_form() {
        let form = GaugeForm {
            swatch_stitches: "16".to_string(),
            swatch_rows: "18".to_string(),
            width: "20".to_string(),
            height: "10".to_string(),
            ..Default::default()
        };
        let result = form.compute(&StitchConfig::default()).unwrap();
        assert_eq!(result.stitches, 80);
        assert_eq!(result.rows, 45);
    }

    #[test]
    fn test_glossary_form() {
        let all = GlossaryForm::default().compute().unwrap();
        assert_eq!(all.len(), crate::tables::GLOSSARY.len());

        let form = GlossaryForm { query: "post".to_string(), tier: "intermediate".to_string() };
        let hits: Vec<_> = form.compute().unwrap().iter().map(|t| t.abbreviation).collect();
        assert_eq!(hits, vec!["BPdc", "FPdc"]);

        let bad = GlossaryForm { query: String::new(), tier: "expert".to_string() };
        assert_eq!(bad.compute().unwrap_err().error_code(), "INVALID_INPUT");
    }
}
