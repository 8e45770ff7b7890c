//! # Settings
//!
//! Tunable estimator parameters and calculator defaults, loadable from a
//! TOML file. Every field has a default, so an empty file is valid.
//!
//! ## File Format
//!
//! ```toml
//! [estimator]
//! safety_margin = 0.15
//! package_sizes_yd = [220.0, 380.0]
//!
//! [defaults]
//! weight = "worsted"
//! unit = "in"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stitch_core::settings::StitchConfig;
//!
//! let config = StitchConfig::from_toml_str("[estimator]\nsafety_margin = 0.2\n").unwrap();
//! assert_eq!(config.estimator.safety_margin, 0.2);
//! assert_eq!(config.estimator.package_sizes_yd, vec![220.0, 380.0]);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{StitchError, StitchResult};
use crate::tables::find_weight;
use crate::units::LengthUnit;

/// Default proportional safety margin added to every estimate
pub const DEFAULT_SAFETY_MARGIN: f64 = 0.15;

/// Default skein sizes in yards
pub const DEFAULT_PACKAGE_SIZES_YD: [f64; 2] = [220.0, 380.0];

/// Estimator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    /// Proportional margin added to the raw estimate (0.15 = +15%)
    pub safety_margin: f64,

    /// Skein/ball sizes in yards to round the estimate up to
    pub package_sizes_yd: Vec<f64>,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        EstimatorSettings {
            safety_margin: DEFAULT_SAFETY_MARGIN,
            package_sizes_yd: DEFAULT_PACKAGE_SIZES_YD.to_vec(),
        }
    }
}

impl EstimatorSettings {
    /// Validate settings.
    pub fn validate(&self) -> StitchResult<()> {
        if !self.safety_margin.is_finite() || self.safety_margin < 0.0 {
            return Err(StitchError::invalid_settings(
                "safety_margin",
                format!("{} must be a finite, non-negative fraction", self.safety_margin),
            ));
        }
        for size in &self.package_sizes_yd {
            if !size.is_finite() || *size <= 0.0 {
                return Err(StitchError::invalid_settings(
                    "package_sizes_yd",
                    format!("{} is not a positive yardage", size),
                ));
            }
        }
        Ok(())
    }
}

/// Defaults applied when a calculator field is left blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    /// Yarn weight identifier
    pub weight: String,

    /// Length unit for dimensions
    pub unit: LengthUnit,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        CalculatorDefaults {
            weight: "worsted".to_string(),
            unit: LengthUnit::Inches,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchConfig {
    pub estimator: EstimatorSettings,
    pub defaults: CalculatorDefaults,
}

impl StitchConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(text: &str) -> StitchResult<Self> {
        let config: StitchConfig =
            toml::from_str(text).map_err(|e| StitchError::config_error("<inline>", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> StitchResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| StitchError::config_error(path.display().to_string(), e.to_string()))?;
        let config: StitchConfig = toml::from_str(&text)
            .map_err(|e| StitchError::config_error(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> StitchResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate estimator settings and that the default weight exists.
    pub fn validate(&self) -> StitchResult<()> {
        self.estimator.validate()?;
        if find_weight(&self.defaults.weight).is_none() {
            return Err(StitchError::unknown_category(&self.defaults.weight));
        }
        Ok(())
    }
}
