//! # stitch_core - Crochet Calculator Engine
//!
//! `stitch_core` holds the logic behind the Stitchwise calculator widgets:
//! yarn yardage estimates, hook and thread size conversion, gauge math, and
//! stitch glossary search. All inputs and outputs are JSON-serializable so a
//! front end can pass plain data in and render plain data out.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over static reference tables
//! - **JSON-First**: Boundary types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use stitch_core::{estimate, EstimateRequest, EstimatorSettings, LengthUnit};
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
//!
//! ## Modules
//!
//! - [`tables`] - Yarn weight, hook, thread and glossary reference data
//! - [`estimate`] - Yardage estimator
//! - [`gauge`] - Stitch and row counts from a swatch
//! - [`search`] - Free-text table filtering
//! - [`calculator`] - Raw form state composed into calculations
//! - [`page_meta`] - Head tag rendering for content pages
//! - [`settings`] - Estimator settings and TOML config
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod errors;
pub mod estimate;
pub mod gauge;
pub mod page_meta;
pub mod search;
pub mod settings;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{StitchError, StitchResult};
pub use estimate::{estimate, EstimateRequest, EstimateResult, PackageCount};
pub use settings::{EstimatorSettings, StitchConfig};
pub use units::{LengthUnit, YardageUnit};
