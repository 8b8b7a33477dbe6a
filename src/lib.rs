//! # gaussian-overlap
//!
//! Generate overlapping 2-D Gaussian populations and find where they overlap.
//!
//! This crate samples labeled point clouds from K bivariate normal components,
//! computes per-group descriptive statistics against the generating
//! parameters, and classifies each point as inside or outside the region of
//! mutual overlap:
//! - `d(x) = min_i f_i(x)`, the smallest component density at the point
//! - reference point = centroid of the component means
//! - threshold = `fraction * d(reference point)` (default fraction 0.20)
//! - overlap iff `d(x) > threshold`
//!
//! The default scenario places three isotropic components (`Σ = 3.85 I`) at
//! 0°, 120° and 240° on a circle of radius 2, which puts roughly a third of
//! the population in the overlap region.
//!
//! ## Quick Start
//!
//! ```
//! use gaussian_overlap::OverlapAnalysis;
//!
//! let report = OverlapAnalysis::new()
//!     .population(9_000)
//!     .seed(42)
//!     .run()
//!     .unwrap();
//!
//! println!("Overlap: {:.2}%", report.overlap.overlap_percent());
//! for g in &report.overlap.per_group_overlap {
//!     println!("{}: {} points", g.label, g.count);
//! }
//! ```
//!
//! The stages can also be used on their own:
//!
//! ```
//! use gaussian_overlap::{compute_group_statistics, detect, reference_scenario, sample};
//!
//! let components = reference_scenario();
//! let points = sample(&components, 1_000, 7).unwrap();
//! let stats = compute_group_statistics(&points, &components).unwrap();
//! let overlap = detect(&points, &components, 0.20).unwrap();
//! assert_eq!(stats.len(), 3);
//! assert_eq!(overlap.per_point_overlap.len(), 3_000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod analysis;
mod config;
mod dataset;
mod error;
mod sampling;
mod types;

// Functional modules
pub mod constants;
pub mod distribution;
pub mod geometry;
pub mod output;
pub mod overlap;
pub mod statistics;

// Re-exports for public API
pub use analysis::{AnalysisReport, Geometry, OverlapAnalysis, Validation};
pub use config::Config;
pub use dataset::LabeledPointSet;
pub use distribution::{reference_scenario, Appearance, DistributionComponent, GaussianDensity};
pub use error::{Error, Result};
pub use overlap::{detect, min_density, GroupOverlap, OverlapDetector, OverlapResult};
pub use sampling::{sample, Sampler};
pub use statistics::{compute_group_statistics, GroupStatistics};
pub use types::{GroupLabel, Matrix2, Vector2};
