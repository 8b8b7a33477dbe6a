//! Density-threshold overlap detection.
//!
//! ## Rule
//!
//! For each point `x`, `d(x) = min_i f_i(x)` over the component densities.
//! The reference point `c` is the centroid of the component means and
//! `threshold = fraction * min_i f_i(c)`. A point is in the overlap region iff
//! `d(x) > threshold` (strict).
//!
//! The rule uses the generating parameters, never fitted ones.

use crate::constants::DEFAULT_THRESHOLD_FRACTION;
use crate::dataset::LabeledPointSet;
use crate::distribution::{centroid, validate_components, DistributionComponent};
use crate::error::{Error, Result};
use crate::types::Vector2;

use super::result::{GroupOverlap, OverlapResult};

/// Smallest density any component assigns to `x`.
///
/// Returns `+inf` for an empty component slice.
pub fn min_density(components: &[DistributionComponent], x: &Vector2) -> f64 {
    components
        .iter()
        .map(|c| c.pdf(x))
        .fold(f64::INFINITY, f64::min)
}

/// Classifies points as overlap / exclusive.
///
/// # Example
///
/// ```
/// use gaussian_overlap::{reference_scenario, sample, OverlapDetector};
///
/// let components = reference_scenario();
/// let points = sample(&components, 500, 42).unwrap();
/// let result = OverlapDetector::new()
///     .threshold_fraction(0.2)
///     .detect(&points, &components)
///     .unwrap();
/// assert_eq!(result.per_point_overlap.len(), 1500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapDetector {
    threshold_fraction: f64,
}

impl Default for OverlapDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlapDetector {
    /// Detector with the default threshold fraction (0.20).
    pub fn new() -> Self {
        Self {
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
        }
    }

    /// Set the fraction of the reference minimum density used as threshold.
    ///
    /// Values `<= 0` or very large are allowed; NaN is rejected at `detect`.
    pub fn threshold_fraction(mut self, fraction: f64) -> Self {
        self.threshold_fraction = fraction;
        self
    }

    /// Current threshold fraction.
    pub fn get_threshold_fraction(&self) -> f64 {
        self.threshold_fraction
    }

    /// Classify every point of `point_set` against `components`.
    pub fn detect(
        &self,
        point_set: &LabeledPointSet,
        components: &[DistributionComponent],
    ) -> Result<OverlapResult> {
        validate_components(components)?;
        if self.threshold_fraction.is_nan() {
            return Err(Error::invalid("threshold_fraction is NaN"));
        }
        point_set.check_labels(components)?;

        let reference_point = centroid(components);
        let reference_min_density = min_density(components, &reference_point);
        // An infinite fraction is an infinite threshold even when the
        // reference density underflows to zero.
        let threshold = if self.threshold_fraction.is_infinite() {
            self.threshold_fraction
        } else {
            self.threshold_fraction * reference_min_density
        };

        let min_densities: Vec<f64> = point_set
            .points()
            .iter()
            .map(|x| min_density(components, x))
            .collect();
        let per_point_overlap: Vec<bool> = min_densities.iter().map(|&d| d > threshold).collect();

        let overlap_count = per_point_overlap.iter().filter(|&&o| o).count();
        let overlap_fraction = fraction(overlap_count, point_set.len());

        let per_group_overlap = components
            .iter()
            .map(|c| {
                let (count, total) = point_set
                    .labels()
                    .iter()
                    .zip(&per_point_overlap)
                    .filter(|(l, _)| *l == c.label())
                    .fold((0, 0), |(count, total), (_, &o)| (count + o as usize, total + 1));
                GroupOverlap {
                    label: c.label().clone(),
                    count,
                    total,
                    fraction: fraction(count, total),
                }
            })
            .collect();

        tracing::debug!(
            reference_min_density,
            threshold,
            overlap_count,
            total = point_set.len(),
            "classified overlap region"
        );

        Ok(OverlapResult {
            per_point_overlap,
            min_densities,
            overlap_count,
            overlap_fraction,
            per_group_overlap,
            reference_point,
            reference_min_density,
            threshold_fraction: self.threshold_fraction,
            threshold,
        })
    }
}

/// Classify with an explicit threshold fraction.
pub fn detect(
    point_set: &LabeledPointSet,
    components: &[DistributionComponent],
    threshold_fraction: f64,
) -> Result<OverlapResult> {
    OverlapDetector::new()
        .threshold_fraction(threshold_fraction)
        .detect(point_set, components)
}

fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
