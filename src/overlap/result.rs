//! Overlap classification results.

use serde::Serialize;

use crate::dataset::LabeledPointSet;
use crate::types::{GroupLabel, Vector2};

/// Overlap tally for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupOverlap {
    /// Group identifier.
    pub label: GroupLabel,
    /// Points of this group inside the overlap region.
    pub count: usize,
    /// Size of the group's partition.
    pub total: usize,
    /// `count / total`, or 0.0 for an empty partition.
    pub fraction: f64,
}

/// Per-point overlap classification plus the calibration it was made with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapResult {
    /// Overlap flag per point, parallel to the point set.
    pub per_point_overlap: Vec<bool>,
    /// Minimum component density per point, parallel to the point set.
    pub min_densities: Vec<f64>,
    /// Number of points in the overlap region.
    pub overlap_count: usize,
    /// `overlap_count / total points`, in [0, 1].
    pub overlap_fraction: f64,
    /// Per-group tallies, in component order.
    pub per_group_overlap: Vec<GroupOverlap>,
    /// Centroid of the component means.
    pub reference_point: Vector2,
    /// Minimum component density at the reference point.
    pub reference_min_density: f64,
    /// Fraction of `reference_min_density` used as the threshold.
    pub threshold_fraction: f64,
    /// `threshold_fraction * reference_min_density`.
    pub threshold: f64,
}

impl OverlapResult {
    /// Indices of points classified as overlap.
    pub fn overlap_indices(&self) -> Vec<usize> {
        self.per_point_overlap
            .iter()
            .enumerate()
            .filter_map(|(i, &o)| o.then_some(i))
            .collect()
    }

    /// Coordinates of the overlapping points of `point_set`.
    ///
    /// `point_set` must be the set this result was computed from.
    pub fn overlap_points(&self, point_set: &LabeledPointSet) -> Vec<Vector2> {
        point_set
            .points()
            .iter()
            .zip(&self.per_point_overlap)
            .filter_map(|(p, &o)| o.then_some(*p))
            .collect()
    }

    /// Tally for `label`, if it is one of the configured groups.
    pub fn group(&self, label: &GroupLabel) -> Option<&GroupOverlap> {
        self.per_group_overlap.iter().find(|g| &g.label == label)
    }

    /// Overlap as a percentage.
    pub fn overlap_percent(&self) -> f64 {
        self.overlap_fraction * 100.0
    }
}
