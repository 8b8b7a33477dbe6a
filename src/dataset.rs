//! Labeled point clouds.

use serde::Serialize;

use crate::distribution::DistributionComponent;
use crate::error::{Error, Result};
use crate::types::{GroupLabel, Vector2};

/// Points with one group label each, stored as parallel sequences.
///
/// Created by the sampler and consumed read-only downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledPointSet {
    points: Vec<Vector2>,
    labels: Vec<GroupLabel>,
}

impl LabeledPointSet {
    /// Build from parallel point and label sequences.
    pub fn new(points: Vec<Vector2>, labels: Vec<GroupLabel>) -> Result<Self> {
        if points.len() != labels.len() {
            return Err(Error::invalid(format!(
                "{} points but {} labels",
                points.len(),
                labels.len()
            )));
        }
        Ok(Self { points, labels })
    }

    /// Check every label names one of `components`.
    pub fn check_labels(&self, components: &[DistributionComponent]) -> Result<()> {
        for label in &self.labels {
            if !components.iter().any(|c| c.label() == label) {
                return Err(Error::invalid(format!(
                    "label {} does not match any configured component",
                    label
                )));
            }
        }
        Ok(())
    }

    /// All points, in sampling order.
    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// All labels, parallel to [`points`](Self::points).
    pub fn labels(&self) -> &[GroupLabel] {
        &self.labels
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate `(point, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Vector2, &GroupLabel)> {
        self.points.iter().zip(self.labels.iter())
    }

    /// Points carrying `label`, in sampling order.
    pub fn partition(&self, label: &GroupLabel) -> Vec<Vector2> {
        self.iter()
            .filter(|(_, l)| *l == label)
            .map(|(p, _)| *p)
            .collect()
    }

    /// Number of points carrying `label`.
    pub fn count(&self, label: &GroupLabel) -> usize {
        self.labels.iter().filter(|l| *l == label).count()
    }
}
