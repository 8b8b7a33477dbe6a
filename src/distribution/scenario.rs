//! Construction of component arrangements.

use std::collections::HashSet;

use super::component::{Appearance, DistributionComponent};
use crate::constants::{REFERENCE_ANGLES_DEG, REFERENCE_RADIUS, REFERENCE_VARIANCE};
use crate::error::{Error, Result};
use crate::types::{GroupLabel, Matrix2, Vector2};

/// The reference scenario: three components at 0°, 120°, 240° on a circle of
/// radius 2.0, sharing covariance `[[3.85, 0], [0, 3.85]]`.
pub fn reference_scenario() -> Vec<DistributionComponent> {
    let covariance = Matrix2::from_diagonal_element(REFERENCE_VARIANCE);
    match on_circle(REFERENCE_RADIUS, &REFERENCE_ANGLES_DEG, covariance) {
        Ok(components) => components,
        Err(e) => unreachable!("reference scenario is valid: {}", e),
    }
}

/// Components with a shared covariance, placed on a circle around the origin
/// at the given angles (degrees). Labels are `Group 1..=K`.
pub fn on_circle(
    radius: f64,
    angles_deg: &[f64],
    covariance: Matrix2,
) -> Result<Vec<DistributionComponent>> {
    if angles_deg.is_empty() {
        return Err(Error::invalid("at least one component angle is required"));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(Error::invalid(format!("radius must be finite and >= 0, got {}", radius)));
    }

    angles_deg
        .iter()
        .enumerate()
        .map(|(i, &angle)| {
            let theta = angle.to_radians();
            DistributionComponent::new(
                GroupLabel::numbered(i + 1),
                Vector2::new(radius * theta.cos(), radius * theta.sin()),
                covariance,
                Appearance::palette(i),
            )
        })
        .collect()
}

/// Check a component sequence is usable: non-empty with unique labels.
pub fn validate_components(components: &[DistributionComponent]) -> Result<()> {
    if components.is_empty() {
        return Err(Error::invalid("component set is empty"));
    }

    let mut seen = HashSet::with_capacity(components.len());
    for c in components {
        if !seen.insert(c.label()) {
            return Err(Error::invalid(format!("duplicate component label {}", c.label())));
        }
    }
    Ok(())
}

/// Unweighted centroid of the component means.
///
/// Returns the origin for an empty slice; callers validate first.
pub fn centroid(components: &[DistributionComponent]) -> Vector2 {
    if components.is_empty() {
        return Vector2::zeros();
    }
    let sum = components
        .iter()
        .fold(Vector2::zeros(), |acc, c| acc + c.mean());
    sum / components.len() as f64
}
