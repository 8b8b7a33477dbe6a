//! Geometry consumed by renderers: confidence ellipses and the convex hull
//! of the overlap region.
//!
//! Nothing here feeds back into classification.

use std::cmp::Ordering;

use nalgebra::SymmetricEigen;
use serde::Serialize;

use crate::types::{GroupLabel, Matrix2, Vector2};

/// Ellipse spanning `n_std` standard deviations of a 2-D Gaussian.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceEllipse {
    /// Center (the mean).
    pub center: Vector2,
    /// Full length of the major axis, `2 * n_std * sqrt(λ_max)`.
    pub width: f64,
    /// Full length of the minor axis, `2 * n_std * sqrt(λ_min)`.
    pub height: f64,
    /// Major-axis orientation in degrees, in (-90, 90].
    pub angle_deg: f64,
}

impl ConfidenceEllipse {
    /// Ellipse for `N(mean, covariance)` at `n_std` standard deviations.
    ///
    /// Negative eigenvalues from rounding are clamped to zero.
    pub fn new(mean: Vector2, covariance: Matrix2, n_std: f64) -> Self {
        let eigen = SymmetricEigen::new(covariance);
        let (major, minor) = if eigen.eigenvalues[0] >= eigen.eigenvalues[1] {
            (0, 1)
        } else {
            (1, 0)
        };

        let axis = eigen.eigenvectors.column(major);
        let mut angle_deg = axis[1].atan2(axis[0]).to_degrees();
        // An axis and its negation describe the same ellipse.
        if angle_deg <= -90.0 {
            angle_deg += 180.0;
        } else if angle_deg > 90.0 {
            angle_deg -= 180.0;
        }

        Self {
            center: mean,
            width: 2.0 * n_std * eigen.eigenvalues[major].max(0.0).sqrt(),
            height: 2.0 * n_std * eigen.eigenvalues[minor].max(0.0).sqrt(),
            angle_deg,
        }
    }
}

/// A group's ellipse, tagged with its label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEllipse {
    /// Group identifier.
    pub label: GroupLabel,
    /// Ellipse from the group's sample mean and covariance.
    pub ellipse: ConfidenceEllipse,
}

/// Convex hull by Andrew's monotone chain, counter-clockwise, without
/// repeating the first vertex.
///
/// Returns `None` when fewer than three non-collinear points exist; a
/// degenerate overlap region is a valid outcome, not an error.
pub fn convex_hull(points: &[Vector2]) -> Option<Vec<Vector2>> {
    let mut pts: Vec<Vector2> = points
        .iter()
        .filter(|p| p.iter().all(|v| v.is_finite()))
        .copied()
        .collect();
    if pts.len() < 3 {
        return None;
    }

    pts.sort_by(|a, b| match a[0].total_cmp(&b[0]) {
        Ordering::Equal => a[1].total_cmp(&b[1]),
        other => other,
    });
    pts.dedup();

    let mut lower: Vec<Vector2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Vector2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);

    if lower.len() < 3 {
        None
    } else {
        Some(lower)
    }
}

/// Shoelace area of a simple polygon.
pub fn polygon_area(vertices: &[Vector2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let twice: f64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a[0] * b[1] - b[0] * a[1])
        .sum();
    twice.abs() / 2.0
}

/// z-component of `(a - o) × (b - o)`.
fn cross(o: &Vector2, a: &Vector2, b: &Vector2) -> f64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isotropic_ellipse() {
        let e = ConfidenceEllipse::new(Vector2::new(1.0, 2.0), Matrix2::from_diagonal_element(4.0), 2.0);
        assert!((e.width - 8.0).abs() < 1e-12);
        assert!((e.height - 8.0).abs() < 1e-12);
        assert_eq!(e.center, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_axis_aligned_ellipse_orientation() {
        let e = ConfidenceEllipse::new(Vector2::zeros(), Matrix2::new(1.0, 0.0, 0.0, 9.0), 1.0);
        assert!((e.width - 6.0).abs() < 1e-12);
        assert!((e.height - 2.0).abs() < 1e-12);
        assert!((e.angle_deg.abs() - 90.0).abs() < 1e-9, "angle = {}", e.angle_deg);
    }

    #[test]
    fn test_rotated_ellipse() {
        // Eigenvectors along the diagonals; major axis at 45°.
        let e = ConfidenceEllipse::new(Vector2::zeros(), Matrix2::new(2.0, 1.0, 1.0, 2.0), 1.0);
        assert!((e.width - 2.0 * 3f64.sqrt()).abs() < 1e-12);
        assert!((e.height - 2.0).abs() < 1e-12);
        assert!((e.angle_deg - 45.0).abs() < 1e-9, "angle = {}", e.angle_deg);
    }

    #[test]
    fn test_hull_of_square_with_interior_points() {
        let pts = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(0.5, 0.5),
            Vector2::new(0.2, 0.7),
            Vector2::new(0.5, 0.0),
        ];
        let hull = convex_hull(&pts).unwrap();
        assert_eq!(hull.len(), 4);
        assert!((polygon_area(&hull) - 1.0).abs() < 1e-12);
        assert_eq!(hull[0], Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_hull_degenerate_cases() {
        assert!(convex_hull(&[]).is_none());
        assert!(convex_hull(&[Vector2::new(1.0, 1.0), Vector2::new(2.0, 2.0)]).is_none());

        let collinear: Vec<Vector2> = (0..5).map(|i| Vector2::new(i as f64, 2.0 * i as f64)).collect();
        assert!(convex_hull(&collinear).is_none());

        let dupes = vec![Vector2::new(1.0, 1.0); 10];
        assert!(convex_hull(&dupes).is_none());
    }
}
