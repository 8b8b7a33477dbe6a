//! Per-group empirical statistics paired with the generating parameters.

use serde::Serialize;

use super::covariance::WelfordCovariance2;
use crate::dataset::LabeledPointSet;
use crate::distribution::{validate_components, DistributionComponent};
use crate::error::{Error, Result};
use crate::types::{GroupLabel, Matrix2, Vector2};

/// Minimum partition size for the unbiased covariance estimator.
pub const MIN_POINTS_FOR_COVARIANCE: usize = 2;

/// Empirical and true statistics for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStatistics {
    /// Group identifier.
    pub label: GroupLabel,
    /// Number of points in the partition.
    pub count: usize,
    /// Arithmetic mean of the partition.
    pub empirical_mean: Vector2,
    /// Bessel-corrected sample covariance.
    pub empirical_covariance: Matrix2,
    /// Square root of the sample covariance diagonal.
    pub empirical_std: Vector2,
    /// Generating mean.
    pub true_mean: Vector2,
    /// Generating covariance.
    pub true_covariance: Matrix2,
    /// Square root of the generating covariance diagonal.
    pub true_std: Vector2,
}

impl GroupStatistics {
    /// Euclidean distance between empirical and true mean.
    pub fn mean_error(&self) -> f64 {
        (self.empirical_mean - self.true_mean).norm()
    }

    /// Largest absolute entry-wise difference between empirical and true covariance.
    pub fn covariance_error(&self) -> f64 {
        (self.empirical_covariance - self.true_covariance).abs().max()
    }
}

/// Statistics for one partition against its generating component.
pub fn group_statistics(
    component: &DistributionComponent,
    points: &[Vector2],
) -> Result<GroupStatistics> {
    let acc: WelfordCovariance2 = points.iter().collect();
    let covariance = acc.covariance().ok_or_else(|| Error::InsufficientData {
        label: component.label().clone(),
        count: acc.count(),
        required: MIN_POINTS_FOR_COVARIANCE,
    })?;

    Ok(GroupStatistics {
        label: component.label().clone(),
        count: acc.count(),
        empirical_mean: acc.mean(),
        empirical_covariance: covariance,
        empirical_std: covariance.diagonal().map(f64::sqrt),
        true_mean: *component.mean(),
        true_covariance: *component.covariance(),
        true_std: component.std_dev(),
    })
}

/// Compute statistics for every component's partition, in component order.
///
/// Fails with `InsufficientData` on the first group with fewer than two
/// points; use [`compute_group_statistics_lenient`] to keep the others.
pub fn compute_group_statistics(
    point_set: &LabeledPointSet,
    components: &[DistributionComponent],
) -> Result<Vec<GroupStatistics>> {
    validate_components(components)?;
    point_set.check_labels(components)?;

    components
        .iter()
        .map(|c| group_statistics(c, &point_set.partition(c.label())))
        .collect()
}

/// Like [`compute_group_statistics`], but reports each group's outcome
/// separately so callers can drop groups that are too small.
pub fn compute_group_statistics_lenient(
    point_set: &LabeledPointSet,
    components: &[DistributionComponent],
) -> Result<Vec<Result<GroupStatistics>>> {
    validate_components(components)?;
    point_set.check_labels(components)?;

    Ok(components
        .iter()
        .map(|c| group_statistics(c, &point_set.partition(c.label())))
        .collect())
}
