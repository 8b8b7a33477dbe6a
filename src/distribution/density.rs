//! Bivariate normal density evaluation.
//!
//! Uses a Cholesky factor of the covariance for both the log-determinant and
//! the quadratic form, so Σ is never inverted explicitly.

use nalgebra::{Cholesky, Const};

use crate::constants::LOG_2PI;
use crate::error::{Error, Result};
use crate::types::{Matrix2, Vector2};

/// Density function of a 2-D Gaussian `N(μ, Σ)`.
#[derive(Debug, Clone)]
pub struct GaussianDensity {
    mean: Vector2,
    chol: Cholesky<f64, Const<2>>,
    /// `-log(2π) - 0.5 * log det Σ`
    log_norm: f64,
}

impl GaussianDensity {
    /// Build the density for `N(mean, covariance)`.
    ///
    /// Fails with `InvalidArgument` if the covariance has non-finite entries,
    /// is not symmetric, or is not positive-definite.
    pub fn new(mean: Vector2, covariance: Matrix2) -> Result<Self> {
        if !mean.iter().all(|v| v.is_finite()) {
            return Err(Error::invalid(format!("mean {:?} is not finite", mean.as_slice())));
        }
        check_covariance(&covariance)?;

        let chol = Cholesky::new(covariance).ok_or_else(|| {
            Error::invalid(format!(
                "covariance {:?} is not positive-definite",
                covariance.as_slice()
            ))
        })?;

        // log det Σ = 2 Σ log L_ii
        let l = chol.l();
        let log_det = 2.0 * (l[(0, 0)].ln() + l[(1, 1)].ln());

        Ok(Self {
            mean,
            chol,
            log_norm: -LOG_2PI - 0.5 * log_det,
        })
    }

    /// Mean vector.
    pub fn mean(&self) -> &Vector2 {
        &self.mean
    }

    /// Lower-triangular factor `L` with `L Lᵀ = Σ`.
    pub fn cholesky_factor(&self) -> Matrix2 {
        self.chol.l()
    }

    /// Squared Mahalanobis distance `(x-μ)ᵀ Σ⁻¹ (x-μ)`.
    pub fn mahalanobis_sq(&self, x: &Vector2) -> f64 {
        let diff = x - self.mean;
        let solved = self.chol.solve(&diff);
        diff.dot(&solved)
    }

    /// Natural log of the density at `x`.
    pub fn log_pdf(&self, x: &Vector2) -> f64 {
        self.log_norm - 0.5 * self.mahalanobis_sq(x)
    }

    /// Density at `x`. Underflows to exactly 0.0 far from the mean.
    pub fn pdf(&self, x: &Vector2) -> f64 {
        self.log_pdf(x).exp()
    }
}

/// Reject covariances the density is undefined for.
///
/// Cholesky only reads the lower triangle, so symmetry has to be checked here.
pub(crate) fn check_covariance(covariance: &Matrix2) -> Result<()> {
    if !covariance.iter().all(|v| v.is_finite()) {
        return Err(Error::invalid(format!(
            "covariance {:?} has non-finite entries",
            covariance.as_slice()
        )));
    }

    let off = (covariance[(0, 1)] - covariance[(1, 0)]).abs();
    let scale = covariance[(0, 1)].abs().max(covariance[(1, 0)].abs()).max(1.0);
    if off > 1e-12 * scale {
        return Err(Error::invalid(format!(
            "covariance {:?} is not symmetric",
            covariance.as_slice()
        )));
    }

    Ok(())
}
