//! Online mean and covariance for 2-D points.

use crate::types::{Matrix2, Vector2};

/// Online covariance accumulator using Welford's algorithm.
///
/// Accumulates the running mean and `M2 = Σ(x - μ)(x - μ)ᵀ` in one pass.
/// The unbiased covariance is `M2 / (n - 1)`.
#[derive(Debug, Clone)]
pub struct WelfordCovariance2 {
    n: usize,
    mean: Vector2,
    m2: Matrix2,
}

impl WelfordCovariance2 {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            n: 0,
            mean: Vector2::zeros(),
            m2: Matrix2::zeros(),
        }
    }

    /// Add one point.
    ///
    /// ```text
    /// δ  = x - μₙ₋₁
    /// μₙ = μₙ₋₁ + δ/n
    /// δ' = x - μₙ
    /// M2ₙ = M2ₙ₋₁ + δ·δ'ᵀ
    /// ```
    pub fn update(&mut self, x: &Vector2) {
        self.n += 1;
        let n = self.n as f64;

        let delta = x - self.mean;
        self.mean += delta / n;
        let delta2 = x - self.mean;
        self.m2 += delta * delta2.transpose();
    }

    /// Merge another accumulator (Chan's parallel update).
    pub fn merge(&mut self, other: &Self) {
        if other.n == 0 {
            return;
        }
        if self.n == 0 {
            *self = other.clone();
            return;
        }

        let n_a = self.n as f64;
        let n_b = other.n as f64;
        let n_ab = n_a + n_b;

        let delta = other.mean - self.mean;
        self.mean = (self.mean * n_a + other.mean * n_b) / n_ab;
        self.m2 = self.m2 + other.m2 + delta * delta.transpose() * (n_a * n_b / n_ab);
        self.n += other.n;
    }

    /// Number of points seen.
    pub fn count(&self) -> usize {
        self.n
    }

    /// Running mean (zero when empty).
    pub fn mean(&self) -> Vector2 {
        self.mean
    }

    /// Bessel-corrected sample covariance, or `None` for fewer than 2 points.
    pub fn covariance(&self) -> Option<Matrix2> {
        if self.n < 2 {
            return None;
        }
        // Symmetrize away rounding drift in the off-diagonal.
        let cov = self.m2 / (self.n - 1) as f64;
        Some((cov + cov.transpose()) * 0.5)
    }
}

impl Default for WelfordCovariance2 {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> FromIterator<&'a Vector2> for WelfordCovariance2 {
    fn from_iter<I: IntoIterator<Item = &'a Vector2>>(iter: I) -> Self {
        let mut acc = Self::new();
        for x in iter {
            acc.update(x);
        }
        acc
    }
}
