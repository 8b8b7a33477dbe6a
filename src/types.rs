//! Type aliases and common types.

use std::fmt;

use nalgebra::{SMatrix, SVector};
use serde::{Deserialize, Serialize};

/// 2x2 matrix (covariance).
pub type Matrix2 = SMatrix<f64, 2, 2>;

/// 2-dimensional vector (point or mean).
pub type Vector2 = SVector<f64, 2>;

/// Identifier of a distribution component / point group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupLabel(String);

impl GroupLabel {
    /// Create a label from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Label for the 1-based group index, e.g. `Group 2`.
    pub fn numbered(index: usize) -> Self {
        Self(format!("Group {}", index))
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
