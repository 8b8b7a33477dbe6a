//! Ground-truth generating components.

use serde::Serialize;

use super::density::GaussianDensity;
use crate::error::{Error, Result};
use crate::types::{GroupLabel, Matrix2, Vector2};

/// Display metadata carried alongside a component for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appearance {
    /// Fill color as a hex string.
    pub color: String,
    /// Edge color as a hex string.
    pub edge_color: String,
}

impl Appearance {
    /// Create from fill and edge hex colors.
    pub fn new(color: impl Into<String>, edge_color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            edge_color: edge_color.into(),
        }
    }

    /// Palette entry for the `index`-th component (red, blue, green, then cycling).
    pub fn palette(index: usize) -> Self {
        const PALETTE: [(&str, &str); 6] = [
            ("#FF0000", "#8B0000"),
            ("#0000FF", "#00008B"),
            ("#008000", "#006400"),
            ("#FFA500", "#FF8C00"),
            ("#800080", "#4B0082"),
            ("#00CED1", "#008B8B"),
        ];
        let (color, edge) = PALETTE[index % PALETTE.len()];
        Self::new(color, edge)
    }
}

/// One generating 2-D Gaussian: mean, covariance and display metadata.
///
/// The covariance is validated at construction, so every component in
/// existence has a well-defined density.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionComponent {
    label: GroupLabel,
    mean: Vector2,
    covariance: Matrix2,
    appearance: Appearance,
    #[serde(skip)]
    density: GaussianDensity,
}

impl DistributionComponent {
    /// Create a component, rejecting covariances that are not symmetric
    /// positive-definite.
    pub fn new(
        label: GroupLabel,
        mean: Vector2,
        covariance: Matrix2,
        appearance: Appearance,
    ) -> Result<Self> {
        let density = GaussianDensity::new(mean, covariance).map_err(|e| match e {
            Error::InvalidArgument { message } => {
                Error::invalid(format!("component {}: {}", label, message))
            }
            other => other,
        })?;

        Ok(Self {
            label,
            mean,
            covariance,
            appearance,
            density,
        })
    }

    /// Component identifier.
    pub fn label(&self) -> &GroupLabel {
        &self.label
    }

    /// True mean.
    pub fn mean(&self) -> &Vector2 {
        &self.mean
    }

    /// True covariance.
    pub fn covariance(&self) -> &Matrix2 {
        &self.covariance
    }

    /// Display metadata.
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// True per-axis standard deviation (square root of the covariance diagonal).
    pub fn std_dev(&self) -> Vector2 {
        self.covariance.diagonal().map(f64::sqrt)
    }

    /// Density function of this component.
    pub fn density(&self) -> &GaussianDensity {
        &self.density
    }

    /// Density at `x`.
    pub fn pdf(&self, x: &Vector2) -> f64 {
        self.density.pdf(x)
    }
}
