//! Ground-truth generative model.
//!
//! - [`DistributionComponent`]: one validated 2-D Gaussian with display metadata
//! - [`GaussianDensity`]: Cholesky-backed pdf / log-pdf evaluation
//! - [`reference_scenario`]: the three-component equilateral arrangement

mod component;
mod density;
mod scenario;

pub use component::{Appearance, DistributionComponent};
pub use density::GaussianDensity;
pub use scenario::{centroid, on_circle, reference_scenario, validate_components};
