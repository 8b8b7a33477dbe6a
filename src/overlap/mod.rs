//! Overlap region detection.

mod detector;
mod result;

pub use detector::{detect, min_density, OverlapDetector};
pub use result::{GroupOverlap, OverlapResult};
