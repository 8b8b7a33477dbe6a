//! Descriptive statistics per group.
//!
//! This module provides:
//! - Online (Welford) mean/covariance accumulation for 2-D points
//! - Per-group empirical statistics paired with the generating parameters

mod covariance;
mod group;

pub use covariance::WelfordCovariance2;
pub use group::{
    compute_group_statistics, compute_group_statistics_lenient, group_statistics,
    GroupStatistics, MIN_POINTS_FOR_COVARIANCE,
};
