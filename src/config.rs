//! Configuration for an overlap analysis run.

use std::time::Duration;

use serde::Serialize;

use crate::constants::{
    DEFAULT_POPULATION, DEFAULT_SEED, DEFAULT_THRESHOLD_FRACTION, ELLIPSE_N_STD,
    RECOMMENDED_POPULATION, TARGET_OVERLAP_BAND, TIME_BUDGET_SECS,
};
use crate::error::{Error, Result};

/// Configuration options for [`OverlapAnalysis`](crate::OverlapAnalysis).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    // =========================================================================
    // Population
    // =========================================================================
    /// Requested total population across all groups.
    ///
    /// Rounded down to a multiple of the component count before sampling.
    /// Default: 10,000.
    pub population: usize,

    /// Seed for the sampler's generator. Default: 42.
    pub seed: u64,

    // =========================================================================
    // Overlap detection
    // =========================================================================
    /// Fraction of the reference point's minimum density used as the overlap
    /// threshold. Default: 0.20.
    pub threshold_fraction: f64,

    // =========================================================================
    // Validation targets
    // =========================================================================
    /// Overlap fraction band the run is expected to land in.
    ///
    /// Missing it is reported, never an error. Default: (0.30, 0.35).
    pub target_overlap_band: (f64, f64),

    /// Wall-clock budget for the whole pipeline. Default: 5 seconds.
    pub time_budget: Duration,

    // =========================================================================
    // Presentation
    // =========================================================================
    /// Standard deviations spanned by reported confidence ellipses. Default: 2.0.
    pub ellipse_n_std: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            seed: DEFAULT_SEED,
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
            target_overlap_band: TARGET_OVERLAP_BAND,
            time_budget: Duration::from_secs(TIME_BUDGET_SECS),
            ellipse_n_std: ELLIPSE_N_STD,
        }
    }
}

impl Config {
    /// Check values that cannot be checked by a setter alone.
    pub fn validate(&self) -> Result<()> {
        if self.population == 0 {
            return Err(Error::invalid("population must be > 0"));
        }
        if self.threshold_fraction.is_nan() {
            return Err(Error::invalid("threshold_fraction is NaN"));
        }
        let (lo, hi) = self.target_overlap_band;
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return Err(Error::invalid(format!(
                "target overlap band ({}, {}) is empty",
                lo, hi
            )));
        }
        if !self.ellipse_n_std.is_finite() || self.ellipse_n_std <= 0.0 {
            return Err(Error::invalid(format!(
                "ellipse_n_std must be finite and > 0, got {}",
                self.ellipse_n_std
            )));
        }
        Ok(())
    }

    /// Points per group for `n_components` groups: the population rounded
    /// down to a multiple of the group count, divided evenly.
    ///
    /// Fails when the population is smaller than the number of groups.
    pub fn points_per_component(&self, n_components: usize) -> Result<usize> {
        if n_components == 0 {
            return Err(Error::invalid("component set is empty"));
        }
        let per = self.population / n_components;
        if per == 0 {
            return Err(Error::invalid(format!(
                "population {} is smaller than the {} groups",
                self.population, n_components
            )));
        }
        if per * n_components != self.population {
            tracing::info!(
                requested = self.population,
                adjusted = per * n_components,
                "population adjusted to a multiple of the group count"
            );
        }
        Ok(per)
    }

    /// Whether the population is inside the recommended range.
    pub fn population_is_recommended(&self) -> bool {
        let (lo, hi) = RECOMMENDED_POPULATION;
        (lo..=hi).contains(&self.population)
    }
}
