//! Main `OverlapAnalysis` entry point and builder.
//!
//! Runs the linear pipeline: sample → group statistics → overlap detection,
//! then derives renderer geometry and validation checks.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::config::Config;
use crate::constants::RECOMMENDED_POPULATION;
use crate::dataset::LabeledPointSet;
use crate::distribution::{reference_scenario, validate_components, DistributionComponent};
use crate::error::Result;
use crate::geometry::{convex_hull, polygon_area, ConfidenceEllipse, GroupEllipse};
use crate::overlap::{OverlapDetector, OverlapResult};
use crate::sampling::Sampler;
use crate::statistics::{compute_group_statistics, GroupStatistics};
use crate::types::Vector2;

/// Builder and runner for a full analysis.
///
/// # Example
///
/// ```
/// use gaussian_overlap::OverlapAnalysis;
///
/// let report = OverlapAnalysis::new()
///     .population(3_000)
///     .seed(7)
///     .run()
///     .unwrap();
/// assert_eq!(report.dataset.len(), 3_000);
/// ```
#[derive(Debug, Clone)]
pub struct OverlapAnalysis {
    config: Config,
    components: Vec<DistributionComponent>,
}

impl Default for OverlapAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlapAnalysis {
    /// Reference scenario with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            components: reference_scenario(),
        }
    }

    /// Start from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            components: reference_scenario(),
        }
    }

    /// Set the requested total population.
    pub fn population(mut self, n: usize) -> Self {
        assert!(n > 0, "population must be > 0");
        self.config.population = n;
        self
    }

    /// Set the sampler seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the overlap threshold fraction.
    pub fn threshold_fraction(mut self, fraction: f64) -> Self {
        assert!(!fraction.is_nan(), "threshold_fraction must not be NaN");
        self.config.threshold_fraction = fraction;
        self
    }

    /// Set the expected overlap fraction band.
    pub fn target_overlap_band(mut self, lo: f64, hi: f64) -> Self {
        assert!(lo <= hi, "target overlap band must satisfy lo <= hi");
        self.config.target_overlap_band = (lo, hi);
        self
    }

    /// Set the wall-clock budget.
    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.config.time_budget = budget;
        self
    }

    /// Replace the generating components.
    pub fn components(mut self, components: Vec<DistributionComponent>) -> Self {
        self.components = components;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the generating components.
    pub fn get_components(&self) -> &[DistributionComponent] {
        &self.components
    }

    /// Run the pipeline.
    ///
    /// Each stage fully consumes the previous stage's output; any failure
    /// aborts the run with no partial report.
    pub fn run(&self) -> Result<AnalysisReport> {
        let start = Instant::now();

        self.config.validate()?;
        validate_components(&self.components)?;
        if !self.config.population_is_recommended() {
            let (lo, hi) = RECOMMENDED_POPULATION;
            tracing::warn!(
                population = self.config.population,
                "recommended population size is between {} and {}",
                lo,
                hi
            );
        }
        let points_per_component = self.config.points_per_component(self.components.len())?;

        let dataset = Sampler::new(self.config.seed).sample(&self.components, points_per_component)?;
        let statistics = compute_group_statistics(&dataset, &self.components)?;
        let overlap = OverlapDetector::new()
            .threshold_fraction(self.config.threshold_fraction)
            .detect(&dataset, &self.components)?;

        let geometry = Geometry::from_results(&dataset, &statistics, &overlap, self.config.ellipse_n_std);

        let elapsed = start.elapsed();
        let validation = Validation::evaluate(
            &self.config,
            &statistics,
            &overlap,
            points_per_component,
            elapsed,
        );

        tracing::debug!(
            points = dataset.len(),
            overlap_fraction = overlap.overlap_fraction,
            elapsed_ms = elapsed.as_millis() as u64,
            "analysis complete"
        );

        Ok(AnalysisReport {
            config: self.config.clone(),
            components: self.components.clone(),
            points_per_component,
            dataset,
            statistics,
            overlap,
            geometry,
            validation,
            elapsed,
        })
    }
}

/// Everything a reporter needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Configuration the run used.
    pub config: Config,
    /// Generating components.
    pub components: Vec<DistributionComponent>,
    /// Points drawn per component after population adjustment.
    pub points_per_component: usize,
    /// Sampled points.
    pub dataset: LabeledPointSet,
    /// Per-group statistics, in component order.
    pub statistics: Vec<GroupStatistics>,
    /// Overlap classification.
    pub overlap: OverlapResult,
    /// Renderer geometry.
    pub geometry: Geometry,
    /// Validation checks.
    pub validation: Validation,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Geometry derived from a run for the distribution and overlap views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    /// Confidence ellipse per group from the sample mean and covariance.
    pub ellipses: Vec<GroupEllipse>,
    /// Convex hull of the overlap points, `None` when degenerate.
    pub overlap_hull: Option<Vec<Vector2>>,
    /// Area enclosed by `overlap_hull`, `None` when there is no hull.
    pub overlap_hull_area: Option<f64>,
}

impl Geometry {
    /// Derive ellipses and the overlap hull.
    pub fn from_results(
        dataset: &LabeledPointSet,
        statistics: &[GroupStatistics],
        overlap: &OverlapResult,
        n_std: f64,
    ) -> Self {
        let ellipses = statistics
            .iter()
            .map(|s| GroupEllipse {
                label: s.label.clone(),
                ellipse: ConfidenceEllipse::new(s.empirical_mean, s.empirical_covariance, n_std),
            })
            .collect();

        let overlap_hull = convex_hull(&overlap.overlap_points(dataset));
        let overlap_hull_area = overlap_hull.as_deref().map(polygon_area);

        Self {
            ellipses,
            overlap_hull,
            overlap_hull_area,
        }
    }
}

/// Outcome of the run's sanity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validation {
    /// Overlap fraction landed inside the target band.
    pub overlap_in_band: bool,
    /// Every group has exactly the expected number of points.
    pub equal_group_sizes: bool,
    /// The run finished within the time budget.
    pub within_time_budget: bool,
}

impl Validation {
    /// Evaluate all checks, logging each miss.
    pub fn evaluate(
        config: &Config,
        statistics: &[GroupStatistics],
        overlap: &OverlapResult,
        points_per_component: usize,
        elapsed: Duration,
    ) -> Self {
        let (lo, hi) = config.target_overlap_band;
        let overlap_in_band = (lo..=hi).contains(&overlap.overlap_fraction);
        if !overlap_in_band {
            tracing::warn!(
                overlap_fraction = overlap.overlap_fraction,
                lo,
                hi,
                "overlap fraction outside target band"
            );
        }

        let equal_group_sizes = statistics.iter().all(|s| s.count == points_per_component);
        if !equal_group_sizes {
            tracing::warn!("group sizes are unequal");
        }

        let within_time_budget = elapsed < config.time_budget;
        if !within_time_budget {
            tracing::warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = config.time_budget.as_millis() as u64,
                "analysis exceeded time budget"
            );
        }

        Self {
            overlap_in_band,
            equal_group_sizes,
            within_time_budget,
        }
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.overlap_in_band && self.equal_group_sizes && self.within_time_budget
    }
}
