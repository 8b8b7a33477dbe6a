//! End-to-end checks on the reference scenario.
//!
//! Three isotropic components (Σ = 3.85 I) at 0°, 120°, 240° on a circle of
//! radius 2, seed 42, threshold fraction 0.20.

use gaussian_overlap::{
    compute_group_statistics, detect, reference_scenario, sample, OverlapAnalysis,
};

// =============================================================================
// CALIBRATED OVERLAP BAND
// =============================================================================

#[test]
fn overlap_fraction_lands_in_target_band() {
    let components = reference_scenario();
    let points = sample(&components, 3334, 42).unwrap();
    let result = detect(&points, &components, 0.20).unwrap();

    assert_eq!(points.len(), 10_002);
    assert!(
        (0.30..=0.35).contains(&result.overlap_fraction),
        "overlap fraction {} outside [0.30, 0.35]",
        result.overlap_fraction
    );
}

#[test]
fn analysis_run_passes_validation() {
    let report = OverlapAnalysis::new().population(10_002).run().unwrap();

    assert_eq!(report.dataset.len(), 10_002);
    assert_eq!(report.points_per_component, 3334);
    assert!(report.validation.overlap_in_band, "{:?}", report.validation);
    assert!(report.validation.equal_group_sizes);
    assert!(report.geometry.overlap_hull.is_some());
}

#[test]
fn default_population_rounds_to_9999() {
    let report = OverlapAnalysis::new().run().unwrap();
    assert_eq!(report.dataset.len(), 9_999);
    assert_eq!(report.points_per_component, 3333);
}

// =============================================================================
// SYMMETRY
// =============================================================================

#[test]
fn per_group_fractions_are_approximately_equal() {
    let components = reference_scenario();
    let points = sample(&components, 3334, 42).unwrap();
    let result = detect(&points, &components, 0.20).unwrap();

    let fractions: Vec<f64> = result.per_group_overlap.iter().map(|g| g.fraction).collect();
    assert_eq!(fractions.len(), 3);
    for a in &fractions {
        for b in &fractions {
            assert!(
                (a - b).abs() < 0.05,
                "per-group fractions diverge: {:?}",
                fractions
            );
        }
    }
}

// =============================================================================
// STATISTICS RECOVER THE GENERATING PARAMETERS
// =============================================================================

#[test]
fn empirical_statistics_track_true_parameters() {
    let components = reference_scenario();
    let points = sample(&components, 3334, 42).unwrap();
    let stats = compute_group_statistics(&points, &components).unwrap();

    for s in &stats {
        assert_eq!(s.count, 3334);
        // Standard error of the mean is sqrt(3.85 / 3334) ≈ 0.034 per axis.
        assert!(s.mean_error() < 0.2, "{}: mean error {}", s.label, s.mean_error());
        assert!(
            s.covariance_error() < 0.5,
            "{}: covariance error {}",
            s.label,
            s.covariance_error()
        );
        assert!((s.true_std[0] - 3.85f64.sqrt()).abs() < 1e-12);
    }
}

#[test]
fn reference_threshold_matches_closed_form() {
    let components = reference_scenario();
    let points = sample(&components, 10, 42).unwrap();
    let result = detect(&points, &components, 0.20).unwrap();

    let peak = 1.0 / (2.0 * std::f64::consts::PI * 3.85);
    let expected = peak * (-0.5 * 4.0 / 3.85f64).exp();
    assert!(result.reference_point.norm() < 1e-12);
    assert!((result.reference_min_density - expected).abs() / expected < 1e-12);
    assert!((result.threshold - 0.2 * expected).abs() / expected < 1e-12);
}
