//! Property-based tests for the overlap decision rule.

use gaussian_overlap::distribution::{centroid, on_circle};
use gaussian_overlap::{
    detect, min_density, reference_scenario, sample, GroupLabel, LabeledPointSet, Matrix2,
    OverlapDetector,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Raising the threshold fraction never adds overlap points.
    #[test]
    fn prop_overlap_count_is_monotone(
        seed in any::<u64>(),
        a in -0.5f64..3.0,
        b in -0.5f64..3.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let components = reference_scenario();
        let points = sample(&components, 200, seed).unwrap();

        let low = detect(&points, &components, lo).unwrap();
        let high = detect(&points, &components, hi).unwrap();

        prop_assert!(
            high.overlap_count <= low.overlap_count,
            "fraction {} -> {} points, fraction {} -> {} points",
            lo, low.overlap_count, hi, high.overlap_count
        );
        // Every point flagged at the higher threshold is flagged at the lower one.
        for (h, l) in high.per_point_overlap.iter().zip(&low.per_point_overlap) {
            prop_assert!(!h || *l);
        }
    }

    /// The reference point classifies as overlap for any fraction below 1.
    #[test]
    fn prop_reference_point_is_overlap(
        seed in any::<u64>(),
        fraction in 0.0f64..0.999,
        radius in 0.0f64..4.0,
        variance in 0.5f64..6.0,
    ) {
        let components = on_circle(
            radius,
            &[0.0, 120.0, 240.0],
            Matrix2::from_diagonal_element(variance),
        ).unwrap();
        let sampled = sample(&components, 20, seed).unwrap();

        let mut points = sampled.points().to_vec();
        let mut labels = sampled.labels().to_vec();
        points.push(centroid(&components));
        labels.push(GroupLabel::from("Group 1"));
        let set = LabeledPointSet::new(points, labels).unwrap();

        let result = detect(&set, &components, fraction).unwrap();
        let last = set.len() - 1;
        prop_assert_eq!(result.min_densities[last], result.reference_min_density);
        prop_assert!(result.per_point_overlap[last]);
    }

    /// With a zero fraction, overlap reduces to "minimum density > 0".
    #[test]
    fn prop_zero_fraction_means_positive_density(seed in any::<u64>()) {
        let components = reference_scenario();
        let points = sample(&components, 150, seed).unwrap();
        let result = detect(&points, &components, 0.0).unwrap();

        prop_assert_eq!(result.threshold, 0.0);
        for (i, p) in points.points().iter().enumerate() {
            let positive = min_density(&components, p) > 0.0;
            prop_assert_eq!(result.per_point_overlap[i], positive);
        }
    }

    /// Detection is a pure function of its inputs.
    #[test]
    fn prop_detection_is_deterministic(seed in any::<u64>(), fraction in 0.0f64..1.0) {
        let components = reference_scenario();
        let points = sample(&components, 100, seed).unwrap();
        let detector = OverlapDetector::new().threshold_fraction(fraction);

        let a = detector.detect(&points, &components).unwrap();
        let b = detector.detect(&points, &components).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Fractions stay in [0, 1] and group tallies add up.
    #[test]
    fn prop_tallies_are_consistent(seed in any::<u64>(), fraction in -1.0f64..2.0) {
        let components = reference_scenario();
        let points = sample(&components, 120, seed).unwrap();
        let result = detect(&points, &components, fraction).unwrap();

        prop_assert!((0.0..=1.0).contains(&result.overlap_fraction));
        let sum: usize = result.per_group_overlap.iter().map(|g| g.count).sum();
        prop_assert_eq!(sum, result.overlap_count);
        prop_assert_eq!(result.overlap_indices().len(), result.overlap_count);
        for g in &result.per_group_overlap {
            prop_assert!((0.0..=1.0).contains(&g.fraction));
        }
    }
}

#[test]
fn empty_component_set_is_invalid_argument() {
    let points = sample(&reference_scenario(), 10, 42).unwrap();
    let err = detect(&points, &[], 0.2).unwrap_err();
    assert!(err.is_invalid_argument(), "got {:?}", err);
}

#[test]
fn unknown_label_is_invalid_argument() {
    let set = LabeledPointSet::new(
        vec![gaussian_overlap::Vector2::new(0.0, 0.0)],
        vec![GroupLabel::from("Group 4")],
    )
    .unwrap();
    let err = detect(&set, &reference_scenario(), 0.2).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn negative_fraction_flags_every_point() {
    let components = reference_scenario();
    let points = sample(&components, 100, 3).unwrap();
    let result = detect(&points, &components, -0.1).unwrap();
    assert_eq!(result.overlap_count, points.len());
    assert_eq!(result.overlap_fraction, 1.0);
}
