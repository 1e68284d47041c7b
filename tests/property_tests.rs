//! Property-based tests for the distance metrics and the adaptive distance
//! measure.

use adaptive_knn::{Classifier, DistanceMetric, KnnConfig, KnnError, Pattern};
use proptest::prelude::*;

const METRICS: [DistanceMetric; 2] = [DistanceMetric::Euclidean, DistanceMetric::Manhattan];
const LABELS: [&str; 3] = ["A", "B", "C"];

fn vector_strategy(dim: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0f64, dim)
}

fn labeled_set_strategy() -> impl Strategy<Value = Vec<(Vec<f64>, usize)>> {
    prop::collection::vec((vector_strategy(3), 0usize..LABELS.len()), 2..10)
}

fn brute_force_margin(set: &[(Vec<f64>, usize)], i: usize, metric: DistanceMetric) -> Option<f64> {
    set.iter()
        .filter(|(_, label)| *label != set[i].1)
        .map(|(v, _)| metric.distance(&set[i].0, v).unwrap())
        .reduce(f64::min)
}

proptest! {
    #[test]
    fn test_distance_non_negative(a in vector_strategy(16), b in vector_strategy(16)) {
        for metric in METRICS {
            let d = metric.distance(&a, &b).unwrap();
            prop_assert!(d >= 0.0, "{} distance must be non-negative, got {}", metric, d);
        }
    }

    #[test]
    fn test_distance_symmetric(a in vector_strategy(16), b in vector_strategy(16)) {
        for metric in METRICS {
            let ab = metric.distance(&a, &b).unwrap();
            let ba = metric.distance(&b, &a).unwrap();
            prop_assert!((ab - ba).abs() < 1e-9, "{} distance should be symmetric", metric);
        }
    }

    #[test]
    fn test_distance_zero_iff_equal(a in vector_strategy(8), b in vector_strategy(8)) {
        for metric in METRICS {
            prop_assert_eq!(metric.distance(&a, &a).unwrap(), 0.0);
            if a != b {
                prop_assert!(metric.distance(&a, &b).unwrap() > 0.0);
            }
        }
    }

    #[test]
    fn test_unequal_lengths_fail(
        a in prop::collection::vec(-10.0f64..10.0, 0..12),
        b in prop::collection::vec(-10.0f64..10.0, 0..12),
    ) {
        prop_assume!(a.len() != b.len());
        for metric in METRICS {
            match metric.distance(&a, &b) {
                Err(KnnError::DimensionMismatch { left, right }) => {
                    prop_assert_eq!((left, right), (a.len(), b.len()));
                }
                other => prop_assert!(false, "expected DimensionMismatch, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_adm_scale_is_min_foreign_distance(
        set in labeled_set_strategy(),
        metric_idx in 0usize..2,
    ) {
        let metric = METRICS[metric_idx];
        let margins: Vec<_> = (0..set.len()).map(|i| brute_force_margin(&set, i, metric)).collect();
        prop_assume!(margins.iter().all(|m| m.is_some_and(|m| m > 0.0)));

        let mut training: Vec<Pattern> = set
            .iter()
            .map(|(v, label)| Pattern::training(v.clone(), LABELS[*label]))
            .collect();
        let mut testing = vec![Pattern::testing(vec![0.0; 3], None)];
        Classifier::new(&mut training, &mut testing, KnnConfig::new(1, metric, true))
            .unwrap()
            .classify()
            .unwrap();

        for (pattern, margin) in training.iter().zip(margins) {
            let margin = margin.unwrap();
            prop_assert!((pattern.scale() - margin).abs() <= 1e-9 * margin.max(1.0));
        }
    }

    #[test]
    fn test_adm_single_class_keeps_unit_scale(
        vectors in prop::collection::vec(vector_strategy(3), 1..8),
    ) {
        let mut training: Vec<Pattern> = vectors
            .into_iter()
            .map(|v| Pattern::training(v, "only"))
            .collect();
        let mut testing = vec![Pattern::testing(vec![1.0, 2.0, 3.0], None)];
        let labels: Vec<String> = Classifier::new(
            &mut training,
            &mut testing,
            KnnConfig::new(1, DistanceMetric::Euclidean, true),
        )
        .unwrap()
        .classify()
        .unwrap()
        .iter()
        .map(|p| p.label().unwrap().to_string())
        .collect();

        prop_assert_eq!(labels, vec!["only".to_string()]);
        for pattern in &training {
            prop_assert_eq!(pattern.scale(), 1.0);
            prop_assert!(pattern.distance().is_finite());
        }
    }
}
