//! Validates the full pipeline against known point configurations

use fryrose::analysis::characteristic::EstimatorMode;
use fryrose::analysis::fry::fry_transform;
use fryrose::analysis::pipeline::{PipelineConfig, run};
use fryrose::spatial::distance::DistanceMatrix;
use fryrose::spatial::points::{Point, PointSet};

fn right_triangle() -> PointSet {
    PointSet::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn test_right_triangle_distance_statistics() {
    let points = right_triangle();
    let matrix = DistanceMatrix::from_points(&points);

    let mut off_diagonal = Vec::new();
    for i in 0..3 {
        for j in (i + 1)..3 {
            off_diagonal.push(matrix.get(i, j).unwrap());
        }
    }
    off_diagonal.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(off_diagonal.first(), Some(&1.0));
    assert_eq!(off_diagonal.get(1), Some(&1.0));
    assert!((off_diagonal.get(2).unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);

    assert_eq!(matrix.nearest_neighbour_distances(), vec![1.0, 1.0, 1.0]);
}

#[test]
fn test_right_triangle_fry_cloud() {
    let cloud = fry_transform(&right_triangle());
    assert_eq!(cloud.len(), 6);

    // The east-pointing unit vector strikes east-west
    let east = cloud.iter().find(|f| f.dx == 1.0 && f.dy == 0.0).unwrap();
    assert!((east.azimuth - 90.0).abs() < 1e-12);

    // Every vector has its negation in the cloud
    let displacements: Vec<(f64, f64)> = cloud.iter().map(|f| (f.dx, f.dy)).collect();
    for &(dx, dy) in &displacements {
        assert!(displacements.contains(&(-dx, -dy)));
    }
}

#[test]
fn test_coincident_points_run_without_error() {
    let points = PointSet::new(vec![
        Point::new(10.0, 10.0),
        Point::new(10.0, 10.0),
        Point::new(40.0, 50.0),
    ])
    .unwrap();

    let matrix = DistanceMatrix::from_points(&points);
    let nn = matrix.nearest_neighbour_distances();
    assert_eq!(nn.first(), Some(&0.0));
    assert_eq!(nn.get(1), Some(&0.0));

    let output = run(&points, PipelineConfig::default()).unwrap();
    let zero_vectors: Vec<_> = output
        .fry_points
        .iter()
        .filter(|f| f.distance == 0.0)
        .collect();
    assert_eq!(zero_vectors.len(), 2);
    for f in zero_vectors {
        assert_eq!(f.azimuth, 0.0);
    }
}

#[test]
fn test_histogram_totals_track_fry_counts() {
    let points = PointSet::new(vec![
        Point::new(0.0, 0.0),
        Point::new(250.0, 100.0),
        Point::new(-300.0, 400.0),
        Point::new(1200.0, -800.0),
        Point::new(90.0, 90.0),
    ])
    .unwrap();
    let output = run(&points, PipelineConfig::default()).unwrap();

    let n = points.len();
    assert_eq!(output.fry_points.len(), n * (n - 1));
    // Folded histograms carry both compass headings of every axial azimuth
    assert_eq!(output.rose_all.total(), 2 * output.fry_points.len());

    let local_count = output
        .fry_points
        .iter()
        .filter(|f| f.distance <= output.estimate.distance)
        .count();
    assert_eq!(output.rose_characteristic.total(), 2 * local_count);
}

#[test]
fn test_both_modes_agree_on_curve_invariants() {
    let points = PointSet::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 12.0),
        Point::new(100.0, 90.0),
        Point::new(105.0, 95.0),
    ])
    .unwrap();

    for mode in [
        EstimatorMode::PeakSingleNeighbour,
        EstimatorMode::CumulativeInflection,
    ] {
        let config = PipelineConfig {
            mode,
            ..PipelineConfig::default()
        };
        let output = run(&points, config).unwrap();

        for sample in &output.estimate.curve {
            assert!((0.0..=1.0).contains(&sample.probability));
        }
        assert!(output.estimate.distance >= 0.0);
        assert!(output.estimate.probability >= 0.0);
    }

    // The cumulative curve is monotone non-decreasing
    let config = PipelineConfig {
        mode: EstimatorMode::CumulativeInflection,
        ..PipelineConfig::default()
    };
    let output = run(&points, config).unwrap();
    let curve = &output.estimate.curve;
    for pair in curve.windows(2) {
        let (a, b) = (pair.first().unwrap(), pair.last().unwrap());
        assert!(b.probability >= a.probability);
    }
}

#[test]
fn test_pipeline_idempotence() {
    let points = PointSet::new(vec![
        Point::new(3.0, 7.0),
        Point::new(-2.0, 5.0),
        Point::new(11.0, -4.0),
        Point::new(0.5, 0.5),
    ])
    .unwrap();
    let config = PipelineConfig::default();

    let first = run(&points, config).unwrap();
    let second = run(&points, config).unwrap();

    assert_eq!(first.estimate.distance, second.estimate.distance);
    assert_eq!(first.estimate.probability, second.estimate.probability);
    assert_eq!(
        first.estimate.total_connectivity,
        second.estimate.total_connectivity
    );
    assert_eq!(first.fry_points, second.fry_points);
    assert_eq!(first.rose_all.counts(), second.rose_all.counts());
    assert_eq!(
        first.rose_characteristic.counts(),
        second.rose_characteristic.counts()
    );
}
