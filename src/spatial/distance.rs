//! Pairwise distance matrix and nearest-neighbour statistics
//!
//! The matrix stores all N×N Euclidean distances with the diagonal set to
//! infinity, so a point is never its own neighbour and every row minimum is
//! a true nearest-neighbour distance. O(N²) space is acceptable at the
//! target scale of tens to low thousands of deposits.

use ndarray::Array2;

use crate::spatial::points::PointSet;

/// Symmetric matrix of pairwise Euclidean distances with an excluded diagonal
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    distances: Array2<f64>,
}

impl DistanceMatrix {
    /// Compute the full pairwise distance matrix for a point set
    ///
    /// Diagonal entries are stored as `f64::INFINITY` so self-pairs never
    /// win a minimum. Zero off-diagonal distances from coincident points are
    /// valid values, not errors.
    pub fn from_points(points: &PointSet) -> Self {
        let n = points.len();
        let distances = Array2::from_shape_fn((n, n), |(i, j)| {
            if i == j {
                return f64::INFINITY;
            }
            match (points.get(i), points.get(j)) {
                (Some(a), Some(b)) => a.distance_to(b),
                _ => f64::INFINITY,
            }
        });

        Self { distances }
    }

    /// Number of points the matrix was built from
    pub fn len(&self) -> usize {
        self.distances.nrows()
    }

    /// Whether the matrix is empty (never true for a validated point set)
    pub fn is_empty(&self) -> bool {
        self.distances.nrows() == 0
    }

    /// Distance between points `i` and `j`, infinity on the diagonal
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.distances.get([i, j]).copied()
    }

    /// Minimum off-diagonal distance per point
    ///
    /// One value per point, in input order. The infinite diagonal guarantees
    /// the minimum is always taken over j ≠ i; with N ≥ 2 every row has at
    /// least one finite entry.
    pub fn nearest_neighbour_distances(&self) -> Vec<f64> {
        self.distances
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .collect()
    }

    /// Largest finite pairwise distance in the matrix
    ///
    /// Zero for a fully coincident point set.
    pub fn max_finite(&self) -> f64 {
        self.distances
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(0.0, f64::max)
    }

    /// Each point's off-diagonal distances, sorted ascending
    ///
    /// The sorted rows let threshold sweeps count neighbours within a radius
    /// by binary search instead of rescanning the matrix at every grid step.
    pub fn sorted_rows(&self) -> Vec<Vec<f64>> {
        self.distances
            .rows()
            .into_iter()
            .map(|row| {
                let mut sorted: Vec<f64> = row.iter().copied().filter(|d| d.is_finite()).collect();
                sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                sorted
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceMatrix;
    use crate::spatial::points::{Point, PointSet};

    fn right_triangle() -> PointSet {
        PointSet::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_symmetry_and_excluded_diagonal() {
        let matrix = DistanceMatrix::from_points(&right_triangle());
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), Some(f64::INFINITY));
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert_eq!(matrix.get(0, 1), Some(1.0));
        assert_eq!(matrix.get(0, 2), Some(1.0));
        assert!((matrix.get(1, 2).unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_neighbour_matches_brute_force() {
        let points = PointSet::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(-1.0, -1.0),
        ])
        .unwrap();
        let matrix = DistanceMatrix::from_points(&points);
        let nn = matrix.nearest_neighbour_distances();

        assert_eq!(nn.len(), points.len());
        for (i, &observed) in nn.iter().enumerate() {
            let mut expected = f64::INFINITY;
            for j in 0..points.len() {
                if i != j {
                    let d = points.get(i).unwrap().distance_to(points.get(j).unwrap());
                    expected = expected.min(d);
                }
            }
            assert!((observed - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_two_point_minimum_case() {
        let points = PointSet::new(vec![Point::new(0.0, 0.0), Point::new(0.0, 2.0)]).unwrap();
        let matrix = DistanceMatrix::from_points(&points);
        assert_eq!(matrix.nearest_neighbour_distances(), vec![2.0, 2.0]);
        assert_eq!(matrix.max_finite(), 2.0);
    }

    #[test]
    fn test_coincident_points_yield_zero_minimum() {
        let points = PointSet::new(vec![
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(4.0, 5.0),
        ])
        .unwrap();
        let matrix = DistanceMatrix::from_points(&points);
        let nn = matrix.nearest_neighbour_distances();
        assert_eq!(nn.first(), Some(&0.0));
        assert_eq!(nn.get(1), Some(&0.0));
        assert_eq!(nn.get(2), Some(&5.0));
    }

    #[test]
    fn test_sorted_rows_exclude_self() {
        let matrix = DistanceMatrix::from_points(&right_triangle());
        let rows = matrix.sorted_rows();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.len(), 2);
            assert!(row.iter().all(|d| d.is_finite()));
            assert!(row.windows(2).all(|w| w.first() <= w.last()));
        }
    }
}
