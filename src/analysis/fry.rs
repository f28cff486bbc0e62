//! Fry transform: all ordered pairwise displacement vectors
//!
//! For every ordered pair (i, j) with i ≠ j the transform records the
//! displacement `pts[i] − pts[j]`, its magnitude, and its axial azimuth.
//! Both orderings are kept, so the cloud of N·(N−1) vectors is
//! point-symmetric by construction. The transform is a pure function of the
//! point set.

use crate::math::azimuth::axial_azimuth;
use crate::spatial::points::PointSet;

/// One pairwise displacement vector with derived magnitude and azimuth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FryPoint {
    /// Index of the displaced point (the pair's head)
    pub point: usize,
    /// Index of the origin point (the pair's tail, subtracted)
    pub origin: usize,
    /// Easting component of the displacement in meters
    pub dx: f64,
    /// Northing component of the displacement in meters
    pub dy: f64,
    /// Euclidean magnitude of the displacement in meters
    pub distance: f64,
    /// Axial azimuth of the displacement in degrees, [0°, 180°)
    pub azimuth: f64,
}

/// Generate the full Fry point cloud for a point set
///
/// Produces exactly N·(N−1) vectors. Coincident pairs yield zero-magnitude
/// vectors with azimuth 0° by convention; they are valid members of the
/// cloud, not errors.
pub fn fry_transform(points: &PointSet) -> Vec<FryPoint> {
    let n = points.len();
    let mut cloud = Vec::with_capacity(n * n.saturating_sub(1));

    for (i, head) in points.iter().enumerate() {
        for (j, tail) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let (dx, dy) = head.displacement_from(tail);
            cloud.push(FryPoint {
                point: i,
                origin: j,
                dx,
                dy,
                distance: dx.hypot(dy),
                azimuth: axial_azimuth(dx, dy),
            });
        }
    }

    cloud
}

/// Extract the azimuth sequence of a Fry cloud in generation order
pub fn azimuths(cloud: &[FryPoint]) -> Vec<f64> {
    cloud.iter().map(|f| f.azimuth).collect()
}

/// Azimuths of the Fry points whose magnitude is within a threshold
///
/// The masked subset compares local directional structure against the full
/// cloud; a threshold below every magnitude yields an empty sequence.
pub fn masked_azimuths(cloud: &[FryPoint], max_distance: f64) -> Vec<f64> {
    cloud
        .iter()
        .filter(|f| f.distance <= max_distance)
        .map(|f| f.azimuth)
        .collect()
}
