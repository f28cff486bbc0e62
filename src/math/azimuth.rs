//! Conversion from Cartesian displacements to geological axial azimuths
//!
//! Azimuths follow the strike/trend convention: 0° points to geographic
//! North and angles increase clockwise. Directions are axial, so a vector
//! and its negation map to the same value in [0°, 180°).

/// Width of the axial azimuth range in degrees
pub const AXIAL_RANGE_DEG: f64 = 180.0;

/// Width of the full compass range in degrees
pub const COMPASS_RANGE_DEG: f64 = 360.0;

/// Convert a Cartesian displacement to an axial azimuth in [0°, 180°)
///
/// Computes `(90° − atan2(dy, dx)) mod 180°`. The zero vector has no
/// mathematically defined direction; it maps to 0° by convention so that
/// coincident point pairs produce deterministic output.
pub fn axial_azimuth(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    let theta = dy.atan2(dx).to_degrees();
    (90.0 - theta).rem_euclid(AXIAL_RANGE_DEG)
}

/// Fold axial azimuths onto the full compass range
///
/// Each axial direction in [0°, 180°) becomes its two equivalent compass
/// headings, the original and the original plus 180°, doubling the count.
/// Used for symmetric rose-diagram rendering.
pub fn fold_to_compass(azimuths: &[f64]) -> Vec<f64> {
    let mut folded = Vec::with_capacity(azimuths.len() * 2);
    for &az in azimuths {
        folded.push(az);
        folded.push((az + AXIAL_RANGE_DEG).rem_euclid(COMPASS_RANGE_DEG));
    }
    folded
}
