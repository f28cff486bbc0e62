//! Spatial data structures for deposit point sets
//!
//! This module contains the input-side data model:
//! - Planar points and validated point sets
//! - The pairwise distance matrix and nearest-neighbour extraction

/// Pairwise distance matrix and nearest-neighbour statistics
pub mod distance;
/// Planar point and validated point set types
pub mod points;

pub use distance::DistanceMatrix;
pub use points::{Point, PointSet};
