//! Planar point and point set types
//!
//! Points carry coordinates in meters. A point's identity is its index in
//! the input sequence, so coincident points remain distinct pairs for the
//! Fry transform and nearest-neighbour statistics.

use crate::io::error::{AnalysisError, Result};

/// A single 2-D location in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Easting coordinate in meters
    pub x: f64,
    /// Northing coordinate in meters
    pub y: f64,
}

impl Point {
    /// Create a point from easting/northing coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement vector from `other` to `self`
    pub fn displacement_from(&self, other: &Self) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Self) -> f64 {
        let (dx, dy) = self.displacement_from(other);
        dx.hypot(dy)
    }
}

/// An ordered, immutable sequence of at least two points
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Create a point set from a coordinate sequence
    ///
    /// Duplicate coordinates are valid; index identity keeps them distinct.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientPoints`] when fewer than two
    /// points are supplied, since nearest-neighbour statistics and the Fry
    /// transform are undefined below that size.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(AnalysisError::InsufficientPoints {
                count: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Number of points in the set
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty (never true for a constructed set)
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at the given input index
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Iterate over the points in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
